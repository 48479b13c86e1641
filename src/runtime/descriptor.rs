//! Immutable type metadata.
//!
//! A `TypeDescriptor` is built once, on first resolution of a type name, from
//! the registered definition; after that it never changes, even if the name
//! is re-registered. Descriptors are shared as `Arc` and are safe to hand
//! between threads.

use crate::core::instance::Instance;
use crate::core::value::{TypeTag, Val, Visibility};
use crate::reflect::error::{MemberKind, ReflectError};
use crate::reflect::invoke::{ConstructorHandle, FieldHandle, MethodHandle};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::sync::Arc;

/// Parameter type list of a constructor or method signature.
pub type ParamList = SmallVec<[TypeTag; 4]>;

/// Constructor body: receives the default-initialized instance and the
/// (already arity/type checked) argument list.
pub type ConstructorFn = fn(&mut Instance, &[Val]) -> Result<(), String>;

/// Method body: receives the target instance and checked arguments, returns
/// the method result.
pub type MethodFn = fn(&mut Instance, &[Val]) -> Result<Val, String>;

/// A declared field: name, declared type, visibility and the default value
/// instances start from.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    pub(crate) name: String,
    pub(crate) ty: TypeTag,
    pub(crate) visibility: Visibility,
    pub(crate) default: Val,
}

impl FieldDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> TypeTag {
        self.ty
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn default(&self) -> &Val {
        &self.default
    }
}

/// A declared constructor: ordered parameter types plus the handler that
/// initializes a freshly allocated instance.
#[derive(Debug, Clone)]
pub struct ConstructorDescriptor {
    pub(crate) params: ParamList,
    pub(crate) handler: ConstructorFn,
}

impl ConstructorDescriptor {
    pub fn params(&self) -> &[TypeTag] {
        &self.params
    }
}

/// A declared method: name, signature, visibility and handler.
#[derive(Debug, Clone)]
pub struct MethodDescriptor {
    pub(crate) name: String,
    pub(crate) params: ParamList,
    pub(crate) ret: Option<TypeTag>,
    pub(crate) visibility: Visibility,
    pub(crate) handler: MethodFn,
}

impl MethodDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[TypeTag] {
        &self.params
    }

    /// Declared return shape; `None` means the method yields `Val::Null`.
    pub fn return_type(&self) -> Option<TypeTag> {
        self.ret
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }
}

/// Runtime metadata record for one registered type.
///
/// Member collections keep registration order. Methods may share a name with
/// different signatures; lookup is exact arity + type match.
#[derive(Debug)]
pub struct TypeDescriptor {
    pub(crate) name: Arc<str>,
    pub(crate) fields: IndexMap<String, FieldDescriptor>,
    pub(crate) constructors: Vec<ConstructorDescriptor>,
    pub(crate) methods: Vec<MethodDescriptor>,
}

impl TypeDescriptor {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.values()
    }

    pub fn constructors(&self) -> &[ConstructorDescriptor] {
        &self.constructors
    }

    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Result<FieldHandle<'_>, ReflectError> {
        match self.fields.get(name) {
            Some(field) => Ok(FieldHandle::new(self, field)),
            None => Err(ReflectError::MemberNotFound {
                type_name: self.name.to_string(),
                kind: MemberKind::Field,
                member: name.to_string(),
            }),
        }
    }

    /// Select the constructor whose parameter list exactly matches `params`.
    pub fn constructor(&self, params: &[TypeTag]) -> Result<ConstructorHandle<'_>, ReflectError> {
        match self.constructors.iter().find(|c| c.params[..] == *params) {
            Some(ctor) => Ok(ConstructorHandle::new(self, ctor)),
            None => Err(ReflectError::MemberNotFound {
                type_name: self.name.to_string(),
                kind: MemberKind::Constructor,
                member: "new".to_string(),
            }),
        }
    }

    /// Select the method with this name whose parameter list exactly matches
    /// `params`. A name hit with a signature miss is still `MemberNotFound`.
    pub fn method(&self, name: &str, params: &[TypeTag]) -> Result<MethodHandle<'_>, ReflectError> {
        match self
            .methods
            .iter()
            .find(|m| m.name == name && m.params[..] == *params)
        {
            Some(method) => Ok(MethodHandle::new(self, method)),
            None => Err(ReflectError::MemberNotFound {
                type_name: self.name.to_string(),
                kind: MemberKind::Method,
                member: name.to_string(),
            }),
        }
    }

    /// Allocate an instance with every field at its default value. The
    /// constructor handler runs against this.
    pub(crate) fn allocate(&self) -> Instance {
        let properties: IndexMap<String, Val> = self
            .fields
            .iter()
            .map(|(name, field)| (name.clone(), field.default.clone()))
            .collect();
        Instance::new(Arc::clone(&self.name), properties)
    }
}

/// Render a parameter type list for error messages, e.g. `(string, int)`.
pub(crate) fn format_signature(params: &[TypeTag]) -> String {
    let names: Vec<&str> = params.iter().map(|t| t.name()).collect();
    format!("({})", names.join(", "))
}

/// Render an argument list's runtime types, e.g. `(string, null)`.
pub(crate) fn format_arg_types(args: &[Val]) -> String {
    let names: Vec<&str> = args.iter().map(|v| v.type_name()).collect();
    format!("({})", names.join(", "))
}
