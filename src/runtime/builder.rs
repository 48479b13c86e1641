//! Type registration.
//!
//! Rust has no native runtime reflection, so types enroll their members
//! explicitly: a `TypeBuilder` assembles a `TypeDef`, and registering that
//! definition makes the type resolvable by name. `TypeProvider` groups
//! related registrations into one module, typically run once at startup.

use crate::core::value::{TypeTag, Val, Visibility};
use crate::runtime::descriptor::{
    ConstructorDescriptor, ConstructorFn, FieldDescriptor, MethodDescriptor, MethodFn, ParamList,
    TypeDescriptor,
};
use crate::runtime::registry::TypeRegistry;
use indexmap::IndexMap;
use std::sync::Arc;

/// Raw registration record for one type. Built by `TypeBuilder`, consumed by
/// the registry on first resolution.
#[derive(Debug, Clone)]
pub struct TypeDef {
    name: String,
    fields: IndexMap<String, FieldDescriptor>,
    constructors: Vec<ConstructorDescriptor>,
    methods: Vec<MethodDescriptor>,
}

impl TypeDef {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Freeze this definition into an immutable descriptor.
    pub(crate) fn build_descriptor(&self) -> TypeDescriptor {
        TypeDescriptor {
            name: Arc::from(self.name.as_str()),
            fields: self.fields.clone(),
            constructors: self.constructors.clone(),
            methods: self.methods.clone(),
        }
    }
}

/// Fluent builder for a `TypeDef`.
///
/// Registering the same field name twice keeps the last declaration.
/// Constructors and methods accumulate in declaration order; method lookup
/// later picks the first exact signature match.
#[derive(Debug, Clone)]
pub struct TypeBuilder {
    def: TypeDef,
}

impl TypeBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            def: TypeDef {
                name: name.to_string(),
                fields: IndexMap::new(),
                constructors: Vec::new(),
                methods: Vec::new(),
            },
        }
    }

    /// Declare a public field.
    pub fn field(self, name: &str, ty: TypeTag, default: Val) -> Self {
        self.field_with_visibility(name, ty, Visibility::Public, default)
    }

    /// Declare a private field.
    pub fn private_field(self, name: &str, ty: TypeTag, default: Val) -> Self {
        self.field_with_visibility(name, ty, Visibility::Private, default)
    }

    pub fn field_with_visibility(
        mut self,
        name: &str,
        ty: TypeTag,
        visibility: Visibility,
        default: Val,
    ) -> Self {
        self.def.fields.insert(
            name.to_string(),
            FieldDescriptor {
                name: name.to_string(),
                ty,
                visibility,
                default,
            },
        );
        self
    }

    /// Declare a constructor with the given parameter types.
    pub fn constructor(mut self, params: &[TypeTag], handler: ConstructorFn) -> Self {
        self.def.constructors.push(ConstructorDescriptor {
            params: ParamList::from_slice(params),
            handler,
        });
        self
    }

    /// Declare a public method.
    pub fn method(
        self,
        name: &str,
        params: &[TypeTag],
        ret: Option<TypeTag>,
        handler: MethodFn,
    ) -> Self {
        self.method_with_visibility(name, params, ret, Visibility::Public, handler)
    }

    /// Declare a private method.
    pub fn private_method(
        self,
        name: &str,
        params: &[TypeTag],
        ret: Option<TypeTag>,
        handler: MethodFn,
    ) -> Self {
        self.method_with_visibility(name, params, ret, Visibility::Private, handler)
    }

    /// Declare a protected method.
    pub fn protected_method(
        self,
        name: &str,
        params: &[TypeTag],
        ret: Option<TypeTag>,
        handler: MethodFn,
    ) -> Self {
        self.method_with_visibility(name, params, ret, Visibility::Protected, handler)
    }

    pub fn method_with_visibility(
        mut self,
        name: &str,
        params: &[TypeTag],
        ret: Option<TypeTag>,
        visibility: Visibility,
        handler: MethodFn,
    ) -> Self {
        self.def.methods.push(MethodDescriptor {
            name: name.to_string(),
            params: ParamList::from_slice(params),
            ret,
            visibility,
            handler,
        });
        self
    }

    pub fn build(self) -> TypeDef {
        self.def
    }
}

/// A registration module: enrolls one or more type definitions into a
/// registry. Implementations are run once, at startup, against either a
/// local registry or the process-wide one.
pub trait TypeProvider {
    /// Provider name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Enroll this provider's types.
    fn register(&self, registry: &mut TypeRegistry);
}
