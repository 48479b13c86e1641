//! Dynamic construction, method invocation and field access.
//!
//! Handles pair a member descriptor with its owning `TypeDescriptor` so every
//! operation can report errors with full member context. Check order for
//! gated operations: receiver type, then visibility, then arguments, then the
//! handler body. The visibility bypass never relaxes argument checking.

use crate::core::instance::Instance;
use crate::core::value::{TypeTag, Val};
use crate::reflect::error::{MemberKind, ReflectError};
use crate::reflect::visibility::{Access, check_member_access};
use crate::runtime::descriptor::{
    ConstructorDescriptor, FieldDescriptor, MethodDescriptor, TypeDescriptor, format_arg_types,
    format_signature,
};

/// A field of a resolved type, bound to its owner for gated access.
#[derive(Debug, Clone, Copy)]
pub struct FieldHandle<'a> {
    owner: &'a TypeDescriptor,
    field: &'a FieldDescriptor,
}

impl<'a> FieldHandle<'a> {
    pub(crate) fn new(owner: &'a TypeDescriptor, field: &'a FieldDescriptor) -> Self {
        Self { owner, field }
    }

    pub fn descriptor(&self) -> &'a FieldDescriptor {
        self.field
    }

    /// Read the field's current value. Reads are a plain metadata-driven
    /// view and are not visibility gated; only mutation is.
    pub fn get(&self, instance: &Instance) -> Result<Val, ReflectError> {
        self.check_receiver(instance)?;
        // The field is declared, so a constructed instance always carries it.
        instance
            .get(&self.field.name)
            .cloned()
            .ok_or_else(|| ReflectError::MemberNotFound {
                type_name: self.owner.name().to_string(),
                kind: MemberKind::Field,
                member: self.field.name.clone(),
            })
    }

    /// Overwrite the field. Non-public fields require `Access::Bypass`, and
    /// the value must match the declared type.
    pub fn set(
        &self,
        instance: &mut Instance,
        value: Val,
        access: Access,
    ) -> Result<(), ReflectError> {
        self.check_receiver(instance)?;
        check_member_access(
            self.owner.name(),
            &self.field.name,
            MemberKind::Field,
            self.field.visibility,
            access,
        )?;
        if value.tag() != Some(self.field.ty) {
            return Err(ReflectError::ArgumentMismatch {
                type_name: self.owner.name().to_string(),
                member: self.field.name.clone(),
                expected: self.field.ty.name().to_string(),
                got: value.type_name().to_string(),
            });
        }
        instance.set(&self.field.name, value);
        Ok(())
    }

    fn check_receiver(&self, instance: &Instance) -> Result<(), ReflectError> {
        check_receiver_type(self.owner, &self.field.name, instance)
    }
}

/// A selected constructor, bound to its owner for allocation.
#[derive(Debug, Clone, Copy)]
pub struct ConstructorHandle<'a> {
    owner: &'a TypeDescriptor,
    ctor: &'a ConstructorDescriptor,
}

impl<'a> ConstructorHandle<'a> {
    pub(crate) fn new(owner: &'a TypeDescriptor, ctor: &'a ConstructorDescriptor) -> Self {
        Self { owner, ctor }
    }

    pub fn descriptor(&self) -> &'a ConstructorDescriptor {
        self.ctor
    }

    /// Allocate and initialize a new instance.
    ///
    /// Fields start at their declared defaults, then the constructor handler
    /// runs. A handler failure surfaces as `Construction`.
    pub fn construct(&self, args: &[Val]) -> Result<Instance, ReflectError> {
        check_args(self.owner, "new", &self.ctor.params, args)?;
        let mut instance = self.owner.allocate();
        (self.ctor.handler)(&mut instance, args).map_err(|message| {
            ReflectError::Construction {
                type_name: self.owner.name().to_string(),
                message,
            }
        })?;
        Ok(instance)
    }
}

/// A selected method, bound to its owner for gated invocation.
#[derive(Debug, Clone, Copy)]
pub struct MethodHandle<'a> {
    owner: &'a TypeDescriptor,
    method: &'a MethodDescriptor,
}

impl<'a> MethodHandle<'a> {
    pub(crate) fn new(owner: &'a TypeDescriptor, method: &'a MethodDescriptor) -> Self {
        Self { owner, method }
    }

    pub fn descriptor(&self) -> &'a MethodDescriptor {
        self.method
    }

    /// Call the method on `instance`.
    ///
    /// Non-public methods are denied under `Access::Checked`. Argument
    /// arity and types are checked in every access mode. Whatever side
    /// effects the handler body performs pass through untouched; a handler
    /// failure surfaces as `Invocation`.
    pub fn invoke(
        &self,
        instance: &mut Instance,
        args: &[Val],
        access: Access,
    ) -> Result<Val, ReflectError> {
        check_receiver_type(self.owner, &self.method.name, instance)?;
        check_member_access(
            self.owner.name(),
            &self.method.name,
            MemberKind::Method,
            self.method.visibility,
            access,
        )?;
        check_args(self.owner, &self.method.name, &self.method.params, args)?;
        (self.method.handler)(instance, args).map_err(|message| ReflectError::Invocation {
            type_name: self.owner.name().to_string(),
            member: self.method.name.clone(),
            message,
        })
    }
}

/// Exact arity + type agreement between a signature and an argument list.
fn check_args(
    owner: &TypeDescriptor,
    member: &str,
    params: &[TypeTag],
    args: &[Val],
) -> Result<(), ReflectError> {
    let matches = args.len() == params.len()
        && args
            .iter()
            .zip(params)
            .all(|(arg, param)| arg.tag() == Some(*param));
    if matches {
        Ok(())
    } else {
        Err(ReflectError::ArgumentMismatch {
            type_name: owner.name().to_string(),
            member: member.to_string(),
            expected: format_signature(params),
            got: format_arg_types(args),
        })
    }
}

/// The instance handed to a member operation must come from the same type.
fn check_receiver_type(
    owner: &TypeDescriptor,
    member: &str,
    instance: &Instance,
) -> Result<(), ReflectError> {
    if instance.type_name() == owner.name() {
        Ok(())
    } else {
        Err(ReflectError::ArgumentMismatch {
            type_name: owner.name().to_string(),
            member: member.to_string(),
            expected: owner.name().to_string(),
            got: instance.type_name().to_string(),
        })
    }
}
