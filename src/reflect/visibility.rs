//! Visibility checking for reflective member access.
//!
//! Public members are always reachable. Protected and private members are
//! reachable only under `Access::Bypass`, the explicit privileged-access
//! escape hatch. There is no caller-scope notion here: all reflective access
//! comes from outside the type, so anything non-public is denied by default.

use crate::core::value::Visibility;
use crate::reflect::error::{MemberKind, ReflectError};

/// How a reflective operation approaches member visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    /// Honor declared visibility: non-public members are denied.
    #[default]
    Checked,
    /// Explicitly bypass visibility and reach non-public members.
    Bypass,
}

impl Access {
    pub fn bypasses_visibility(&self) -> bool {
        matches!(self, Access::Bypass)
    }
}

/// Unified visibility gate for fields and methods.
pub(crate) fn check_member_access(
    type_name: &str,
    member: &str,
    kind: MemberKind,
    visibility: Visibility,
    access: Access,
) -> Result<(), ReflectError> {
    if visibility.is_public() || access.bypasses_visibility() {
        Ok(())
    } else {
        Err(ReflectError::AccessDenied {
            type_name: type_name.to_string(),
            kind,
            member: member.to_string(),
            visibility,
        })
    }
}
