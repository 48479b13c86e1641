//! Error taxonomy for the reflective API.
//!
//! Every failure is terminal for the operation that raised it: nothing here
//! is retried internally, and callers are expected to propagate.

use crate::core::value::Visibility;

/// What kind of member an error refers to, for message formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Field,
    Constructor,
    Method,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Field => "field",
            MemberKind::Constructor => "constructor",
            MemberKind::Method => "method",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReflectError {
    /// No type with this name is registered.
    TypeNotFound { name: String },
    /// The type exists but has no member matching the requested name and
    /// signature. Selection is exact arity + type match, so a near miss on
    /// parameter types lands here too.
    MemberNotFound {
        type_name: String,
        kind: MemberKind,
        member: String,
    },
    /// Argument list disagrees with the selected member's signature.
    ArgumentMismatch {
        type_name: String,
        member: String,
        expected: String,
        got: String,
    },
    /// The constructor handler itself failed.
    Construction { type_name: String, message: String },
    /// A method handler body failed during invocation.
    Invocation {
        type_name: String,
        member: String,
        message: String,
    },
    /// Non-public member touched without the visibility bypass.
    AccessDenied {
        type_name: String,
        kind: MemberKind,
        member: String,
        visibility: Visibility,
    },
}

impl std::fmt::Display for ReflectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReflectError::TypeNotFound { name } => {
                write!(f, "Type '{}' not found", name)
            }
            ReflectError::MemberNotFound {
                type_name,
                kind,
                member,
            } => {
                write!(
                    f,
                    "No matching {} {}::{}",
                    kind.as_str(),
                    type_name,
                    member
                )
            }
            ReflectError::ArgumentMismatch {
                type_name,
                member,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Argument mismatch calling {}::{}: expected {}, got {}",
                    type_name, member, expected, got
                )
            }
            ReflectError::Construction { type_name, message } => {
                write!(f, "Construction of '{}' failed: {}", type_name, message)
            }
            ReflectError::Invocation {
                type_name,
                member,
                message,
            } => {
                write!(
                    f,
                    "Invocation of {}::{} failed: {}",
                    type_name, member, message
                )
            }
            ReflectError::AccessDenied {
                type_name,
                kind,
                member,
                visibility,
            } => {
                write!(
                    f,
                    "Cannot access {} {} {}::{}",
                    visibility.as_str(),
                    kind.as_str(),
                    type_name,
                    member
                )
            }
        }
    }
}

impl std::error::Error for ReflectError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_access_denied() {
        let err = ReflectError::AccessDenied {
            type_name: "demo.Person".to_string(),
            kind: MemberKind::Method,
            member: "greet".to_string(),
            visibility: Visibility::Private,
        };
        assert_eq!(
            err.to_string(),
            "Cannot access private method demo.Person::greet"
        );
    }

    #[test]
    fn test_display_type_not_found() {
        let err = ReflectError::TypeNotFound {
            name: "demo.Missing".to_string(),
        };
        assert_eq!(err.to_string(), "Type 'demo.Missing' not found");
    }
}
