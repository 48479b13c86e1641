use std::fmt;
use std::sync::Arc;

/// Declared-type vocabulary used in member signatures.
///
/// Constructor and method parameter lists, field declarations and return
/// shapes are all expressed in these tags. Member selection is exact
/// tag-for-tag matching; there is no coercion and no overload ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Bool,
    Int,
    Float,
    Str,
}

impl TypeTag {
    pub fn name(&self) -> &'static str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Str => "string",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Member visibility. `Public` members are reachable through the normal
/// reflective paths; `Protected` and `Private` members require an explicit
/// visibility bypass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Dynamically typed value passed across the reflective call boundary.
///
/// Strings are shared via `Arc` so values stored in process-wide descriptor
/// defaults stay cheap to clone and safe to hand between threads.
#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
}

impl Val {
    /// Convenience constructor for string values.
    pub fn str(s: impl Into<Arc<str>>) -> Val {
        Val::Str(s.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Null => "null",
            Val::Bool(_) => "bool",
            Val::Int(_) => "int",
            Val::Float(_) => "float",
            Val::Str(_) => "string",
        }
    }

    /// The declared-type tag this value satisfies. `Null` satisfies none:
    /// there are no nullable declarations in the signature vocabulary.
    pub fn tag(&self) -> Option<TypeTag> {
        match self {
            Val::Null => None,
            Val::Bool(_) => Some(TypeTag::Bool),
            Val::Int(_) => Some(TypeTag::Int),
            Val::Float(_) => Some(TypeTag::Float),
            Val::Str(_) => Some(TypeTag::Str),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Val::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Val::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Val::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Val::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Self {
        Val::Bool(b)
    }
}

impl From<i64> for Val {
    fn from(i: i64) -> Self {
        Val::Int(i)
    }
}

impl From<f64> for Val {
    fn from(f: f64) -> Self {
        Val::Float(f)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Self {
        Val::Str(Arc::from(s))
    }
}

impl From<String> for Val {
    fn from(s: String) -> Self {
        Val::Str(Arc::from(s))
    }
}
