//! Constructed objects.
//!
//! An `Instance` is the opaque handle returned by dynamic construction. It is
//! allocated with every registered field set to its default value, then handed
//! to the selected constructor handler for initialization.

use crate::core::value::Val;
use indexmap::IndexMap;
use std::sync::Arc;

/// A constructed object of a registered type.
///
/// Owned by the caller; carries no lifecycle beyond normal drop. Field order
/// follows registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    type_name: Arc<str>,
    properties: IndexMap<String, Val>,
}

impl Instance {
    pub(crate) fn new(type_name: Arc<str>, properties: IndexMap<String, Val>) -> Self {
        Self {
            type_name,
            properties,
        }
    }

    /// Name of the type this instance was constructed from.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Direct field read. This is the in-type access path used by handler
    /// bodies; the visibility-gated path goes through a field handle.
    pub fn get(&self, field: &str) -> Option<&Val> {
        self.properties.get(field)
    }

    /// Direct field write for handler bodies. Only fields declared at
    /// registration exist; returns `false` if `field` is not one of them.
    pub fn set(&mut self, field: &str, value: Val) -> bool {
        match self.properties.get_mut(field) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Iterate over fields in registration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Val)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}
