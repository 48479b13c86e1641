//! The type registry and its process-wide singleton.
//!
//! A registry holds raw `TypeDef` registrations and a cache of resolved
//! descriptors. Resolution is lazy: the first `resolve` of a name freezes the
//! registered definition into an immutable `Arc<TypeDescriptor>`, which is
//! then cached for the registry's lifetime and never evicted. Re-registering
//! a name after resolution replaces the definition for types that have not
//! yet been resolved, but never mutates an already-cached descriptor.

use crate::reflect::error::ReflectError;
use crate::runtime::builder::{TypeDef, TypeProvider};
use crate::runtime::descriptor::TypeDescriptor;
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

lazy_static! {
    static ref GLOBAL_REGISTRY: RwLock<TypeRegistry> = RwLock::new(TypeRegistry::new());
}

/// Registry of type definitions and resolved descriptors.
pub struct TypeRegistry {
    defs: HashMap<String, TypeDef>,
    resolved: HashMap<String, Arc<TypeDescriptor>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            defs: HashMap::new(),
            resolved: HashMap::new(),
        }
    }

    /// Register a type definition under its name. Last registration wins for
    /// names that have not been resolved yet.
    pub fn register(&mut self, def: TypeDef) {
        self.defs.insert(def.name().to_string(), def);
    }

    /// Run a provider's registrations against this registry.
    pub fn register_provider<P: TypeProvider + ?Sized>(&mut self, provider: &P) {
        provider.register(self);
    }

    /// Whether a definition exists for this name.
    pub fn is_registered(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }

    /// Names of all registered types, in no particular order.
    pub fn type_names(&self) -> Vec<&str> {
        self.defs.keys().map(|s| s.as_str()).collect()
    }

    /// Already-resolved descriptor, if any. Never triggers a build.
    pub fn peek(&self, name: &str) -> Option<Arc<TypeDescriptor>> {
        self.resolved.get(name).cloned()
    }

    /// Look up or build the descriptor for `name`.
    pub fn resolve(&mut self, name: &str) -> Result<Arc<TypeDescriptor>, ReflectError> {
        if let Some(descriptor) = self.resolved.get(name) {
            return Ok(Arc::clone(descriptor));
        }
        let def = self
            .defs
            .get(name)
            .ok_or_else(|| ReflectError::TypeNotFound {
                name: name.to_string(),
            })?;
        let descriptor = Arc::new(def.build_descriptor());
        self.resolved
            .insert(name.to_string(), Arc::clone(&descriptor));
        Ok(descriptor)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Register a type definition in the process-wide registry.
pub fn register_global(def: TypeDef) {
    let mut registry = GLOBAL_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    registry.register(def);
}

/// Run a provider against the process-wide registry.
pub fn register_global_provider<P: TypeProvider + ?Sized>(provider: &P) {
    let mut registry = GLOBAL_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    registry.register_provider(provider);
}

/// Resolve a type name against the process-wide registry.
///
/// Read-mostly: the fast path takes the read lock and returns the cached
/// descriptor; only a first resolution takes the write lock.
pub fn resolve_global(name: &str) -> Result<Arc<TypeDescriptor>, ReflectError> {
    {
        let registry = GLOBAL_REGISTRY
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(descriptor) = registry.peek(name) {
            return Ok(descriptor);
        }
    }
    let mut registry = GLOBAL_REGISTRY
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    registry.resolve(name)
}
