//! Shared, swappable registry snapshot.

use std::sync::{Arc, RwLock};

use super::CountryRegistry;

/// Cloneable handle to the current [`CountryRegistry`].
///
/// Readers take an `Arc` snapshot and keep using it for the whole turn;
/// [`RegistryHandle::replace`] swaps in a complete new registry, so no
/// reader ever sees a half-loaded one.
#[derive(Debug, Clone)]
pub struct RegistryHandle {
    current: Arc<RwLock<Arc<CountryRegistry>>>,
}

impl RegistryHandle {
    pub fn new(registry: CountryRegistry) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(registry))),
        }
    }

    /// The registry in effect right now.
    pub fn snapshot(&self) -> Arc<CountryRegistry> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Swaps the whole registry, returning the previous snapshot.
    pub fn replace(&self, registry: CountryRegistry) -> Arc<CountryRegistry> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, Arc::new(registry))
    }
}

impl Default for RegistryHandle {
    fn default() -> Self {
        Self::new(CountryRegistry::empty())
    }
}
