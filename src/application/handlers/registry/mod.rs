//! Registry command and query handlers.

mod reload_registry;

pub use reload_registry::{RegistryStatus, ReloadRegistryError, ReloadRegistryHandler};
