//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Session lookup, creation and persistence
//! - `IntentClassifier` - Untrusted intent hints for free-text messages
//! - `RegistrySource` - Loading of the country link and alias tables

mod intent_classifier;
mod registry_source;
mod session_store;

pub use intent_classifier::{IntentClassifier, IntentError};
pub use registry_source::{RegistrySource, RegistrySourceError};
pub use session_store::{SessionStore, SessionStoreError};
