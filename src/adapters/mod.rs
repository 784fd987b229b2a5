//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum REST API
//! - `intent` - intent classifiers (Ollama, rules, disabled, mock)
//! - `registry` - CSV country tables
//! - `storage` - session store

pub mod http;
pub mod intent;
pub mod registry;
pub mod storage;

pub use intent::{DisabledClassifier, MockClassifier, OllamaClassifier, RuleBasedClassifier};
pub use registry::CsvRegistrySource;
pub use storage::InMemorySessionStore;
