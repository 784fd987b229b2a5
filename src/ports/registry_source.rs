//! Registry Source Port - Interface for loading country tables.

use async_trait::async_trait;

use crate::domain::country::CountryRegistry;

/// Errors that can occur while loading the registry tables
#[derive(Debug, thiserror::Error)]
pub enum RegistrySourceError {
    #[error("IO error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

/// Port for building a fresh registry snapshot.
///
/// Missing tables and malformed rows are tolerated; an error means the
/// source could not be read at all.
#[async_trait]
pub trait RegistrySource: Send + Sync {
    async fn load(&self) -> Result<CountryRegistry, RegistrySourceError>;

    /// Human-readable location of the tables, for logs and status output.
    fn describe(&self) -> String;
}
