//! ReloadRegistry command handler.
//!
//! Re-reads the registry source and swaps the shared snapshot. Turns in
//! flight keep the snapshot they started with.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::domain::country::{CountryRegistry, RegistryHandle};
use crate::ports::{RegistrySource, RegistrySourceError};

/// Counts describing the registry in effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStatus {
    pub countries: usize,
    pub aliases: usize,
    pub source: String,
}

#[derive(Debug, Error)]
pub enum ReloadRegistryError {
    #[error("Registry source error: {0}")]
    Source(#[from] RegistrySourceError),
}

/// Handler for reloading and inspecting the registry.
pub struct ReloadRegistryHandler {
    source: Arc<dyn RegistrySource>,
    registry: RegistryHandle,
}

impl ReloadRegistryHandler {
    pub fn new(source: Arc<dyn RegistrySource>, registry: RegistryHandle) -> Self {
        Self { source, registry }
    }

    /// Loads a fresh snapshot and swaps it in. On error the current
    /// snapshot stays in place.
    pub async fn handle(&self) -> Result<RegistryStatus, ReloadRegistryError> {
        let fresh = self.source.load().await?;
        let status = self.status_of(&fresh);
        let previous = self.registry.replace(fresh);
        tracing::info!(
            countries = status.countries,
            aliases = status.aliases,
            previous_countries = previous.country_count(),
            "country registry reloaded"
        );
        Ok(status)
    }

    /// Counts for the snapshot currently in effect.
    pub fn status(&self) -> RegistryStatus {
        self.status_of(&self.registry.snapshot())
    }

    fn status_of(&self, registry: &CountryRegistry) -> RegistryStatus {
        RegistryStatus {
            countries: registry.country_count(),
            aliases: registry.alias_count(),
            source: self.source.describe(),
        }
    }
}
