//! Country registry table locations

use serde::Deserialize;

use super::error::ValidationError;

/// Where the country link and alias tables live
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// CSV with headers `country,visa_link`
    #[serde(default = "default_links_path")]
    pub links_path: String,

    /// CSV with headers `alias,country`
    #[serde(default = "default_aliases_path")]
    pub aliases_path: String,
}

impl RegistryConfig {
    /// Validate registry configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.links_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("VPA__REGISTRY__LINKS_PATH"));
        }
        if self.aliases_path.trim().is_empty() {
            return Err(ValidationError::MissingRequired("VPA__REGISTRY__ALIASES_PATH"));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            links_path: default_links_path(),
            aliases_path: default_aliases_path(),
        }
    }
}

fn default_links_path() -> String {
    "data/country_links.csv".to_string()
}

fn default_aliases_path() -> String {
    "data/country_aliases.csv".to_string()
}
