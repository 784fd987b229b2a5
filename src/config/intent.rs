//! Intent classifier configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Intent classifier configuration
#[derive(Debug, Clone, Deserialize)]
pub struct IntentConfig {
    /// Which classifier supplies intent hints
    #[serde(default)]
    pub provider: IntentProvider,

    /// Ollama server base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Hint timeout in seconds, enforced around every classify call
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Optional bearer token for proxied deployments
    pub api_key: Option<Secret<String>>,
}

/// Intent classifier type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IntentProvider {
    #[default]
    Ollama,
    Rules,
    Disabled,
}

impl IntentConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate intent configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidIntentTimeout);
        }
        if self.provider == IntentProvider::Ollama
            && !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://"))
        {
            return Err(ValidationError::InvalidIntentUrl(self.base_url.clone()));
        }
        Ok(())
    }
}

impl Default for IntentConfig {
    fn default() -> Self {
        Self {
            provider: IntentProvider::default(),
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            api_key: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "gemma:2b".to_string()
}

fn default_timeout() -> u64 {
    5
}
