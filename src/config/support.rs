//! Customer support contact details

use serde::Deserialize;

/// Contact details appended to successful replies
#[derive(Debug, Clone, Deserialize)]
pub struct SupportConfig {
    #[serde(default = "default_phone")]
    pub phone: String,

    #[serde(default = "default_email")]
    pub email: String,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            phone: default_phone(),
            email: default_email(),
        }
    }
}

fn default_phone() -> String {
    "1-866-376-1125".to_string()
}

fn default_email() -> String {
    "info@etsonweb.com".to_string()
}
