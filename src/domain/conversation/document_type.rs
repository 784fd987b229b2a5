//! Conversation topic.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which document the user is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    #[default]
    #[serde(rename = "none")]
    Unset,
    Visa,
    Passport,
}

impl DocumentType {
    /// Word used in replies.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Unset => "document",
            DocumentType::Visa => "visa",
            DocumentType::Passport => "passport",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_unset_as_none() {
        assert_eq!(serde_json::to_string(&DocumentType::Unset).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&DocumentType::Visa).unwrap(), "\"visa\"");
    }

    #[test]
    fn default_is_unset() {
        assert_eq!(DocumentType::default(), DocumentType::Unset);
    }
}
