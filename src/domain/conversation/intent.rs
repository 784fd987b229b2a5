//! Intent hints proposed by an external classifier.

use serde::{Deserialize, Serialize};

/// What a classifier thinks the user wants.
///
/// Treated as a hint only; the engine re-resolves any country phrase itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "lowercase")]
pub enum IntentHint {
    #[default]
    Unknown,
    Visa { country: Option<String> },
    Passport,
}

impl IntentHint {
    pub fn visa(country: impl Into<String>) -> Self {
        IntentHint::Visa {
            country: Some(country.into()),
        }
    }

    /// Visa intent with no usable country phrase.
    pub fn visa_without_country() -> Self {
        IntentHint::Visa { country: None }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            IntentHint::Unknown => "unknown",
            IntentHint::Visa { .. } => "visa",
            IntentHint::Passport => "passport",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_tagged_object() {
        let json = serde_json::to_value(IntentHint::visa("germany")).unwrap();
        assert_eq!(json, serde_json::json!({"intent": "visa", "country": "germany"}));

        let json = serde_json::to_value(IntentHint::Unknown).unwrap();
        assert_eq!(json, serde_json::json!({"intent": "unknown"}));
    }

    #[test]
    fn kind_labels() {
        assert_eq!(IntentHint::Passport.kind(), "passport");
        assert_eq!(IntentHint::visa_without_country().kind(), "visa");
    }
}
