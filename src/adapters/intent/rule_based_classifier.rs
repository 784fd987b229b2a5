//! Rule-Based Classifier - keyword intent detection without a model.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::conversation::IntentHint;
use crate::ports::{IntentClassifier, IntentError};

use super::is_trivial;

static VISA_COUNTRY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"visa\s+(?:for|to|in)\s+(.+)$").expect("valid regex"));

/// Classifies by keyword: "passport" wins, then "visa" with an optional
/// "for/to/in <country>" tail.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedClassifier;

impl RuleBasedClassifier {
    pub fn new() -> Self {
        Self
    }

    fn hint_for(text: &str) -> IntentHint {
        let text = text.trim().to_lowercase();
        if text.contains("passport") {
            return IntentHint::Passport;
        }
        if !text.contains("visa") {
            return IntentHint::Unknown;
        }
        let country = VISA_COUNTRY
            .captures(&text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().trim_end_matches(['?', '.', '!']).trim().to_string())
            .filter(|c| !c.is_empty());
        IntentHint::Visa { country }
    }
}

#[async_trait]
impl IntentClassifier for RuleBasedClassifier {
    async fn classify(&self, text: &str) -> Result<IntentHint, IntentError> {
        if is_trivial(text) {
            return Ok(IntentHint::Unknown);
        }
        Ok(Self::hint_for(text))
    }

    fn name(&self) -> &'static str {
        "rules"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn visa_with_country_tail() {
        let hint = RuleBasedClassifier::new()
            .classify("I need a Visa for Jermany?")
            .await
            .unwrap();
        assert_eq!(hint, IntentHint::visa("jermany"));
    }

    #[tokio::test]
    async fn visa_without_country() {
        let hint = RuleBasedClassifier::new()
            .classify("where do I apply for a visa")
            .await
            .unwrap();
        assert_eq!(hint, IntentHint::visa_without_country());
    }

    #[tokio::test]
    async fn passport_beats_visa() {
        let hint = RuleBasedClassifier::new()
            .classify("visa and passport questions")
            .await
            .unwrap();
        assert_eq!(hint, IntentHint::Passport);
    }

    #[tokio::test]
    async fn anything_else_is_unknown() {
        let classifier = RuleBasedClassifier::new();
        assert_eq!(classifier.classify("germany").await.unwrap(), IntentHint::Unknown);
        assert_eq!(classifier.classify("hey").await.unwrap(), IntentHint::Unknown);
    }
}
