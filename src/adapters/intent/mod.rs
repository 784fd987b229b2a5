//! Intent classifier adapters.
//!
//! - `OllamaClassifier` - local LLM over the Ollama chat API
//! - `RuleBasedClassifier` - keyword rules, no network
//! - `DisabledClassifier` - always fails, so every hint degrades to unknown
//! - `MockClassifier` - scripted answers for tests

mod disabled_classifier;
mod mock_classifier;
mod ollama_classifier;
mod rule_based_classifier;

pub use disabled_classifier::DisabledClassifier;
pub use mock_classifier::MockClassifier;
pub use ollama_classifier::{parse_hint, OllamaClassifier, OllamaConfig};
pub use rule_based_classifier::RuleBasedClassifier;

/// Messages that never need classifying.
pub(crate) const GREETINGS: &[&str] = &["hi", "hello", "hey", "hii", "hie", "yo", "greetings"];

/// True for empty input and bare greetings.
pub(crate) fn is_trivial(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    text.is_empty() || GREETINGS.contains(&text.as_str())
}
