//! Classifier used when intent detection is switched off.

use async_trait::async_trait;

use crate::domain::conversation::IntentHint;
use crate::ports::{IntentClassifier, IntentError};

#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledClassifier;

#[async_trait]
impl IntentClassifier for DisabledClassifier {
    async fn classify(&self, _text: &str) -> Result<IntentHint, IntentError> {
        Err(IntentError::Disabled)
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}
