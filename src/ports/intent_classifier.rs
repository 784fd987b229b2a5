//! Intent Classifier Port - Interface for intent hint sources.
//!
//! A classifier proposes an intent and a raw country phrase for a message.
//! Its answer is a hint: the conversation engine re-resolves any phrase
//! itself and every failure degrades to [`IntentHint::Unknown`] at the
//! call site.

use async_trait::async_trait;

use crate::domain::conversation::IntentHint;

/// Port for classifying a user message.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Classify one message.
    async fn classify(&self, text: &str) -> Result<IntentHint, IntentError>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Classifier failures. None of these reach the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntentError {
    /// Transport failure talking to the classifier.
    #[error("network error: {0}")]
    Network(String),

    /// The classifier did not answer in time.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Non-success HTTP status.
    #[error("classifier returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The answer was not the expected JSON object.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Classification is switched off.
    #[error("classifier disabled")]
    Disabled,
}

impl IntentError {
    /// Returns true if retrying later could succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            IntentError::Network(_) | IntentError::Timeout { .. } | IntentError::Status { .. }
        )
    }
}
