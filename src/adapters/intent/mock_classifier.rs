//! Mock Classifier - scripted intent hints for tests.
//!
//! Answers are consumed in order; once the script runs out the default
//! answer is repeated. A configurable delay makes timeouts testable.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::conversation::IntentHint;
use crate::ports::{IntentClassifier, IntentError};

#[derive(Debug, Clone)]
pub struct MockClassifier {
    script: Arc<Mutex<VecDeque<Result<IntentHint, IntentError>>>>,
    default: Result<IntentHint, IntentError>,
    delay: Option<Duration>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockClassifier {
    /// A classifier that always answers `hint`.
    pub fn always(hint: IntentHint) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
            default: Ok(hint),
            delay: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A classifier that always fails with `error`.
    pub fn failing(error: IntentError) -> Self {
        Self {
            default: Err(error),
            ..Self::always(IntentHint::Unknown)
        }
    }

    /// Queue one answer ahead of the default.
    pub fn then(self, answer: Result<IntentHint, IntentError>) -> Self {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(answer);
        }
        self
    }

    /// Sleep before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Messages classified so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl IntentClassifier for MockClassifier {
    async fn classify(&self, text: &str) -> Result<IntentHint, IntentError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(text.to_string());
        }
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let scripted = self.script.lock().ok().and_then(|mut s| s.pop_front());
        scripted.unwrap_or_else(|| self.default.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
