//! Ollama Classifier - IntentClassifier backed by a local LLM.
//!
//! Sends the message to Ollama's `/api/chat` endpoint with a system prompt
//! asking for `{"intent": ..., "country": ...}` and parses the answer.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OllamaConfig::new("http://localhost:11434")
//!     .with_model("gemma:2b")
//!     .with_timeout(Duration::from_secs(5));
//!
//! let classifier = OllamaClassifier::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::conversation::IntentHint;
use crate::ports::{IntentClassifier, IntentError};

use super::is_trivial;

const SYSTEM_PROMPT: &str = "You are a backend API assistant. Your job is to extract exactly two lowercase fields from a user's message:\n\
- 'intent': one of 'visa', 'passport', or 'unknown'\n\
- 'country': full lowercase country name (like 'united kingdom'), or null if not mentioned\n\n\
IMPORTANT:\n\
- Only reply with a valid lowercase JSON object\n\
- No markdown, no code, no explanation\n\
- All keys and values must be in lowercase\n\
- Null should be written as: null (without quotes)\n\n\
Format:\n\
{\"intent\": \"visa\", \"country\": \"united kingdom\"}\n";

/// Configuration for the Ollama classifier.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL of the Ollama server.
    pub base_url: String,
    /// Model to use.
    pub model: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Optional bearer token for proxied deployments.
    api_key: Option<Secret<String>>,
}

impl OllamaConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            model: "gemma:2b".to_string(),
            timeout: Duration::from_secs(5),
            api_key: None,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_api_key(mut self, api_key: Secret<String>) -> Self {
        self.api_key = Some(api_key);
        self
    }
}

/// Ollama chat API classifier.
pub struct OllamaClassifier {
    config: OllamaConfig,
    client: Client,
}

impl OllamaClassifier {
    pub fn new(config: OllamaConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self { config, client }
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.config.base_url.trim_end_matches('/'))
    }

    fn to_request<'a>(&'a self, text: &'a str) -> OllamaRequest<'a> {
        OllamaRequest {
            model: &self.config.model,
            messages: vec![
                OllamaMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                OllamaMessage {
                    role: "user",
                    content: text,
                },
            ],
            stream: false,
        }
    }
}

#[async_trait]
impl IntentClassifier for OllamaClassifier {
    async fn classify(&self, text: &str) -> Result<IntentHint, IntentError> {
        if is_trivial(text) {
            return Ok(IntentHint::Unknown);
        }

        let mut request = self.client.post(self.chat_url()).json(&self.to_request(text));
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                IntentError::Timeout {
                    timeout_secs: self.config.timeout.as_secs(),
                }
            } else if e.is_connect() {
                IntentError::Network(format!("Connection failed: {}", e))
            } else {
                IntentError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IntentError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| IntentError::Network(e.to_string()))?;

        // The content field normally carries the answer; fall back to the body.
        let content = serde_json::from_str::<OllamaResponse>(&body)
            .ok()
            .and_then(|r| r.message)
            .map(|m| m.content)
            .unwrap_or(body);

        parse_hint(&content)
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}

/// Parses the model's answer into a hint.
///
/// Tolerates a surrounding markdown fence and a leading `json`/`python`
/// language tag. Empty output is an unknown intent; anything else that is
/// not a JSON object is an error.
pub fn parse_hint(raw: &str) -> Result<IntentHint, IntentError> {
    let mut content = raw.trim();
    if content.starts_with("```") {
        content = content.trim_matches('`').trim();
        for tag in ["json", "python"] {
            if let Some(rest) = content.strip_prefix(tag) {
                content = rest.trim();
            }
        }
    }

    if content.is_empty() {
        return Ok(IntentHint::Unknown);
    }

    let answer: RawAnswer = serde_json::from_str(content)
        .map_err(|e| IntentError::MalformedResponse(e.to_string()))?;

    let country = answer
        .country
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty());

    let intent = answer
        .intent
        .map(|i| i.trim().to_lowercase())
        .unwrap_or_default();

    Ok(match intent.as_str() {
        "visa" => IntentHint::Visa { country },
        "passport" => IntentHint::Passport,
        _ => IntentHint::Unknown,
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Ollama API Types
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct OllamaMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: Option<OllamaResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct OllamaResponseMessage {
    #[serde(default)]
    content: String,
}

/// The model's JSON answer. Non-string values are treated as absent.
#[derive(Debug, Deserialize)]
struct RawAnswer {
    #[serde(default, deserialize_with = "lenient_string")]
    intent: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    country: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}
