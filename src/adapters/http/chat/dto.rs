//! HTTP DTOs for the chat endpoint.
//!
//! The wire shape matches what existing front-ends send and expect:
//! `{session_id?, message}` in, `{session_id, message}` out.

use serde::{Deserialize, Serialize};

use crate::application::HandleTurnResult;

/// One user message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// The assistant's reply.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub message: String,
}

impl From<HandleTurnResult> for ChatResponse {
    fn from(result: HandleTurnResult) -> Self {
        Self {
            session_id: result.session_id.to_string(),
            message: result.reply,
        }
    }
}
