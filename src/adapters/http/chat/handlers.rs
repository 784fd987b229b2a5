//! HTTP handlers for the chat endpoint.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::application::{HandleTurnCommand, HandleTurnError, HandleTurnHandler};

use super::dto::{ChatRequest, ChatResponse};

#[derive(Clone)]
pub struct ChatHandlers {
    turn_handler: Arc<HandleTurnHandler>,
}

impl ChatHandlers {
    pub fn new(turn_handler: Arc<HandleTurnHandler>) -> Self {
        Self { turn_handler }
    }
}

/// POST /chat - Handle one user message
pub async fn chat(State(handlers): State<ChatHandlers>, Json(req): Json<ChatRequest>) -> Response {
    let cmd = HandleTurnCommand::new(req.session_id, req.message);

    match handlers.turn_handler.handle(cmd).await {
        Ok(result) => (StatusCode::OK, Json(ChatResponse::from(result))).into_response(),
        Err(e) => handle_turn_error(e),
    }
}

fn handle_turn_error(error: HandleTurnError) -> Response {
    tracing::error!(error = %error, "chat turn failed");
    match error {
        HandleTurnError::Storage(e) => {
            ErrorResponse::storage(e.to_string()).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
