//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::application::{GetSessionError, GetSessionHandler, GetSessionQuery};
use crate::domain::foundation::SessionId;

#[derive(Clone)]
pub struct SessionHandlers {
    get_handler: Arc<GetSessionHandler>,
}

impl SessionHandlers {
    pub fn new(get_handler: Arc<GetSessionHandler>) -> Self {
        Self { get_handler }
    }
}

/// GET /api/sessions/:id - Get session details
pub async fn get_session(
    State(handlers): State<SessionHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    let session_id = match session_id.parse::<SessionId>() {
        Ok(id) => id,
        Err(_) => {
            return ErrorResponse::bad_request("Invalid session ID")
                .into_response_with(StatusCode::BAD_REQUEST)
        }
    };

    match handlers.get_handler.handle(GetSessionQuery { session_id }).await {
        Ok(view) => (StatusCode::OK, Json(view)).into_response(),
        Err(e) => handle_session_error(e),
    }
}

fn handle_session_error(error: GetSessionError) -> Response {
    match error {
        GetSessionError::NotFound(id) => {
            ErrorResponse::not_found("Session", &id.to_string()).into_response_with(StatusCode::NOT_FOUND)
        }
        GetSessionError::Storage(msg) => {
            ErrorResponse::storage(msg).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
