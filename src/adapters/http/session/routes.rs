//! HTTP routes for session endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_session, SessionHandlers};

/// Creates the session router, mounted under `/api/sessions`.
pub fn session_routes(handlers: SessionHandlers) -> Router {
    Router::new()
        .route("/:id", get(get_session))
        .with_state(handlers)
}
