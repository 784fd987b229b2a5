//! HTTP handlers for registry endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::application::ReloadRegistryHandler;

#[derive(Clone)]
pub struct RegistryHandlers {
    reload_handler: Arc<ReloadRegistryHandler>,
}

impl RegistryHandlers {
    pub fn new(reload_handler: Arc<ReloadRegistryHandler>) -> Self {
        Self { reload_handler }
    }
}

/// GET /api/registry - Counts for the registry in effect
pub async fn registry_status(State(handlers): State<RegistryHandlers>) -> Response {
    (StatusCode::OK, Json(handlers.reload_handler.status())).into_response()
}

/// POST /api/registry/reload - Re-read the tables and swap the snapshot
pub async fn reload_registry(State(handlers): State<RegistryHandlers>) -> Response {
    match handlers.reload_handler.handle().await {
        Ok(status) => (StatusCode::OK, Json(status)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "registry reload failed");
            ErrorResponse::internal(e.to_string()).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
