//! HTTP routes for registry endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{registry_status, reload_registry, RegistryHandlers};

/// Creates the registry router, mounted under `/api/registry`.
pub fn registry_routes(handlers: RegistryHandlers) -> Router {
    Router::new()
        .route("/", get(registry_status))
        .route("/reload", post(reload_registry))
        .with_state(handlers)
}
