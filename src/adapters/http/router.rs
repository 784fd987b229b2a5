//! Application router: every endpoint plus the middleware stack.

use std::time::Duration;

use axum::{routing::get, Router};
use http::HeaderValue;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::{
    chat_routes, health, registry_routes, session_routes, ChatHandlers, RegistryHandlers,
    SessionHandlers,
};

/// Middleware settings for [`app_router`].
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub request_timeout: Duration,
    /// Allowed CORS origins; empty allows any origin.
    pub cors_origins: Vec<String>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: Vec::new(),
        }
    }
}

/// Builds the full HTTP API.
///
/// - `POST /chat`
/// - `GET /api/sessions/:id`
/// - `GET /api/registry`, `POST /api/registry/reload`
/// - `GET /health`
pub fn app_router(
    chat: ChatHandlers,
    sessions: SessionHandlers,
    registry: RegistryHandlers,
    options: RouterOptions,
) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(chat_routes(chat))
        .nest("/api/sessions", session_routes(sessions))
        .nest("/api/registry", registry_routes(registry))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&options.cors_origins))
                .layer(TimeoutLayer::new(options.request_timeout)),
        )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(allowed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::intent::MockClassifier;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::{GetSessionHandler, HandleTurnHandler, ReloadRegistryHandler};
    use crate::domain::conversation::{ConversationEngine, IntentHint};
    use crate::domain::country::{CountryRegistry, RegistryHandle};
    use crate::ports::{RegistrySource, RegistrySourceError};
    use async_trait::async_trait;

    struct StaticSource;

    #[async_trait]
    impl RegistrySource for StaticSource {
        async fn load(&self) -> Result<CountryRegistry, RegistrySourceError> {
            Ok(CountryRegistry::new(
                [
                    ("japan", "https://visas.example.com/japan"),
                    ("india", "https://visas.example.com/india"),
                ],
                [("nippon", "japan")],
            ))
        }

        fn describe(&self) -> String {
            "static".to_string()
        }
    }

    fn app(classifier: MockClassifier) -> Router {
        let store = Arc::new(InMemorySessionStore::new());
        let registry = RegistryHandle::new(CountryRegistry::new(
            [("japan", "https://visas.example.com/japan")],
            std::iter::empty::<(&str, &str)>(),
        ));
        let turn = HandleTurnHandler::new(
            store.clone(),
            Arc::new(classifier),
            registry.clone(),
            Arc::new(ConversationEngine::default()),
            Duration::from_secs(1),
        );
        app_router(
            ChatHandlers::new(Arc::new(turn)),
            SessionHandlers::new(Arc::new(GetSessionHandler::new(store))),
            RegistryHandlers::new(Arc::new(ReloadRegistryHandler::new(
                Arc::new(StaticSource),
                registry,
            ))),
            RouterOptions::default(),
        )
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = app(MockClassifier::always(IntentHint::Unknown));
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn chat_returns_session_id_and_reply() {
        let app = app(MockClassifier::always(IntentHint::Unknown));

        let (status, body) = send(
            &app,
            Method::POST,
            "/chat",
            Some(json!({ "message": "visa for japan" })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["session_id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(body["message"]
            .as_str()
            .is_some_and(|m| m.contains("https://visas.example.com/japan")));
    }

    #[tokio::test]
    async fn session_endpoint_shows_pending_correction() {
        let app = app(MockClassifier::always(IntentHint::visa("japn")));

        let (_, body) = send(&app, Method::POST, "/chat", Some(json!({ "message": "japn" }))).await;
        assert!(body["message"].as_str().is_some_and(|m| m.contains("**Japan**")));
        let session_id = body["session_id"].as_str().unwrap().to_string();

        let (status, view) = send(&app, Method::GET, &format!("/api/sessions/{}", session_id), None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(view["state"], "awaiting_confirmation");
        assert_eq!(view["document_type"], "visa");
        assert_eq!(view["pending_correction"], "japan");
    }

    #[tokio::test]
    async fn unknown_session_is_404_and_garbage_id_is_400() {
        let app = app(MockClassifier::always(IntentHint::Unknown));

        let (status, body) = send(
            &app,
            Method::GET,
            "/api/sessions/00000000-0000-4000-8000-000000000000",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "SESSION_NOT_FOUND");

        let (status, _) = send(&app, Method::GET, "/api/sessions/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn registry_reload_swaps_tables() {
        let app = app(MockClassifier::always(IntentHint::Unknown));

        let (_, before) = send(&app, Method::GET, "/api/registry", None).await;
        assert_eq!(before["countries"], 1);

        let (status, after) = send(&app, Method::POST, "/api/registry/reload", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(after["countries"], 2);
        assert_eq!(after["aliases"], 1);

        let (_, body) = send(&app, Method::POST, "/chat", Some(json!({ "message": "visa for india" }))).await;
        assert!(body["message"].as_str().is_some_and(|m| m.contains("/india")));
    }

    #[test]
    fn invalid_cors_origins_are_skipped() {
        // Must not panic on a header value with a newline.
        let _ = cors_layer(&["http://localhost:5173".to_string(), "bad\norigin".to_string()]);
    }
}
