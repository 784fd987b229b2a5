//! End-to-end conversation tests.
//!
//! These drive the real router, handlers, CSV registry and in-memory
//! session store through the public API:
//! 1. Alias resolution without confirmation
//! 2. Fuzzy correction, confirmation and the support gate
//! 3. Passport options
//! 4. Unserviced countries
//! 5. Degraded intent classification

use std::sync::Arc;
use std::time::Duration;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use vpa_assistant::adapters::intent::{MockClassifier, RuleBasedClassifier};
use vpa_assistant::adapters::registry::CsvRegistrySource;
use vpa_assistant::app::AppServices;
use vpa_assistant::config::AppConfig;
use vpa_assistant::domain::conversation::IntentHint;
use vpa_assistant::ports::{IntentClassifier, RegistrySource};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn data_source() -> Arc<dyn RegistrySource> {
    let root = env!("CARGO_MANIFEST_DIR");
    Arc::new(CsvRegistrySource::new(
        format!("{}/data/country_links.csv", root),
        format!("{}/data/country_aliases.csv", root),
    ))
}

async fn app_with(classifier: Arc<dyn IntentClassifier>, config: AppConfig) -> Router {
    let services = AppServices::assemble(&config, data_source(), classifier)
        .await
        .expect("services");
    services.router(&config)
}

async fn app() -> Router {
    app_with(Arc::new(RuleBasedClassifier::new()), AppConfig::default()).await
}

struct Chat {
    app: Router,
    session_id: Option<String>,
}

impl Chat {
    fn new(app: Router) -> Self {
        Self {
            app,
            session_id: None,
        }
    }

    async fn say(&mut self, message: &str) -> String {
        let body = json!({ "session_id": self.session_id, "message": message });
        let (status, value) = request(&self.app, Method::POST, "/chat", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        self.session_id = value["session_id"].as_str().map(str::to_string);
        value["message"].as_str().unwrap_or_default().to_string()
    }

    async fn view(&self) -> Value {
        let id = self.session_id.as_deref().expect("session id");
        let (status, value) =
            request(&self.app, Method::GET, &format!("/api/sessions/{}", id), None).await;
        assert_eq!(status, StatusCode::OK);
        value
    }
}

async fn request(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
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
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn alias_is_resolved_without_confirmation() {
    let mut chat = Chat::new(app().await);

    let reply = chat.say("i need visa for uk").await;

    assert!(reply.contains("United Kingdom"), "{}", reply);
    assert!(reply.contains("https://www.myvisapassport.com/uk-visa/"));
    assert!(reply.contains("1-866-376-1125"));
    assert_eq!(chat.view().await["document_type"], "none");
}

#[tokio::test]
async fn misspelling_is_confirmed_then_gated() {
    let mut chat = Chat::new(app().await);

    let reply = chat.say("I want a visa").await;
    assert_eq!(reply, "Which country are you applying for the visa to?");
    assert_eq!(chat.view().await["state"], "awaiting_country");

    let reply = chat.say("jermany").await;
    assert!(reply.starts_with("Did you mean **Germany**?"), "{}", reply);
    let view = chat.view().await;
    assert_eq!(view["state"], "awaiting_confirmation");
    assert_eq!(view["pending_correction"], "germany");

    let reply = chat.say("Yes").await;
    assert!(reply.contains("do not process visa services for Germany"), "{}", reply);
    assert_eq!(chat.view().await["state"], "awaiting_topic");
}

#[tokio::test]
async fn rejected_correction_takes_a_new_country() {
    let mut chat = Chat::new(app().await);
    chat.say("I want a visa").await;
    chat.say("jermany").await;

    let reply = chat.say("japan").await;

    assert!(reply.contains("https://www.myvisapassport.com/japan-visa/"), "{}", reply);
}

#[tokio::test]
async fn passport_gets_options_and_resets() {
    let mut chat = Chat::new(app().await);

    let reply = chat.say("passport").await;

    assert!(reply.contains("passport-related options"));
    assert!(reply.contains("https://www.myvisapassport.com/passport-renewal/"));
    assert_eq!(chat.view().await["document_type"], "none");
}

#[tokio::test]
async fn unserviced_country_gets_embassy_apology() {
    let mut chat = Chat::new(app().await);

    let reply = chat.say("visa for chad").await;

    assert!(reply.contains("Chad"));
    assert!(reply.contains("embassy or consulate"));
    assert_eq!(chat.view().await["state"], "awaiting_topic");
}

#[tokio::test]
async fn near_miss_country_is_gated_not_corrected() {
    let mut chat = Chat::new(app().await);
    chat.say("I want a visa").await;

    let reply = chat.say("austria").await;

    assert!(!reply.contains("Did you mean"), "{}", reply);
    assert!(reply.contains("do not process visa services for Austria"), "{}", reply);
    assert_eq!(chat.view().await["pending_correction"], Value::Null);
}

#[tokio::test]
async fn word_fragment_matches_country_literally() {
    let mut chat = Chat::new(app().await);

    let reply = chat.say("visa for a woman").await;

    assert!(reply.contains("Oman"), "{}", reply);
}

#[tokio::test]
async fn slow_classifier_falls_back_to_topic_question() {
    let mut config = AppConfig::default();
    config.intent.timeout_secs = 1;
    let classifier = MockClassifier::always(IntentHint::visa("japan"))
        .with_delay(Duration::from_millis(1500));
    let mut chat = Chat::new(app_with(Arc::new(classifier), config).await);

    let reply = chat.say("where do I apply for a visa").await;

    assert_eq!(
        reply,
        "Hello — are you looking for a visa or a passport? Please tell me which one."
    );
}

#[tokio::test]
async fn greeting_and_welcome() {
    let mut chat = Chat::new(app().await);

    assert!(chat.say("get started").await.starts_with("Hello! 👋"));
    assert!(chat.say("hi").await.starts_with("Hi there!"));
    assert!(chat.say("thanks").await.starts_with("You're welcome!"));
}

#[tokio::test]
async fn unknown_session_id_starts_a_new_session() {
    let app = app().await;
    let body = json!({ "session_id": "7d0c1d5e-0000-4000-8000-000000000000", "message": "hello" });

    let (status, value) = request(&app, Method::POST, "/chat", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_ne!(value["session_id"], "7d0c1d5e-0000-4000-8000-000000000000");
}

#[tokio::test]
async fn registry_status_reports_loaded_tables() {
    let app = app().await;

    let (status, value) = request(&app, Method::GET, "/api/registry", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["countries"], 15);
    assert_eq!(value["aliases"], 10);
}
