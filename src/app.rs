//! Composition root: wires config, adapters and handlers together.

use std::sync::Arc;

use axum::Router;

use crate::adapters::http::{
    app_router, ChatHandlers, RegistryHandlers, RouterOptions, SessionHandlers,
};
use crate::adapters::intent::{
    DisabledClassifier, OllamaClassifier, OllamaConfig, RuleBasedClassifier,
};
use crate::adapters::registry::CsvRegistrySource;
use crate::adapters::storage::InMemorySessionStore;
use crate::application::{GetSessionHandler, HandleTurnHandler, ReloadRegistryHandler};
use crate::config::{AppConfig, IntentConfig, IntentProvider};
use crate::domain::conversation::{ConversationEngine, ReplyCatalog};
use crate::domain::country::{RegistryHandle, SupportGate};
use crate::ports::{IntentClassifier, RegistrySource, RegistrySourceError, SessionStore};

/// Every long-lived service the HTTP layer needs.
#[derive(Clone)]
pub struct AppServices {
    pub registry: RegistryHandle,
    pub sessions: Arc<dyn SessionStore>,
    pub turn_handler: Arc<HandleTurnHandler>,
    pub session_handler: Arc<GetSessionHandler>,
    pub reload_handler: Arc<ReloadRegistryHandler>,
}

impl AppServices {
    /// Builds the services from config, loading the registry once.
    ///
    /// # Errors
    /// Returns `RegistrySourceError` if a registry table exists but cannot be read
    pub async fn from_config(config: &AppConfig) -> Result<Self, RegistrySourceError> {
        let source: Arc<dyn RegistrySource> = Arc::new(CsvRegistrySource::new(
            &config.registry.links_path,
            &config.registry.aliases_path,
        ));
        Self::assemble(config, source, build_classifier(&config.intent)).await
    }

    /// Builds the services with explicit source and classifier.
    pub async fn assemble(
        config: &AppConfig,
        source: Arc<dyn RegistrySource>,
        classifier: Arc<dyn IntentClassifier>,
    ) -> Result<Self, RegistrySourceError> {
        let registry = RegistryHandle::new(source.load().await?);
        let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let engine = Arc::new(ConversationEngine::new(
            ReplyCatalog::new(&config.support.phone, &config.support.email),
            SupportGate::default(),
        ));

        tracing::info!(
            classifier = classifier.name(),
            registry = %source.describe(),
            "services assembled"
        );

        Ok(Self {
            turn_handler: Arc::new(HandleTurnHandler::new(
                sessions.clone(),
                classifier,
                registry.clone(),
                engine,
                config.intent.timeout(),
            )),
            session_handler: Arc::new(GetSessionHandler::new(sessions.clone())),
            reload_handler: Arc::new(ReloadRegistryHandler::new(source, registry.clone())),
            registry,
            sessions,
        })
    }

    /// The full HTTP router over these services.
    pub fn router(&self, config: &AppConfig) -> Router {
        app_router(
            ChatHandlers::new(self.turn_handler.clone()),
            SessionHandlers::new(self.session_handler.clone()),
            RegistryHandlers::new(self.reload_handler.clone()),
            RouterOptions {
                request_timeout: config.server.request_timeout(),
                cors_origins: config.server.allowed_origins(),
            },
        )
    }
}

/// Picks the intent classifier named by config.
pub fn build_classifier(config: &IntentConfig) -> Arc<dyn IntentClassifier> {
    match config.provider {
        IntentProvider::Ollama => {
            let mut ollama = OllamaConfig::new(&config.base_url)
                .with_model(&config.model)
                .with_timeout(config.timeout());
            if let Some(key) = &config.api_key {
                ollama = ollama.with_api_key(key.clone());
            }
            Arc::new(OllamaClassifier::new(ollama))
        }
        IntentProvider::Rules => Arc::new(RuleBasedClassifier::new()),
        IntentProvider::Disabled => Arc::new(DisabledClassifier),
    }
}
