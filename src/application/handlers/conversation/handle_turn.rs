//! HandleTurn command handler.
//!
//! The single place where the intent classifier is called. The call is
//! wrapped in a timeout and every failure becomes [`IntentHint::Unknown`],
//! so the conversation keeps working with the classifier absent.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::Instrument;

use crate::domain::conversation::{ConversationEngine, ConversationState, IntentHint, TurnStep};
use crate::domain::country::{RegistryHandle, ResolutionResult};
use crate::domain::foundation::SessionId;
use crate::ports::{IntentClassifier, SessionStore, SessionStoreError};

/// Command carrying one user message.
#[derive(Debug, Clone)]
pub struct HandleTurnCommand {
    /// Session id as sent by the caller; absent, blank or unknown ids
    /// start a new session.
    pub session_id: Option<String>,
    pub message: String,
}

impl HandleTurnCommand {
    pub fn new(session_id: Option<String>, message: impl Into<String>) -> Self {
        Self {
            session_id,
            message: message.into(),
        }
    }

    /// True when the caller sent no usable session id text.
    fn opened_without_id(&self) -> bool {
        self.session_id
            .as_deref()
            .map_or(true, |id| id.trim().is_empty())
    }
}

/// Result of one turn.
#[derive(Debug, Clone)]
pub struct HandleTurnResult {
    /// Id the caller must send on the next turn.
    pub session_id: SessionId,
    pub reply: String,
    pub state: ConversationState,
    pub resolution: Option<ResolutionResult>,
    /// A new session was created for this turn.
    pub session_created: bool,
}

/// Errors that can occur while handling a turn.
#[derive(Debug, Error)]
pub enum HandleTurnError {
    #[error("Session storage error: {0}")]
    Storage(#[from] SessionStoreError),
}

/// Handler for chat turns.
pub struct HandleTurnHandler {
    sessions: Arc<dyn SessionStore>,
    classifier: Arc<dyn IntentClassifier>,
    registry: RegistryHandle,
    engine: Arc<ConversationEngine>,
    hint_timeout: Duration,
}

impl HandleTurnHandler {
    pub fn new(
        sessions: Arc<dyn SessionStore>,
        classifier: Arc<dyn IntentClassifier>,
        registry: RegistryHandle,
        engine: Arc<ConversationEngine>,
        hint_timeout: Duration,
    ) -> Self {
        Self {
            sessions,
            classifier,
            registry,
            engine,
            hint_timeout,
        }
    }

    pub async fn handle(&self, cmd: HandleTurnCommand) -> Result<HandleTurnResult, HandleTurnError> {
        let requested = SessionId::parse_optional(cmd.session_id.as_deref());
        let (mut session, session_created) = self.sessions.get_or_create(requested).await?;
        let span = tracing::info_span!("turn", session_id = %session.id());

        async {
            if session_created {
                let active_sessions = self.sessions.len().await;
                tracing::debug!(active_sessions, "session opened");
            }
            let registry = self.registry.snapshot();
            let outcome = match self.engine.begin(
                &mut session,
                &cmd.message,
                &registry,
                cmd.opened_without_id(),
            ) {
                TurnStep::Decided(outcome) => outcome,
                TurnStep::NeedsHint(request) => {
                    let hint = self.hint_for(&cmd.message).await;
                    self.engine
                        .finish(request, &mut session, &cmd.message, hint, &registry)
                }
            };

            self.sessions.update(&session).await?;
            tracing::info!(state = ?outcome.state, created = session_created, "turn handled");

            Ok::<_, HandleTurnError>(HandleTurnResult {
                session_id: session.id(),
                reply: outcome.reply,
                state: outcome.state,
                resolution: outcome.resolution,
                session_created,
            })
        }
        .instrument(span)
        .await
    }

    /// Asks the classifier, degrading every failure to `Unknown`.
    async fn hint_for(&self, message: &str) -> IntentHint {
        let classifier = self.classifier.name();
        match tokio::time::timeout(self.hint_timeout, self.classifier.classify(message)).await {
            Ok(Ok(hint)) => {
                tracing::debug!(classifier, intent = hint.kind(), "intent hint received");
                hint
            }
            Ok(Err(err)) => {
                tracing::warn!(
                    classifier,
                    error = %err,
                    transient = err.is_transient(),
                    "intent classifier failed, treating as unknown"
                );
                IntentHint::Unknown
            }
            Err(_) => {
                tracing::warn!(
                    classifier,
                    timeout_ms = self.hint_timeout.as_millis() as u64,
                    "intent classifier timed out, treating as unknown"
                );
                IntentHint::Unknown
            }
        }
    }
}
