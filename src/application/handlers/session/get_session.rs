//! GetSessionHandler - Query handler for retrieving session details.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::domain::conversation::{ConversationState, DocumentType, Session};
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// Query to get a session by ID.
#[derive(Debug, Clone)]
pub struct GetSessionQuery {
    pub session_id: SessionId,
}

/// Read model of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub document_type: DocumentType,
    pub state: ConversationState,
    pub pending_correction: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id(),
            document_type: session.document_type(),
            state: session.state(),
            pending_correction: session.pending_correction().map(str::to_string),
            created_at: session.created_at().to_rfc3339(),
            updated_at: session.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Error)]
pub enum GetSessionError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Session storage error: {0}")]
    Storage(String),
}

impl From<SessionStoreError> for GetSessionError {
    fn from(err: SessionStoreError) -> Self {
        match err {
            SessionStoreError::NotFound(id) => GetSessionError::NotFound(id),
            other => GetSessionError::Storage(other.to_string()),
        }
    }
}

/// Handler for retrieving session details.
pub struct GetSessionHandler {
    sessions: Arc<dyn SessionStore>,
}

impl GetSessionHandler {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    pub async fn handle(&self, query: GetSessionQuery) -> Result<SessionView, GetSessionError> {
        let session = self.sessions.get(query.session_id).await?;
        Ok(SessionView::from(&session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;

    #[tokio::test]
    async fn returns_view_of_stored_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let (mut session, _) = store.get_or_create(None).await.unwrap();
        session.propose_correction("germany");
        store.update(&session).await.unwrap();
        let handler = GetSessionHandler::new(store);

        let view = handler
            .handle(GetSessionQuery {
                session_id: session.id(),
            })
            .await
            .unwrap();

        assert_eq!(view.document_type, DocumentType::Visa);
        assert_eq!(view.state, ConversationState::AwaitingConfirmation);
        assert_eq!(view.pending_correction.as_deref(), Some("germany"));
    }

    #[tokio::test]
    async fn missing_session_is_not_found() {
        let handler = GetSessionHandler::new(Arc::new(InMemorySessionStore::new()));

        let result = handler
            .handle(GetSessionQuery {
                session_id: SessionId::new(),
            })
            .await;

        assert!(matches!(result, Err(GetSessionError::NotFound(_))));
    }
}
