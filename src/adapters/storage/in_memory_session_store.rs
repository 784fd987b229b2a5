//! In-Memory Session Store Adapter
//!
//! Keeps every session in a process-local map. Sessions never expire.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::Session;
use crate::domain::foundation::SessionId;
use crate::ports::{SessionStore, SessionStoreError};

/// In-memory storage for sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(
        &self,
        id: Option<SessionId>,
    ) -> Result<(Session, bool), SessionStoreError> {
        if let Some(id) = id {
            if let Some(session) = self.sessions.read().await.get(&id) {
                return Ok((session.clone(), false));
            }
        }

        let session = Session::new(SessionId::new());
        self.sessions
            .write()
            .await
            .insert(session.id(), session.clone());
        tracing::debug!(session_id = %session.id(), "session created");
        Ok((session, true))
    }

    async fn get(&self, id: SessionId) -> Result<Session, SessionStoreError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionStoreError::NotFound(id))
    }

    async fn update(&self, session: &Session) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .insert(session.id(), session.clone());
        Ok(())
    }

    async fn reset(&self, id: SessionId) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or(SessionStoreError::NotFound(id))?;
        session.reset();
        Ok(())
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
