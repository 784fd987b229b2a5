//! Session Store Port - Interface for per-conversation state.
//!
//! The conversation engine never reaches for a global session map; the
//! turn handler gets a store injected and reads then writes one session
//! per request.

use async_trait::async_trait;

use crate::domain::conversation::Session;
use crate::domain::foundation::SessionId;

/// Errors that can occur during session store operations
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    #[error("Session not found: {0}")]
    NotFound(SessionId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for looking up and saving sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the session for `id`, creating a fresh one when the id is
    /// absent or unknown.
    ///
    /// The boolean is true when a new session was created.
    async fn get_or_create(&self, id: Option<SessionId>)
        -> Result<(Session, bool), SessionStoreError>;

    /// Loads an existing session.
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session has this id
    async fn get(&self, id: SessionId) -> Result<Session, SessionStoreError>;

    /// Saves a session, replacing any stored version.
    async fn update(&self, session: &Session) -> Result<(), SessionStoreError>;

    /// Clears the document type and any pending correction.
    ///
    /// # Errors
    /// Returns `SessionStoreError::NotFound` if no session has this id
    async fn reset(&self, id: SessionId) -> Result<(), SessionStoreError>;

    /// Number of stored sessions.
    async fn len(&self) -> usize;
}
