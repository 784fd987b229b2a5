//! Session entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, Timestamp};

use super::{ConversationState, DocumentType};

/// One ongoing conversation.
///
/// Holds the active document type and, between turns, the country proposed
/// by a correction that the user has not yet accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    document_type: DocumentType,
    pending_correction: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            document_type: DocumentType::Unset,
            pending_correction: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn pending_correction(&self) -> Option<&str> {
        self.pending_correction.as_deref()
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Flow state derived from the stored fields.
    pub fn state(&self) -> ConversationState {
        if self.pending_correction.is_some() {
            ConversationState::AwaitingConfirmation
        } else if self.document_type == DocumentType::Visa {
            ConversationState::AwaitingCountry
        } else {
            ConversationState::AwaitingTopic
        }
    }

    pub fn set_document_type(&mut self, document_type: DocumentType) {
        self.document_type = document_type;
        self.touch();
    }

    /// Records a corrected country the user must confirm.
    pub fn propose_correction(&mut self, country: impl Into<String>) {
        self.document_type = DocumentType::Visa;
        self.pending_correction = Some(country.into());
        self.touch();
    }

    /// Removes and returns the pending correction.
    pub fn take_pending_correction(&mut self) -> Option<String> {
        let pending = self.pending_correction.take();
        if pending.is_some() {
            self.touch();
        }
        pending
    }

    /// Back to no topic, nothing pending.
    pub fn reset(&mut self) {
        self.document_type = DocumentType::Unset;
        self.pending_correction = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
