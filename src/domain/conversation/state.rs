//! Conversation state machine.
//!
//! Defines the flow states of a conversation and valid transitions.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The flow state of a conversation.
///
/// - `AwaitingTopic`: no document type chosen
/// - `AwaitingCountry`: visa chosen, no country resolved yet
/// - `AwaitingConfirmation`: a corrected country was proposed
/// - `Resolved`: a terminal reply was given this turn; the session is
///   immediately back to `AwaitingTopic`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversationState {
    #[default]
    AwaitingTopic,
    AwaitingCountry,
    AwaitingConfirmation,
    Resolved,
}

impl StateMachine for ConversationState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ConversationState::*;
        matches!(
            (self, target),
            // Greetings, topic questions and hint-driven flows
            (AwaitingTopic, AwaitingTopic)
                | (AwaitingTopic, AwaitingCountry)
                | (AwaitingTopic, AwaitingConfirmation)
                | (AwaitingTopic, Resolved)
                // Country phrases, with or without a correction
                | (AwaitingCountry, AwaitingCountry)
                | (AwaitingCountry, AwaitingConfirmation)
                | (AwaitingCountry, Resolved)
                // Anything but "yes" drops the proposal
                | (AwaitingConfirmation, AwaitingCountry)
                | (AwaitingConfirmation, AwaitingConfirmation)
                | (AwaitingConfirmation, Resolved)
                // Terminal turns reset
                | (Resolved, AwaitingTopic)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ConversationState::*;
        match self {
            AwaitingTopic => vec![AwaitingTopic, AwaitingCountry, AwaitingConfirmation, Resolved],
            AwaitingCountry => vec![AwaitingCountry, AwaitingConfirmation, Resolved],
            AwaitingConfirmation => vec![AwaitingCountry, AwaitingConfirmation, Resolved],
            Resolved => vec![AwaitingTopic],
        }
    }
}
