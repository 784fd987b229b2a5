//! Conversation flow.
//!
//! Per-session state machine deciding the next system utterance:
//!
//! - [`Session`] - document type plus any correction awaiting confirmation
//! - [`ConversationState`] - derived flow state with its transition table
//! - [`IntentHint`] - untrusted classifier output
//! - [`ConversationEngine`] - rule evaluation, split around the hint call
//! - [`ReplyCatalog`] - user-facing wording

mod document_type;
mod engine;
mod intent;
mod replies;
mod session;
mod state;

pub use document_type::DocumentType;
pub use engine::{ConversationEngine, HintRequest, TurnOutcome, TurnStep};
pub use intent::IntentHint;
pub use replies::{title_case, ReplyCatalog};
pub use session::Session;
pub use state::ConversationState;
