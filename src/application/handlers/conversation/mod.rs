//! Conversation command handlers.
//!
//! Handles one chat turn: session lookup, engine rules, the intent hint
//! call and persistence.

mod handle_turn;

pub use handle_turn::{HandleTurnCommand, HandleTurnError, HandleTurnHandler, HandleTurnResult};
