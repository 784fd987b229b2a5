//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, state machine trait)
//! - `country` - Registry snapshot, phrase normalisation, matching and the support gate
//! - `conversation` - Session entity and the per-turn conversation engine

pub mod conversation;
pub mod country;
pub mod foundation;
