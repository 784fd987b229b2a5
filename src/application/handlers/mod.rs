//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod conversation;
pub mod registry;
pub mod session;

pub use conversation::{HandleTurnCommand, HandleTurnError, HandleTurnHandler, HandleTurnResult};
pub use registry::{RegistryStatus, ReloadRegistryError, ReloadRegistryHandler};
pub use session::{GetSessionError, GetSessionHandler, GetSessionQuery, SessionView};
