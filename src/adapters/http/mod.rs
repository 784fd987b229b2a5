//! HTTP adapters - REST API implementations.
//!
//! Each concern has its own HTTP adapter for endpoint exposure;
//! [`app_router`] composes them with the tower-http middleware stack.

pub mod chat;
pub mod registry;
pub mod session;

mod error;
mod health;
mod router;

// Re-export key types for convenience
pub use chat::{chat_routes, ChatHandlers};
pub use error::ErrorResponse;
pub use health::health;
pub use registry::{registry_routes, RegistryHandlers};
pub use router::{app_router, RouterOptions};
pub use session::{session_routes, SessionHandlers};
