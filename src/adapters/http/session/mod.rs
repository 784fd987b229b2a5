//! HTTP adapter for session endpoints.

mod handlers;
mod routes;

pub use handlers::SessionHandlers;
pub use routes::session_routes;
