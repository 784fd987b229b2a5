//! HTTP adapter for registry endpoints.

mod handlers;
mod routes;

pub use handlers::RegistryHandlers;
pub use routes::registry_routes;
