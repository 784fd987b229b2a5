//! Session query handlers.

mod get_session;

pub use get_session::{GetSessionError, GetSessionHandler, GetSessionQuery, SessionView};
