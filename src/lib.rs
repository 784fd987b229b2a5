//! VPA Assistant - visa and passport chat assistant.
//!
//! Routes a free-text message to a visa application link or the passport
//! information page, resolving misspelled or aliased country names and
//! asking for confirmation whenever a name had to be corrected.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
