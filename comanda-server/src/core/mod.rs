//! Core module: configuration, state, and the server itself
//!
//! - [`Config`] - environment-driven configuration
//! - [`ServerState`] - shared state handed to every handler
//! - [`Server`] - HTTP server lifecycle

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::Server;
pub use state::ServerState;
