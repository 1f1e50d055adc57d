//! Shared types for the Comanda POS backend
//!
//! Common types used by the server and its integration tests: the unified
//! error system, the API response envelope, and the data models exchanged
//! over the wire.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
