//! Data models
//!
//! Shared between the server and its integration tests. Entities are stored
//! as serde_json values in redb; all timestamps are Unix millis (`i64`).

pub mod order;
pub mod product;
pub mod raw_material;
pub mod report;

// Re-exports
pub use order::*;
pub use product::*;
pub use raw_material::*;
pub use report::*;
