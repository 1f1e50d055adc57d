//! Error surface shared by the server and any future clients
//!
//! Four pieces, one per file: the [`ErrorCode`] registry, the
//! [`ErrorCategory`] bands, the HTTP status mapping, and [`AppError`]
//! with its [`ApiResponse`] envelope.
//!
//! Codes occupy numeric bands (0xxx general, 1xxx inventory, 2xxx
//! catalog, 3xxx order, 9xxx system) so a client can route on the number
//! alone.
//!
//! # Example
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::new(ErrorCode::MaterialAlreadyDeleted);
//! assert_eq!(err.http_status(), http::StatusCode::BAD_REQUEST);
//!
//! let err = AppError::validation("name must not be empty")
//!     .with_detail("field", "name");
//! let body = ApiResponse::<()>::error(&err);
//! assert_eq!(body.code, Some(2));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
