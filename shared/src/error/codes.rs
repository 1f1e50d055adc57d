//! Error code registry shared by every service and handler
//!
//! Codes live in numeric bands so the failing subsystem is readable off
//! the wire value alone: 0xxx general, 1xxx inventory, 2xxx catalog,
//! 3xxx order, 9xxx system.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Every failure the backend can put on the wire, as a stable u16.
///
/// Serialized as the bare number so non-Rust clients can switch on it
/// without a string table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    Success = 0,
    Unknown = 1,
    ValidationFailed = 2,
    NotFound = 3,
    AlreadyExists = 4,
    InvalidRequest = 5,

    // ==================== 1xxx: Inventory ====================
    /// Raw material id unknown or pointing at a deleted row
    MaterialNotFound = 1001,
    /// Another material, live or deleted, already owns the name
    MaterialNameExists = 1002,
    /// Delete requested twice for the same material
    MaterialAlreadyDeleted = 1003,
    /// Stock cannot cover the requested deduction
    InsufficientStock = 1004,

    // ==================== 2xxx: Catalog ====================
    /// Product id unknown or pointing at a deleted row
    ProductNotFound = 2001,
    /// Another product, live or deleted, already owns the name
    ProductNameExists = 2002,
    /// Delete requested twice for the same product
    ProductAlreadyDeleted = 2003,

    // ==================== 3xxx: Order ====================
    OrderNotFound = 3001,
    /// Placement rejected because the cart had no lines
    OrderEmpty = 3002,

    // ==================== 9xxx: System ====================
    InternalError = 9001,
    DatabaseError = 9002,
    ConfigError = 9003,
}

impl ErrorCode {
    /// The wire value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default English message, used when a caller has nothing better
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Success => "OK",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",

            Self::MaterialNotFound => "Raw material not found",
            Self::MaterialNameExists => "Raw material with this name already exists",
            Self::MaterialAlreadyDeleted => "Raw material has already been deleted",
            Self::InsufficientStock => "Insufficient stock",

            Self::ProductNotFound => "Product not found",
            Self::ProductNameExists => "Product with this name already exists",
            Self::ProductAlreadyDeleted => "Product has already been deleted",

            Self::OrderNotFound => "Order not found",
            Self::OrderEmpty => "Order contains no items",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code as u16
    }
}

/// A u16 off the wire that maps to no registered code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,

            1001 => Self::MaterialNotFound,
            1002 => Self::MaterialNameExists,
            1003 => Self::MaterialAlreadyDeleted,
            1004 => Self::InsufficientStock,

            2001 => Self::ProductNotFound,
            2002 => Self::ProductNameExists,
            2003 => Self::ProductAlreadyDeleted,

            3001 => Self::OrderNotFound,
            3002 => Self::OrderEmpty,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,
            9003 => Self::ConfigError,

            _ => return Err(InvalidErrorCode(value)),
        };
        Ok(code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u16)
    }
}
