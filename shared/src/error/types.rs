//! `AppError` and the JSON envelope error bodies travel in

use std::collections::HashMap;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::category::ErrorCategory;
use super::codes::ErrorCode;

/// Shorthand for fallible service and handler results
pub type AppResult<T> = Result<T, AppError>;

/// The one error type every fallible path in the backend speaks.
///
/// Couples an [`ErrorCode`] with the message that reaches the caller and
/// an optional bag of structured context for clients that want more than
/// prose.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// Wire code, also the source of the HTTP status
    pub code: ErrorCode,
    /// Message shown to the caller
    pub message: String,
    /// Structured context keyed by field name
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error carrying a caller-supplied message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Error carrying the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    /// Attach one detail entry, creating the map on first use
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        details.insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== General constructors ====================

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        let resource = resource.into();
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource))
            .with_detail("resource", resource)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AlreadyExists, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    // ==================== Domain constructors ====================

    /// Product lookup failure (unknown or soft-deleted id)
    pub fn product_not_found(id: impl std::fmt::Display) -> Self {
        Self::with_message(
            ErrorCode::ProductNotFound,
            format!("Product with ID {} not found", id),
        )
    }

    /// Raw material lookup failure (unknown or soft-deleted id)
    pub fn material_not_found(id: impl std::fmt::Display) -> Self {
        Self::with_message(
            ErrorCode::MaterialNotFound,
            format!("Raw material with ID {} not found", id),
        )
    }

    /// Order lookup failure
    pub fn order_not_found(id: impl std::fmt::Display) -> Self {
        Self::with_message(
            ErrorCode::OrderNotFound,
            format!("Order with ID {} not found", id),
        )
    }

    /// Stock check failure, carrying the material name and the shortfall
    pub fn insufficient_stock(material: impl Into<String>, required: f64, available: f64) -> Self {
        let material = material.into();
        Self::with_message(
            ErrorCode::InsufficientStock,
            format!(
                "Insufficient stock for raw material: {}. Required: {}, Available: {}",
                material, required, available
            ),
        )
        .with_detail("material", material)
        .with_detail("required", required)
        .with_detail("available", available)
    }
}

/// JSON envelope for error bodies and message-only replies.
///
/// Resource endpoints answer with their payload as plain JSON; this shape
/// is what clients parse whenever `code` is non-zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 0 on success, the wire value of the failing code otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload in the success shape
    pub fn success(data: T) -> Self {
        Self {
            code: Some(0),
            message: "OK".to_string(),
            data: Some(data),
            details: None,
        }
    }
}

impl ApiResponse<()> {
    /// The body for a failed request
    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // System-band errors hit the log as well as the wire
        if self.code.category() == ErrorCategory::System {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "request failed with system error"
            );
        }
        let body = ApiResponse::<()>::error(&self);
        (self.http_status(), Json(body)).into_response()
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = match self.code {
            None | Some(0) => StatusCode::OK,
            Some(raw) => ErrorCode::try_from(raw)
                .map(|code| code.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        };
        (status, Json(self)).into_response()
    }
}
