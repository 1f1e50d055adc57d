//! HTTP status derivation for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// The status an HTTP response carrying this code should use.
    ///
    /// Lookup failures are 404, name clashes 409, everything the caller
    /// could have avoided 400, and system trouble 500.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::NotFound
            | Self::MaterialNotFound
            | Self::ProductNotFound
            | Self::OrderNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists | Self::MaterialNameExists | Self::ProductNameExists => {
                StatusCode::CONFLICT
            }

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InsufficientStock
            | Self::MaterialAlreadyDeleted
            | Self::ProductAlreadyDeleted
            | Self::OrderEmpty => StatusCode::BAD_REQUEST,

            Self::Unknown | Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_per_code() {
        let table = [
            (ErrorCode::MaterialNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::ProductNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::OrderNotFound, StatusCode::NOT_FOUND),
            (ErrorCode::MaterialNameExists, StatusCode::CONFLICT),
            (ErrorCode::ProductNameExists, StatusCode::CONFLICT),
            (ErrorCode::ValidationFailed, StatusCode::BAD_REQUEST),
            (ErrorCode::InsufficientStock, StatusCode::BAD_REQUEST),
            (ErrorCode::MaterialAlreadyDeleted, StatusCode::BAD_REQUEST),
            (ErrorCode::ProductAlreadyDeleted, StatusCode::BAD_REQUEST),
            (ErrorCode::OrderEmpty, StatusCode::BAD_REQUEST),
            (ErrorCode::DatabaseError, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (code, status) in table {
            assert_eq!(code.http_status(), status, "code {}", code);
        }
    }
}
