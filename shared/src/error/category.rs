//! Coarse classification of error codes by their numeric band

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// The slice of the backend a failure came from.
///
/// Read straight off the numeric band of the code, so every code maps to
/// exactly one category with no lookup table to keep in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Inventory,
    Catalog,
    Order,
    System,
}

impl ErrorCategory {
    /// Band membership for a wire value; anything past the known bands is System
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Inventory,
            2000..3000 => Self::Catalog,
            3000..4000 => Self::Order,
            _ => Self::System,
        }
    }

    /// Lowercase label for log fields
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Inventory => "inventory",
            Self::Catalog => "catalog",
            Self::Order => "order",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        let table = [
            (0u16, ErrorCategory::General),
            (999, ErrorCategory::General),
            (1000, ErrorCategory::Inventory),
            (1999, ErrorCategory::Inventory),
            (2000, ErrorCategory::Catalog),
            (2999, ErrorCategory::Catalog),
            (3000, ErrorCategory::Order),
            (3999, ErrorCategory::Order),
            (4000, ErrorCategory::System),
            (9002, ErrorCategory::System),
            (u16::MAX, ErrorCategory::System),
        ];
        for (value, expected) in table {
            assert_eq!(ErrorCategory::from_code(value), expected);
        }
    }

    #[test]
    fn test_codes_land_in_their_band() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::InsufficientStock.category(),
            ErrorCategory::Inventory
        );
        assert_eq!(ErrorCode::ProductNotFound.category(), ErrorCategory::Catalog);
        assert_eq!(ErrorCode::OrderEmpty.category(), ErrorCategory::Order);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_log_labels() {
        assert_eq!(ErrorCategory::Inventory.name(), "inventory");
        assert_eq!(ErrorCategory::System.name(), "system");
    }
}
