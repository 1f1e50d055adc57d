//! Money calculation utilities using rust_decimal for precision
//!
//! Monetary amounts travel as `f64` through the API and storage layers.
//! Arithmetic happens on `Decimal`, and results are rounded to 2 decimal
//! places on the way back out.

use rust_decimal::prelude::*;
use shared::AppError;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per product unit
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: u32 = 9999;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
pub fn require_finite(value: f64, field: &str) -> Result<(), AppError> {
    if !value.is_finite() {
        return Err(AppError::validation(format!(
            "{field} must be a finite number, got {value}"
        )));
    }
    Ok(())
}

/// Validate a price field: finite, non-negative, at most `MAX_PRICE`
pub fn validate_price(value: f64, field: &str) -> Result<(), AppError> {
    require_finite(value, field)?;
    if value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be non-negative, got {value}"
        )));
    }
    if value > MAX_PRICE {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum allowed ({MAX_PRICE}), got {value}"
        )));
    }
    Ok(())
}

/// Validate an order line quantity: at least 1, at most `MAX_QUANTITY`
pub fn validate_quantity(value: u32, field: &str) -> Result<(), AppError> {
    if value == 0 {
        return Err(AppError::validation(format!(
            "{field} must be positive, got {value}"
        )));
    }
    if value > MAX_QUANTITY {
        return Err(AppError::validation(format!(
            "{field} exceeds maximum allowed ({MAX_QUANTITY}), got {value}"
        )));
    }
    Ok(())
}

/// Widen an f64 into Decimal so line totals accumulate exactly
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Narrow a Decimal back to f64 at the storage boundary, rounded to 2
/// decimal places with midpoints away from zero
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    let rounded =
        value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_f64().unwrap_or_default()
}
