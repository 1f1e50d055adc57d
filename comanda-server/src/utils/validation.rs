//! Input validation helpers
//!
//! redb enforces no length limits itself, so every handler-facing payload
//! passes through these before it reaches the store.

use shared::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: product, raw material, category
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: units, payment method labels
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// URLs / image paths
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers ──────────────────────────────────────────────

fn check_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{} is too long ({} chars, max {})",
            field,
            value.len(),
            max_len
        )));
    }
    Ok(())
}

/// A required string must be non-blank and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{} must not be empty", field)));
    }
    check_len(value, field, max_len)
}

/// An optional string only gets the length check, and only when present.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value.as_deref() {
        Some(v) => check_len(v, field, max_len),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_blank() {
        assert!(validate_required_text("Flour", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_required_text_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_length_boundary_is_inclusive() {
        let exact = "x".repeat(MAX_NAME_LEN);
        assert!(validate_required_text(&exact, "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn test_optional_text_allows_none() {
        assert!(validate_optional_text(&None, "image", MAX_URL_LEN).is_ok());
        assert!(validate_optional_text(&Some("ok".to_string()), "image", MAX_URL_LEN).is_ok());
        let long = Some("x".repeat(MAX_URL_LEN + 1));
        assert!(validate_optional_text(&long, "image", MAX_URL_LEN).is_err());
    }
}
