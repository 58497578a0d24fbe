//! Input validation helpers
//!
//! Centralized text length constants and per-field checks used by the
//! insert handlers. SQLite TEXT has no built-in length enforcement.

use chrono::{NaiveDate, NaiveDateTime};

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: category, product, client
pub const MAX_NAME_LEN: usize = 200;

/// Minimum category/client name length
pub const MIN_NAME_LEN: usize = 3;

/// Minimum product name length
pub const MIN_PRODUCT_NAME_LEN: usize = 2;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (stored as opaque demo strings)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Short identifiers: phone numbers
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate a required string with a minimum trimmed length.
pub fn validate_min_text(
    value: &str,
    field: &str,
    min_len: usize,
    max_len: usize,
) -> Result<(), AppError> {
    validate_required_text(value, field, max_len)?;
    if value.trim().chars().count() < min_len {
        return Err(AppError::validation(format!(
            "{field} must be at least {min_len} characters"
        )));
    }
    Ok(())
}

/// Validate that a surrogate id reference is positive.
pub fn validate_positive_id(value: i64, field: &str) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::validation(format!(
            "{field} must be a positive id, got {value}"
        )));
    }
    Ok(())
}

/// Validate that an integer count (party size, quantity) is at least one.
pub fn validate_at_least_one(value: i64, field: &str) -> Result<(), AppError> {
    if value < 1 {
        return Err(AppError::validation(format!(
            "{field} must be at least 1, got {value}"
        )));
    }
    Ok(())
}

/// Parse a datetime field.
///
/// Accepts what the forms actually send: `datetime-local` values with or
/// without seconds, full ISO timestamps, and bare dates (midnight).
pub fn parse_datetime(value: &str, field: &str) -> Result<NaiveDateTime, AppError> {
    let value = value.trim();
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).expect("midnight is valid"));
    }
    Err(AppError::validation(format!(
        "{field} is not a valid datetime: '{value}'"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_names_are_rejected() {
        assert!(validate_required_text("", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Carns", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn min_length_counts_trimmed_chars() {
        assert!(validate_min_text("ab ", "name", 3, MAX_NAME_LEN).is_err());
        assert!(validate_min_text(" abc ", "name", 3, MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn datetime_formats_from_the_forms_parse() {
        assert!(parse_datetime("2026-03-14T20:30", "date").is_ok());
        assert!(parse_datetime("2026-03-14T20:30:00", "date").is_ok());
        assert!(parse_datetime("2026-03-14", "date").is_ok());
        assert!(parse_datetime("not-a-date", "date").is_err());
        assert!(parse_datetime("2026-13-40", "date").is_err());
    }

    #[test]
    fn ids_and_counts_must_be_positive() {
        assert!(validate_positive_id(0, "client_id").is_err());
        assert!(validate_positive_id(-4, "client_id").is_err());
        assert!(validate_positive_id(1, "client_id").is_ok());
        assert!(validate_at_least_one(0, "party_size").is_err());
        assert!(validate_at_least_one(1, "party_size").is_ok());
    }
}
