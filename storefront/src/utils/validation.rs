//! Input validation helpers
//!
//! Centralized text length constants and validation functions shared by
//! the settings CRUD and the customer form. Limits are UX bounds, not
//! storage constraints - everything lives in memory.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: company, certification, customer
pub const MAX_NAME_LEN: usize = 200;

/// Notes and descriptions (order notes, company description)
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: phone numbers and similar
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs (social media links)
pub const MAX_URL_LEN: usize = 2048;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers (settings CRUD) ──────────────────────────────

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

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Check that a string has the `local@domain` shape with a dotted domain.
///
/// Deliberately permissive beyond that shape; the storefront is not an
/// email deliverability oracle.
pub fn is_email_shaped(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // domain must contain a dot with non-empty labels on each side
    domain.split('.').count() >= 2 && domain.split('.').all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_blank() {
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("Nowicki", "name", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn required_text_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_required_text(&long, "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn optional_text_allows_absent() {
        assert!(validate_optional_text(&None, "notes", MAX_NOTE_LEN).is_ok());
        let long = Some("x".repeat(MAX_NOTE_LEN + 1));
        assert!(validate_optional_text(&long, "notes", MAX_NOTE_LEN).is_err());
    }

    #[test]
    fn email_shape() {
        assert!(is_email_shaped("jan.kowalski@example.com"));
        assert!(is_email_shaped("a@b.co"));
        assert!(!is_email_shaped("not-an-email"));
        assert!(!is_email_shaped("@example.com"));
        assert!(!is_email_shaped("jan@"));
        assert!(!is_email_shaped("jan@example"));
        assert!(!is_email_shaped("jan@exa@mple.com"));
        assert!(!is_email_shaped("jan@.com"));
    }
}
