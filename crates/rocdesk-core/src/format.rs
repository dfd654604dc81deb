//! # Field Format Predicates
//!
//! Shared format checks used by the wizard-step validators. These take the
//! raw text the user typed and answer yes/no; the validators turn a `false`
//! into a field-level error. Identifiers with their own newtype (`Cin`,
//! `Pan`, `Tan`, `Gstin`) validate in [`crate::identity`] instead.
//!
//! Amount fields on financial steps are entered as free text and coerced
//! to numbers only at persistence time; [`parse_amount`] implements that
//! coercion (blank means "not supplied", not zero).

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Syntactic email check: one `@`, non-empty local part, dotted domain.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

/// Whether `value` looks like an email address.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// Whether `value` is a usable phone number: at least 10 digits, ignoring
/// separators (`+`, spaces, dashes, parentheses).
pub fn is_valid_phone(value: &str) -> bool {
    value.chars().filter(|c| c.is_ascii_digit()).count() >= 10
}

/// Whether `value` is a National Industrial Classification code
/// (fixed 6 characters).
pub fn is_valid_nic_code(value: &str) -> bool {
    value.trim().chars().count() == 6
}

/// Whether `value` is an IFSC bank-branch code (fixed 11 characters).
pub fn is_valid_ifsc(value: &str) -> bool {
    value.trim().chars().count() == 11
}

/// A financial amount field could not be coerced to a number.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("not a numeric amount: {0:?}")]
pub struct AmountError(pub String);

/// Coerce a free-text amount to a number at persistence time.
///
/// Blank input (after trimming) means the field was not supplied and maps
/// to `None`. Grouping commas are tolerated (`12,50,000`). Anything else
/// that fails to parse is an [`AmountError`] — the validators surface it
/// as a field error before the store ever sees it.
pub fn parse_amount(value: &str) -> Result<Option<f64>, AmountError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let normalized: String = trimmed.chars().filter(|c| *c != ',').collect();
    normalized
        .parse::<f64>()
        .map(Some)
        .map_err(|_| AmountError(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Email ────────────────────────────────────────────────────────

    #[test]
    fn test_email_accepts_plain_addresses() {
        assert!(is_valid_email("ops@example.com"));
        assert!(is_valid_email("first.last@sub.example.co.in"));
        assert!(is_valid_email("  padded@example.com  "));
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("nodomain@"));
        assert!(!is_valid_email("spaces in@example.com"));
        assert!(!is_valid_email(""));
    }

    // ── Phone ────────────────────────────────────────────────────────

    #[test]
    fn test_phone_counts_digits_only() {
        assert!(is_valid_phone("9876543210"));
        assert!(is_valid_phone("+91 98765 43210"));
        assert!(is_valid_phone("(011) 2345-6789 x0"));
    }

    #[test]
    fn test_phone_rejects_short_numbers() {
        assert!(!is_valid_phone("987654321"));
        assert!(!is_valid_phone("call me"));
        assert!(!is_valid_phone(""));
    }

    // ── Fixed-length codes ───────────────────────────────────────────

    #[test]
    fn test_nic_code_length() {
        assert!(is_valid_nic_code("62011 ".trim()));
        assert!(is_valid_nic_code("620111"));
        assert!(!is_valid_nic_code("62011"));
        assert!(!is_valid_nic_code("6201112"));
    }

    #[test]
    fn test_ifsc_length() {
        assert!(is_valid_ifsc("HDFC0001234"));
        assert!(!is_valid_ifsc("HDFC000123"));
        assert!(!is_valid_ifsc(""));
    }

    // ── Amount coercion ──────────────────────────────────────────────

    #[test]
    fn test_blank_amount_is_none() {
        assert_eq!(parse_amount("").unwrap(), None);
        assert_eq!(parse_amount("   ").unwrap(), None);
    }

    #[test]
    fn test_amount_parses_numbers() {
        assert_eq!(parse_amount("100000").unwrap(), Some(100000.0));
        assert_eq!(parse_amount("12,50,000").unwrap(), Some(1250000.0));
        assert_eq!(parse_amount("-4521.75").unwrap(), Some(-4521.75));
    }

    #[test]
    fn test_amount_rejects_non_numeric() {
        assert!(parse_amount("ten lakh").is_err());
        assert!(parse_amount("1.2.3").is_err());
    }
}
