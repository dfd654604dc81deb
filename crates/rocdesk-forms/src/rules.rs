//! # Validation Rules
//!
//! Small helpers the step validators compose. Each helper records its
//! violations into a shared [`FieldErrors`] accumulator so a single pass
//! reports everything at once.
//!
//! Helpers that validate a typed identifier (`parse_*`) double as the
//! conversion used at apply time; callers that only validate discard the
//! parsed value.

use rocdesk_core::{
    is_valid_email, is_valid_ifsc, is_valid_nic_code, is_valid_phone, parse_amount, Cin, Gstin,
    Pan, Tan,
};

use crate::error::FieldErrors;

/// Whether an optional text field is effectively blank.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

/// Required text field.
pub fn require(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, "is required");
    }
}

/// Required email field with format check.
pub fn require_email(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, "is required");
    } else if !is_valid_email(value) {
        errors.push(field, "is not a valid email address");
    }
}

/// Required phone field: at least 10 digits.
pub fn require_phone(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(field, "is required");
    } else if !is_valid_phone(value) {
        errors.push(field, "must contain at least 10 digits");
    }
}

/// Optional NIC code: fixed 6 characters when supplied.
pub fn check_nic_code(errors: &mut FieldErrors, field: &str, value: &Option<String>) {
    if let Some(v) = value {
        if !v.trim().is_empty() && !is_valid_nic_code(v) {
            errors.push(field, "must be exactly 6 characters");
        }
    }
}

/// Optional IFSC: fixed 11 characters when supplied.
pub fn check_ifsc(errors: &mut FieldErrors, field: &str, value: &Option<String>) {
    if let Some(v) = value {
        if !v.trim().is_empty() && !is_valid_ifsc(v) {
            errors.push(field, "must be exactly 11 characters");
        }
    }
}

/// Optional CIN: validate and convert. Blank input maps to `None`.
pub fn parse_optional_cin(
    errors: &mut FieldErrors,
    field: &str,
    value: &Option<String>,
) -> Option<Cin> {
    let raw = value.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }
    match Cin::parse(raw) {
        Ok(cin) => Some(cin),
        Err(_) => {
            errors.push(field, "must be exactly 21 characters");
            None
        }
    }
}

/// Optional PAN: validate and convert. Blank input maps to `None`.
pub fn parse_optional_pan(
    errors: &mut FieldErrors,
    field: &str,
    value: &Option<String>,
) -> Option<Pan> {
    let raw = value.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }
    match Pan::parse(raw) {
        Ok(pan) => Some(pan),
        Err(_) => {
            errors.push(field, "must be five letters, four digits and a letter");
            None
        }
    }
}

/// Optional TAN: validate and convert. Blank input maps to `None`.
pub fn parse_optional_tan(
    errors: &mut FieldErrors,
    field: &str,
    value: &Option<String>,
) -> Option<Tan> {
    let raw = value.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }
    match Tan::parse(raw) {
        Ok(tan) => Some(tan),
        Err(_) => {
            errors.push(field, "must be four letters, five digits and a letter");
            None
        }
    }
}

/// Optional GSTIN: validate and convert. Blank input maps to `None`.
pub fn parse_optional_gstin(
    errors: &mut FieldErrors,
    field: &str,
    value: &Option<String>,
) -> Option<Gstin> {
    let raw = value.as_deref()?.trim();
    if raw.is_empty() {
        return None;
    }
    match Gstin::parse(raw) {
        Ok(gstin) => Some(gstin),
        Err(_) => {
            errors.push(field, "must be exactly 15 characters");
            None
        }
    }
}

/// Free-text amount field: blank is fine (unsupplied), anything else
/// must be numeric.
pub fn check_amount(errors: &mut FieldErrors, field: &str, value: &str) {
    if parse_amount(value).is_err() {
        errors.push(field, "is not a numeric amount");
    }
}

/// Required postal address: line1, city, state and PIN code.
pub fn require_address(errors: &mut FieldErrors, prefix: &str, address: &rocdesk_core::Address) {
    require(errors, &format!("{prefix}.line1"), &address.line1);
    require(errors, &format!("{prefix}.city"), &address.city);
    require(errors, &format!("{prefix}.state"), &address.state);
    require(errors, &format!("{prefix}.pin_code"), &address.pin_code);
}
