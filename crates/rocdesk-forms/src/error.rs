//! # Field Errors
//!
//! Validation failures are values, not exceptions. A step validator
//! checks every rule and reports **all** violations together, keyed by
//! field name, so the caller can render them side by side instead of
//! fixing one field per round trip.

use serde::Serialize;
use thiserror::Error;

/// One violated rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field name as it appears on the form (list entries use
    /// `list[index].field`).
    pub field: String,
    /// Human-readable message for that field.
    pub message: String,
}

/// All violations found by one validation pass. Never empty when
/// returned as an `Err`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    /// An empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Absorb another accumulator's violations.
    pub fn extend(&mut self, other: FieldErrors) {
        self.errors.extend(other.errors);
    }

    /// Whether any violation was recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate the violations in recording order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Whether a violation was recorded for the named field.
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Convert the accumulator into a validation result: `Ok(())` when
    /// nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for e in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
            first = false;
        }
        Ok(())
    }
}
