//! # Error Types — Identifier Construction Failures
//!
//! Errors raised by the validated constructors in [`crate::identity`].
//! These are boundary errors: once a value of `Cin`/`Pan`/`Tan`/`Gstin`
//! exists, it is well-formed by construction and no later code path needs
//! to re-check it.

use thiserror::Error;

/// A regulatory identifier failed its format check at construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// CIN is a fixed 21-character Corporate Identity Number.
    #[error("CIN must be exactly 21 characters, got {len}: {value:?}")]
    InvalidCin {
        /// The rejected input.
        value: String,
        /// Its character count.
        len: usize,
    },

    /// PAN is 5 letters, 4 digits and a trailing letter.
    #[error("PAN must match five letters, four digits and a letter, got {0:?}")]
    InvalidPan(String),

    /// TAN is 4 letters, 5 digits and a trailing letter.
    #[error("TAN must match four letters, five digits and a letter, got {0:?}")]
    InvalidTan(String),

    /// GSTIN is a fixed 15-character registration number.
    #[error("GSTIN must be exactly 15 characters, got {len}: {value:?}")]
    InvalidGstin {
        /// The rejected input.
        value: String,
        /// Its character count.
        len: usize,
    },
}
