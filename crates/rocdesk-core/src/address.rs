//! # Address and Contact Primitives
//!
//! Postal address and contact details shared by every entity. Addresses
//! are owned by the record that carries them (a company's registered
//! office, a branch, a director's present/permanent address, an auditor's
//! office) — there is no address collection and no address identity.

use serde::{Deserialize, Serialize};

/// A postal address as entered on a form.
///
/// Only `line1`, `city`, `state` and `pin_code` are required by the form
/// validators; the rest are free-text conveniences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// First address line (house / building / street).
    pub line1: String,
    /// Optional second address line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    /// City or town.
    pub city: String,
    /// State or union territory.
    pub state: String,
    /// Postal PIN code.
    pub pin_code: String,
    /// Country; defaults to blank and is not validated.
    #[serde(default)]
    pub country: String,
}

/// Contact details captured alongside an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact email address (validated by the form layer).
    pub email: String,
    /// Contact phone number (validated by the form layer).
    pub phone: String,
}
