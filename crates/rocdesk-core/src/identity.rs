//! # Identity Newtypes
//!
//! Newtype wrappers for every identifier in the compliance register.
//!
//! Two families live here:
//!
//! - **Entity identity** — `CompanyId`, `DirectorId`, `AuditId`, `MemberId`:
//!   UUIDv4 values assigned by the entity store at creation, never reused
//!   across a store's lifetime. Type-level distinction prevents one
//!   collection's key from being looked up in another.
//!
//! - **Regulatory identifiers** — `Cin`, `Pan`, `Tan`, `Gstin`: registry
//!   numbers with fixed formats, validated at construction. A record can
//!   only hold a well-formed value; everything else is rejected with an
//!   [`IdentifierError`] before it reaches storage.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::IdentifierError;

// ─── Entity identity ─────────────────────────────────────────────────

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Generate a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Access the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            /// Parse from a bare UUID string (the `prefix:` form produced by
            /// `Display` is also accepted).
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let bare = s.strip_prefix(concat!($prefix, ":")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(bare)?))
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a registered company.
    CompanyId,
    "company"
);
entity_id!(
    /// Unique identifier for a director.
    DirectorId,
    "director"
);
entity_id!(
    /// Unique identifier for an audit engagement record.
    AuditId,
    "audit"
);
entity_id!(
    /// Unique identifier for a share-capital member.
    MemberId,
    "member"
);

// ─── Regulatory identifiers ──────────────────────────────────────────

/// PAN shape: five letters, four digits, one letter.
static PAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{5}[0-9]{4}[A-Za-z]$").expect("PAN pattern is valid"));

/// TAN shape: four letters, five digits, one letter.
static TAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{4}[0-9]{5}[A-Za-z]$").expect("TAN pattern is valid"));

/// Corporate Identity Number — a fixed 21-character registry code.
///
/// The registry encodes listing status, industry, state and year inside
/// the CIN, but the register only enforces the fixed length; the
/// sub-fields are never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cin(String);

impl Cin {
    /// Validate and wrap a CIN. Exactly 21 characters after trimming.
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        let trimmed = value.trim();
        let len = trimmed.chars().count();
        if len != 21 {
            return Err(IdentifierError::InvalidCin {
                value: value.to_string(),
                len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The validated identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Permanent Account Number of a person or firm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pan(String);

impl Pan {
    /// Validate and wrap a PAN (`AAAAA9999A`).
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        let trimmed = value.trim();
        if !PAN_RE.is_match(trimmed) {
            return Err(IdentifierError::InvalidPan(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The validated identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tax Deduction and Collection Account Number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tan(String);

impl Tan {
    /// Validate and wrap a TAN (`AAAA99999A`).
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        let trimmed = value.trim();
        if !TAN_RE.is_match(trimmed) {
            return Err(IdentifierError::InvalidTan(value.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The validated identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Goods and Services Tax registration number — fixed 15 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gstin(String);

impl Gstin {
    /// Validate and wrap a GSTIN. Exactly 15 characters after trimming.
    pub fn parse(value: &str) -> Result<Self, IdentifierError> {
        let trimmed = value.trim();
        let len = trimmed.chars().count();
        if len != 15 {
            return Err(IdentifierError::InvalidGstin {
                value: value.to_string(),
                len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The validated identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Cin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for Pan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for Tan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for Gstin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
