//! # rocdesk-core — Foundational Types for the Compliance Register
//!
//! This crate is the bedrock of the rocdesk workspace. It defines the
//! type-system primitives every other crate builds on and depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identity.** `CompanyId`, `DirectorId`,
//!    `AuditId`, `MemberId` — UUIDv4 newtypes. You cannot pass a
//!    `DirectorId` where a `CompanyId` is expected, so a cross-collection
//!    join can never silently mix key namespaces.
//!
//! 2. **Validated constructors for regulatory identifiers.** `Cin`, `Pan`,
//!    `Tan`, `Gstin` reject malformed input at construction. A stored
//!    record can only ever contain a well-formed identifier; free-text
//!    fields stay `String`.
//!
//! 3. **Format predicates live here once.** Email, phone, NIC code and
//!    IFSC checks are shared by every form validator instead of being
//!    re-implemented per wizard step.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `rocdesk-*` crates (leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone` and implement
//!   `Serialize`/`Deserialize`.

pub mod address;
pub mod error;
pub mod format;
pub mod identity;

// Re-export primary types for ergonomic imports.
pub use address::{Address, Contact};
pub use error::IdentifierError;
pub use format::{is_valid_email, is_valid_ifsc, is_valid_nic_code, is_valid_phone, parse_amount, AmountError};
pub use identity::{AuditId, Cin, CompanyId, DirectorId, Gstin, MemberId, Pan, Tan};
