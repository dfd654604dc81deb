//! # rocdesk-forms
//!
//! Wizard-driven construction and validation of registry records. Each
//! entity has a fixed multi-step flow; every step validates its payload
//! against the schema (reporting all violations at once, keyed by field
//! name) before merging it into the accumulated draft, and the final
//! step assembles the finished record for the entity store.
//!
//! - [`wizard`] — the generic step controller ([`Wizard`], [`WizardFlow`]).
//! - [`rules`] — field-level validation helpers.
//! - [`upload`] — proof-document size and extension constraints.
//! - [`company_flow`], [`director_flow`], [`audit_flow`], [`member_flow`]
//!   — the four concrete flows.

pub mod audit_flow;
pub mod company_flow;
pub mod director_flow;
pub mod error;
pub mod member_flow;
pub mod rules;
pub mod upload;
pub mod wizard;

pub use audit_flow::{AuditDraft, AuditFlow, AuditStep};
pub use company_flow::{CompanyDraft, CompanyFlow, CompanyStep};
pub use director_flow::{DirectorDraft, DirectorFlow, DirectorStep};
pub use error::{FieldError, FieldErrors};
pub use member_flow::{MemberDraft, MemberFlow, MemberStep};
pub use upload::{check_optional_upload, check_upload, UploadKind, MAX_UPLOAD_BYTES};
pub use wizard::{Wizard, WizardError, WizardFlow, WizardOutcome};
