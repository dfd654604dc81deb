//! # rocdesk-model — Entity Records
//!
//! The four independently stored record types of the compliance register
//! and the owned sub-structures that live and die with them:
//!
//! - **Company** (`company.rs`): legal identifiers, registered office,
//!   financial year, owned branches, corporate relations and the
//!   registration bundle.
//! - **Director** (`director.rs`): designation taxonomy, identity numbers,
//!   present/permanent addresses, entity interests and company
//!   associations.
//! - **Audit** (`audit.rs`): auditor identity, appointment window and the
//!   financial snapshot for the audited period.
//! - **ShareCapitalMember** (`member.rs`): member details, the five-stage
//!   capital tranche chain and optional equity/preference holdings.
//! - **Capital tranches** (`capital.rs`): the
//!   Authorized → Issued → Subscribed → Called-up → Paid-up chain with
//!   explicit `Independent | SameAsPrevious` carry-forward inputs.
//!
//! ## Design
//!
//! Cross-entity references (`CompanyId` inside a director's association,
//! inside an audit) are weak: an id plus a lookup at read time, never an
//! owning pointer. Deleting a company does not cascade; resolvers must
//! tolerate dangling ids.
//!
//! Every record carries a `Patch` companion struct whose fields are all
//! `Option`. Applying a patch is a field-by-field assignment, so the
//! shallow merge used by `update` is checked at compile time rather than
//! being an untyped object spread. An absent patch field leaves the stored
//! value untouched; patches cannot clear an optional field (a full wizard
//! edit replaces every field instead).

pub mod audit;
pub mod capital;
pub mod company;
pub mod director;
pub mod document;
pub mod member;

pub use audit::{Audit, AuditPatch, AuditorType, CessationType, FinancialSnapshot};
pub use capital::{
    AuthorizedCapital, CalledUpCapital, CalledUpInput, CapitalMode, CapitalType, IssuedCapital,
    PaidUpCapital, PaidUpInput, SubscribedCapital, SubscribedInput, TrancheFields, TrancheSource,
};
pub use company::{
    BankAccount, Branch, Company, CompanyPatch, CorporateRelation, FinancialYear, Registration,
    RegistrationEntry, RelationKind,
};
pub use director::{CompanyAssociation, Director, DirectorPatch, EntityInterest};
pub use document::DocumentRef;
pub use member::{HoldingDetails, MemberDetails, MemberPatch, ShareCapitalMember};
