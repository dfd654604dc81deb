//! # Share-Capital Member Record
//!
//! One member of a company's share capital: personal details, the full
//! five-tranche capital chain, and optional equity/preference holding
//! details. The tranche chain is built step by step by the member wizard
//! (see `rocdesk-forms`), which wires the same-as-previous carry-forward
//! through the builders in [`crate::capital`].

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rocdesk_core::{Contact, MemberId, Pan};

use crate::capital::{
    AuthorizedCapital, CalledUpCapital, IssuedCapital, PaidUpCapital, SubscribedCapital,
};

/// Personal details of the member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberDetails {
    /// Member status (e.g. "Individual", "Body corporate"). Entered as
    /// registry text, not a closed vocabulary.
    pub status: String,
    /// First name.
    pub first_name: String,
    /// Middle name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Last name.
    pub last_name: String,
    /// Contact details.
    pub contact: Contact,
    /// PAN, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<Pan>,
    /// Nationality.
    pub nationality: String,
    /// Whether the member is a minor.
    pub is_minor: bool,
    /// Whether a nomination has been filed.
    pub has_nomination: bool,
}

/// Folio/demat holding details for one share class (equity or
/// preference).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldingDetails {
    /// Folio number for physical holdings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folio_number: Option<String>,
    /// Depository participant id for demat holdings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dp_id: Option<String>,
    /// Client id at the depository participant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Shares held in physical form.
    pub physical_shares: u64,
    /// Shares held in dematerialized form.
    pub demat_shares: u64,
    /// Date of the beneficial-interest declaration, if filed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_declaration: Option<NaiveDate>,
    /// Beneficial owner, when different from the member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficial_owner: Option<String>,
    /// Date the holding ceased, if it has.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_cessation: Option<NaiveDate>,
}

impl HoldingDetails {
    /// Derived total: physical plus demat shares.
    pub fn total_shares(&self) -> u64 {
        self.physical_shares + self.demat_shares
    }
}

/// A share-capital member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareCapitalMember {
    /// Store-assigned identity.
    pub id: MemberId,
    /// Personal details.
    pub details: MemberDetails,
    /// Authorized-capital tranche.
    pub authorized: AuthorizedCapital,
    /// Issued-capital tranche.
    pub issued: IssuedCapital,
    /// Subscribed-capital tranche (may be derived from Issued).
    pub subscribed: SubscribedCapital,
    /// Called-up-capital tranche (may be derived from Subscribed).
    pub called_up: CalledUpCapital,
    /// Paid-up-capital tranche (may be derived from Called-up).
    pub paid_up: PaidUpCapital,
    /// Equity holding details, when the member holds equity shares.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity: Option<HoldingDetails>,
    /// Preference holding details, when the member holds preference
    /// shares.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<HoldingDetails>,
    /// Set by the store at creation.
    pub created_at: DateTime<Utc>,
    /// Set by the store on every successful write.
    pub updated_at: DateTime<Utc>,
}

impl ShareCapitalMember {
    /// Total shares held across equity and preference holdings.
    /// Members without holding details contribute zero.
    pub fn total_shares(&self) -> u64 {
        self.equity.as_ref().map_or(0, HoldingDetails::total_shares)
            + self
                .preference
                .as_ref()
                .map_or(0, HoldingDetails::total_shares)
    }
}

/// Shallow-merge patch for [`ShareCapitalMember`]. Absent fields are
/// untouched; each tranche replaces as a whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberPatch {
    pub details: Option<MemberDetails>,
    pub authorized: Option<AuthorizedCapital>,
    pub issued: Option<IssuedCapital>,
    pub subscribed: Option<SubscribedCapital>,
    pub called_up: Option<CalledUpCapital>,
    pub paid_up: Option<PaidUpCapital>,
    pub equity: Option<HoldingDetails>,
    pub preference: Option<HoldingDetails>,
}

impl ShareCapitalMember {
    /// Apply a shallow merge: every present patch field overwrites the
    /// stored value.
    pub fn apply_patch(&mut self, patch: MemberPatch) {
        let MemberPatch {
            details,
            authorized,
            issued,
            subscribed,
            called_up,
            paid_up,
            equity,
            preference,
        } = patch;
        if let Some(v) = details {
            self.details = v;
        }
        if let Some(v) = authorized {
            self.authorized = v;
        }
        if let Some(v) = issued {
            self.issued = v;
        }
        if let Some(v) = subscribed {
            self.subscribed = v;
        }
        if let Some(v) = called_up {
            self.called_up = v;
        }
        if let Some(v) = paid_up {
            self.paid_up = v;
        }
        if let Some(v) = equity {
            self.equity = Some(v);
        }
        if let Some(v) = preference {
            self.preference = Some(v);
        }
    }
}

impl From<ShareCapitalMember> for MemberPatch {
    /// Full-field patch used when a wizard edit re-submits the whole
    /// record through `update`.
    fn from(m: ShareCapitalMember) -> Self {
        Self {
            details: Some(m.details),
            authorized: Some(m.authorized),
            issued: Some(m.issued),
            subscribed: Some(m.subscribed),
            called_up: Some(m.called_up),
            paid_up: Some(m.paid_up),
            equity: m.equity,
            preference: m.preference,
        }
    }
}
