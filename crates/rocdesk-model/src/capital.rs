//! # Capital Tranche Chain
//!
//! The five-stage share-capital declaration of a member:
//!
//! ```text
//! Authorized ──▶ Issued ──▶ Subscribed ──▶ Called-up ──▶ Paid-up
//! ```
//!
//! Each tranche after Issued may declare itself "same as the previous
//! tranche". That declaration is modeled explicitly: the builder for each
//! derived tranche takes an `Independent(..) | SameAs..` input, and the
//! carry-forward is a **snapshot copy** performed at build time — never a
//! live binding. Re-saving an upstream tranche later does not reach
//! forward into tranches already derived from it; the user re-opens and
//! re-saves the downstream step to refresh the copy.
//!
//! ## Carry-forward rules
//!
//! - Same-named fields copy verbatim: capital type, description, date,
//!   mode, number of shares, nominal value per share, premium/discount
//!   per share.
//! - One rename on the Called-up → Paid-up transition:
//!   `amount_called_up_per_share` becomes `amount_paid_up_per_share`.
//! - Tranche-specific extras are never carried. Called-up always supplies
//!   its own `amount_called_up_per_share` (when derived from Subscribed,
//!   which has no such field); Paid-up always supplies its own
//!   `srn_of_pas3`.
//!
//! The provenance (`TrancheSource`) is persisted alongside the copied
//! fields so a later edit can distinguish derived tranches from
//! independently entered ones.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ─── Vocabularies ────────────────────────────────────────────────────

/// Class of capital a tranche declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapitalType {
    Equity,
    Preference,
    Other,
}

impl CapitalType {
    /// The snake_case string identifier for this capital type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equity => "equity",
            Self::Preference => "preference",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for CapitalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode under which shares in a tranche were acquired or declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapitalMode {
    Incorporation,
    Allotment,
    Transfer,
    Transmission,
    Bonus,
    Conversion,
    Split,
    Consolidation,
    BuyBack,
    Other,
}

impl CapitalMode {
    /// All modes in declaration order.
    pub fn all() -> &'static [CapitalMode] {
        &[
            Self::Incorporation,
            Self::Allotment,
            Self::Transfer,
            Self::Transmission,
            Self::Bonus,
            Self::Conversion,
            Self::Split,
            Self::Consolidation,
            Self::BuyBack,
            Self::Other,
        ]
    }

    /// The snake_case string identifier for this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incorporation => "incorporation",
            Self::Allotment => "allotment",
            Self::Transfer => "transfer",
            Self::Transmission => "transmission",
            Self::Bonus => "bonus",
            Self::Conversion => "conversion",
            Self::Split => "split",
            Self::Consolidation => "consolidation",
            Self::BuyBack => "buy_back",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for CapitalMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a tranche's fields were entered independently or copied from
/// the previous tranche at input time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrancheSource {
    /// Fields were entered on the tranche's own step.
    Independent,
    /// Fields are a snapshot copy of the previous tranche.
    SameAsPrevious,
}

// ─── Shared tranche fields ───────────────────────────────────────────

/// The field set every tranche carries and the carry-forward copies
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrancheFields {
    /// Equity / preference / other.
    pub capital_type: CapitalType,
    /// Free-text description of the tranche.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Date of the declaration or event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Acquisition mode.
    pub mode: CapitalMode,
    /// Number of shares in the tranche.
    pub number_of_shares: u64,
    /// Nominal (face) value per share.
    pub nominal_value_per_share: f64,
    /// Premium (positive) or discount (negative) per share.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_or_discount_per_share: Option<f64>,
}

// ─── Tranches ────────────────────────────────────────────────────────

/// The authorized-capital tranche. Head of the chain, always entered
/// independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizedCapital {
    /// Tranche fields.
    pub fields: TrancheFields,
}

/// The issued-capital tranche. Always entered independently; it is the
/// first tranche a later one may copy from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedCapital {
    /// Tranche fields.
    pub fields: TrancheFields,
}

/// The subscribed-capital tranche.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribedCapital {
    /// Provenance of the fields.
    pub source: TrancheSource,
    /// Tranche fields (copied from Issued when `source` is
    /// `SameAsPrevious`).
    pub fields: TrancheFields,
}

/// The called-up-capital tranche.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalledUpCapital {
    /// Provenance of the fields.
    pub source: TrancheSource,
    /// Tranche fields (copied from Subscribed when `source` is
    /// `SameAsPrevious`).
    pub fields: TrancheFields,
    /// Amount called up per share. Tranche-specific: supplied on this
    /// step even when the rest is copied.
    pub amount_called_up_per_share: f64,
}

/// The paid-up-capital tranche. Tail of the chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaidUpCapital {
    /// Provenance of the fields.
    pub source: TrancheSource,
    /// Tranche fields (copied from Called-up when `source` is
    /// `SameAsPrevious`).
    pub fields: TrancheFields,
    /// Amount paid up per share. When derived, this is the renamed copy
    /// of the Called-up tranche's `amount_called_up_per_share`.
    pub amount_paid_up_per_share: f64,
    /// SRN of the PAS-3 filing. Tranche-specific: supplied on this step
    /// even when the rest is copied.
    pub srn_of_pas3: String,
}

// ─── Builder inputs ──────────────────────────────────────────────────

/// Input to the Subscribed step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source")]
pub enum SubscribedInput {
    /// Copy everything from the Issued tranche.
    SameAsIssued,
    /// Enter the tranche independently.
    Independent {
        /// Tranche fields as entered.
        fields: TrancheFields,
    },
}

/// Input to the Called-up step.
///
/// The per-share called-up amount is supplied either way: Subscribed has
/// no such field to copy from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source")]
pub enum CalledUpInput {
    /// Copy the shared fields from the Subscribed tranche.
    SameAsSubscribed {
        /// Amount called up per share.
        amount_called_up_per_share: f64,
    },
    /// Enter the tranche independently.
    Independent {
        /// Tranche fields as entered.
        fields: TrancheFields,
        /// Amount called up per share.
        amount_called_up_per_share: f64,
    },
}

/// Input to the Paid-up step.
///
/// The SRN of the PAS-3 filing is supplied either way; the per-share
/// paid-up amount is the renamed copy of the called-up amount when
/// deriving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "source")]
pub enum PaidUpInput {
    /// Copy the shared fields from the Called-up tranche and rename its
    /// per-share amount.
    SameAsCalledUp {
        /// SRN of the PAS-3 filing.
        srn_of_pas3: String,
    },
    /// Enter the tranche independently.
    Independent {
        /// Tranche fields as entered.
        fields: TrancheFields,
        /// Amount paid up per share.
        amount_paid_up_per_share: f64,
        /// SRN of the PAS-3 filing.
        srn_of_pas3: String,
    },
}

// ─── Builders ────────────────────────────────────────────────────────

impl SubscribedCapital {
    /// Build the Subscribed tranche from its step input, snapshotting the
    /// Issued tranche when derived.
    pub fn build(issued: &IssuedCapital, input: SubscribedInput) -> Self {
        match input {
            SubscribedInput::SameAsIssued => Self {
                source: TrancheSource::SameAsPrevious,
                fields: issued.fields.clone(),
            },
            SubscribedInput::Independent { fields } => Self {
                source: TrancheSource::Independent,
                fields,
            },
        }
    }
}

impl CalledUpCapital {
    /// Build the Called-up tranche from its step input, snapshotting the
    /// Subscribed tranche when derived. The called-up amount is always
    /// taken from the input.
    pub fn build(subscribed: &SubscribedCapital, input: CalledUpInput) -> Self {
        match input {
            CalledUpInput::SameAsSubscribed {
                amount_called_up_per_share,
            } => Self {
                source: TrancheSource::SameAsPrevious,
                fields: subscribed.fields.clone(),
                amount_called_up_per_share,
            },
            CalledUpInput::Independent {
                fields,
                amount_called_up_per_share,
            } => Self {
                source: TrancheSource::Independent,
                fields,
                amount_called_up_per_share,
            },
        }
    }
}

impl PaidUpCapital {
    /// Build the Paid-up tranche from its step input. When derived, the
    /// shared fields snapshot the Called-up tranche and
    /// `amount_called_up_per_share` carries over renamed as
    /// `amount_paid_up_per_share`. The SRN is always taken from the
    /// input.
    pub fn build(called_up: &CalledUpCapital, input: PaidUpInput) -> Self {
        match input {
            PaidUpInput::SameAsCalledUp { srn_of_pas3 } => Self {
                source: TrancheSource::SameAsPrevious,
                fields: called_up.fields.clone(),
                amount_paid_up_per_share: called_up.amount_called_up_per_share,
                srn_of_pas3,
            },
            PaidUpInput::Independent {
                fields,
                amount_paid_up_per_share,
                srn_of_pas3,
            } => Self {
                source: TrancheSource::Independent,
                fields,
                amount_paid_up_per_share,
                srn_of_pas3,
            },
        }
    }
}
