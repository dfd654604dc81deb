//! # Audit Record
//!
//! One audit engagement: who audits which company, over what appointment
//! window, with the professional identifiers of the auditor and a
//! financial snapshot of the audited period.
//!
//! The snapshot amounts are entered as free text on the financials wizard
//! step and coerced to numbers (or left unsupplied) before the record is
//! persisted, so they are plain `Option<f64>` here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rocdesk_core::{Address, AuditId, CompanyId, Pan};

// ─── Vocabularies ────────────────────────────────────────────────────

/// Classification of the appointed auditor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditorType {
    /// A practicing individual.
    Individual,
    /// An audit firm.
    Firm,
    /// A limited liability partnership.
    Llp,
    /// A partnership.
    Partnership,
}

impl AuditorType {
    /// The snake_case string identifier for this auditor type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Firm => "firm",
            Self::Llp => "llp",
            Self::Partnership => "partnership",
        }
    }
}

impl std::fmt::Display for AuditorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an auditor ceased, when a cessation date is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CessationType {
    Resignation,
    Removal,
    Death,
    Disqualification,
    TermCompleted,
    Other,
}

impl CessationType {
    /// The snake_case string identifier for this cessation type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resignation => "resignation",
            Self::Removal => "removal",
            Self::Death => "death",
            Self::Disqualification => "disqualification",
            Self::TermCompleted => "term_completed",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for CessationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Financial snapshot ──────────────────────────────────────────────

/// Financial figures for the audited period. All optional: blank form
/// fields persist as unsupplied, never as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid_up_capital: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reserves_and_surplus: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_worth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_profit_or_loss: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borrowings: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turnover: Option<f64>,
}

// ─── Audit ───────────────────────────────────────────────────────────

/// An audit engagement record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Audit {
    /// Store-assigned identity.
    pub id: AuditId,
    /// The audited company (weak reference; may dangle after a company
    /// delete).
    pub company_id: CompanyId,
    /// Name of the auditor or firm.
    pub auditor_name: String,
    /// Classification of the auditor.
    pub auditor_type: AuditorType,
    /// Office address of the auditor.
    pub address: Address,
    /// Date of appointment. Required.
    pub date_of_appointment: NaiveDate,
    /// Date of cessation, if the engagement has ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_cessation: Option<NaiveDate>,
    /// Why the engagement ended; only meaningful with a cessation date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cessation_type: Option<CessationType>,
    /// Firm registration number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firm_registration_number: Option<String>,
    /// Membership number of the individual auditor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub membership_number: Option<String>,
    /// PAN of the firm.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_of_firm: Option<Pan>,
    /// PAN of the signing partner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_of_signing_partner: Option<Pan>,
    /// Financial snapshot for the audited period.
    #[serde(default)]
    pub financials: FinancialSnapshot,
    /// Set by the store at creation.
    pub created_at: DateTime<Utc>,
    /// Set by the store on every successful write.
    pub updated_at: DateTime<Utc>,
}

/// Shallow-merge patch for [`Audit`]. Absent fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditPatch {
    pub company_id: Option<CompanyId>,
    pub auditor_name: Option<String>,
    pub auditor_type: Option<AuditorType>,
    pub address: Option<Address>,
    pub date_of_appointment: Option<NaiveDate>,
    pub date_of_cessation: Option<NaiveDate>,
    pub cessation_type: Option<CessationType>,
    pub firm_registration_number: Option<String>,
    pub membership_number: Option<String>,
    pub pan_of_firm: Option<Pan>,
    pub pan_of_signing_partner: Option<Pan>,
    pub financials: Option<FinancialSnapshot>,
}

impl Audit {
    /// Apply a shallow merge: every present patch field overwrites the
    /// stored value.
    pub fn apply_patch(&mut self, patch: AuditPatch) {
        let AuditPatch {
            company_id,
            auditor_name,
            auditor_type,
            address,
            date_of_appointment,
            date_of_cessation,
            cessation_type,
            firm_registration_number,
            membership_number,
            pan_of_firm,
            pan_of_signing_partner,
            financials,
        } = patch;
        if let Some(v) = company_id {
            self.company_id = v;
        }
        if let Some(v) = auditor_name {
            self.auditor_name = v;
        }
        if let Some(v) = auditor_type {
            self.auditor_type = v;
        }
        if let Some(v) = address {
            self.address = v;
        }
        if let Some(v) = date_of_appointment {
            self.date_of_appointment = v;
        }
        if let Some(v) = date_of_cessation {
            self.date_of_cessation = Some(v);
        }
        if let Some(v) = cessation_type {
            self.cessation_type = Some(v);
        }
        if let Some(v) = firm_registration_number {
            self.firm_registration_number = Some(v);
        }
        if let Some(v) = membership_number {
            self.membership_number = Some(v);
        }
        if let Some(v) = pan_of_firm {
            self.pan_of_firm = Some(v);
        }
        if let Some(v) = pan_of_signing_partner {
            self.pan_of_signing_partner = Some(v);
        }
        if let Some(v) = financials {
            self.financials = v;
        }
    }
}

impl From<Audit> for AuditPatch {
    /// Full-field patch used when a wizard edit re-submits the whole
    /// record through `update`.
    fn from(a: Audit) -> Self {
        Self {
            company_id: Some(a.company_id),
            auditor_name: Some(a.auditor_name),
            auditor_type: Some(a.auditor_type),
            address: Some(a.address),
            date_of_appointment: Some(a.date_of_appointment),
            date_of_cessation: a.date_of_cessation,
            cessation_type: a.cessation_type,
            firm_registration_number: a.firm_registration_number,
            membership_number: a.membership_number,
            pan_of_firm: a.pan_of_firm,
            pan_of_signing_partner: a.pan_of_signing_partner,
            financials: Some(a.financials),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_audit() -> Audit {
        Audit {
            id: AuditId::new(),
            company_id: CompanyId::new(),
            auditor_name: "S R Vaidya & Associates".to_string(),
            auditor_type: AuditorType::Firm,
            address: Address {
                line1: "201 Fort Chambers".to_string(),
                line2: None,
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
                pin_code: "400001".to_string(),
                country: "India".to_string(),
            },
            date_of_appointment: NaiveDate::from_ymd_opt(2024, 9, 30).unwrap(),
            date_of_cessation: None,
            cessation_type: None,
            firm_registration_number: Some("104835W".to_string()),
            membership_number: None,
            pan_of_firm: Some(Pan::parse("AAEFS1206Q").unwrap()),
            pan_of_signing_partner: None,
            financials: FinancialSnapshot {
                paid_up_capital: Some(2_500_000.0),
                turnover: Some(84_000_000.0),
                ..FinancialSnapshot::default()
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let audit = sample_audit();
        let json = serde_json::to_string(&audit).unwrap();
        let parsed: Audit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, audit);
    }

    #[test]
    fn test_auditor_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&AuditorType::Llp).unwrap(),
            "\"llp\""
        );
        assert_eq!(
            serde_json::to_string(&CessationType::TermCompleted).unwrap(),
            "\"term_completed\""
        );
    }

    #[test]
    fn test_unsupplied_financials_stay_none() {
        let audit = sample_audit();
        let value = serde_json::to_value(&audit).unwrap();
        // Blank amounts are absent from the payload, not zero.
        assert!(value["financials"].get("net_worth").is_none());
        assert_eq!(value["financials"]["paid_up_capital"], 2_500_000.0);
    }

    #[test]
    fn test_patch_is_idempotent() {
        let mut once = sample_audit();
        let mut twice = once.clone();
        let patch = AuditPatch {
            date_of_cessation: NaiveDate::from_ymd_opt(2026, 3, 31),
            cessation_type: Some(CessationType::TermCompleted),
            ..AuditPatch::default()
        };
        once.apply_patch(patch.clone());
        twice.apply_patch(patch.clone());
        twice.apply_patch(patch);
        assert_eq!(once, twice);
    }
}
