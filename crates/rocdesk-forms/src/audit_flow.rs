//! # Audit Wizard
//!
//! Four steps:
//!
//! 1. **Auditor** — name, type and professional identifiers.
//! 2. **Office address** — the auditor's office address.
//! 3. **Appointment** — appointment window; date of appointment is the
//!    one hard-required date in the system, cessation and its reason are
//!    optional.
//! 4. **Financials** — snapshot amounts entered as free text. Blank
//!    means unsupplied (persisted as absent, never zero); non-blank text
//!    must be numeric, with commas tolerated.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rocdesk_core::{parse_amount, Address, AuditId, CompanyId};
use rocdesk_model::{Audit, AuditorType, CessationType, FinancialSnapshot};

use crate::error::FieldErrors;
use crate::rules;
use crate::wizard::{WizardError, WizardFlow};

// ─── Step forms ──────────────────────────────────────────────────────

/// Step 1: the auditor and their professional identifiers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditorForm {
    pub company_id: CompanyId,
    pub auditor_name: String,
    pub auditor_type: AuditorType,
    #[serde(default)]
    pub firm_registration_number: Option<String>,
    #[serde(default)]
    pub membership_number: Option<String>,
    #[serde(default)]
    pub pan_of_firm: Option<String>,
    #[serde(default)]
    pub pan_of_signing_partner: Option<String>,
}

impl AuditorForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        rules::require(&mut errors, "auditor_name", &self.auditor_name);
        rules::parse_optional_pan(&mut errors, "pan_of_firm", &self.pan_of_firm);
        rules::parse_optional_pan(
            &mut errors,
            "pan_of_signing_partner",
            &self.pan_of_signing_partner,
        );
        errors.into_result()
    }
}

/// Step 2: office address.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OfficeAddressForm {
    pub address: Address,
}

impl OfficeAddressForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        rules::require_address(&mut errors, "address", &self.address);
        errors.into_result()
    }
}

/// Step 3: appointment window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentForm {
    #[serde(default)]
    pub date_of_appointment: Option<NaiveDate>,
    #[serde(default)]
    pub date_of_cessation: Option<NaiveDate>,
    #[serde(default)]
    pub cessation_type: Option<CessationType>,
}

impl AppointmentForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.date_of_appointment.is_none() {
            errors.push("date_of_appointment", "is required");
        }
        if self.cessation_type.is_some() && self.date_of_cessation.is_none() {
            errors.push(
                "date_of_cessation",
                "is required when a cessation type is given",
            );
        }
        if let (Some(appointed), Some(ceased)) = (self.date_of_appointment, self.date_of_cessation)
        {
            if ceased < appointed {
                errors.push("date_of_cessation", "must not precede the appointment date");
            }
        }
        errors.into_result()
    }
}

/// Step 4: financial snapshot, all amounts as entered text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialsForm {
    #[serde(default)]
    pub paid_up_capital: String,
    #[serde(default)]
    pub reserves_and_surplus: String,
    #[serde(default)]
    pub net_worth: String,
    #[serde(default)]
    pub net_profit_or_loss: String,
    #[serde(default)]
    pub borrowings: String,
    #[serde(default)]
    pub turnover: String,
}

impl FinancialsForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        rules::check_amount(&mut errors, "paid_up_capital", &self.paid_up_capital);
        rules::check_amount(&mut errors, "reserves_and_surplus", &self.reserves_and_surplus);
        rules::check_amount(&mut errors, "net_worth", &self.net_worth);
        rules::check_amount(&mut errors, "net_profit_or_loss", &self.net_profit_or_loss);
        rules::check_amount(&mut errors, "borrowings", &self.borrowings);
        rules::check_amount(&mut errors, "turnover", &self.turnover);
        errors.into_result()
    }

    /// Coerce the validated text fields to the persisted snapshot. Runs
    /// after validation, so failed parses collapse to unsupplied.
    fn to_snapshot(&self) -> FinancialSnapshot {
        FinancialSnapshot {
            paid_up_capital: parse_amount(&self.paid_up_capital).unwrap_or(None),
            reserves_and_surplus: parse_amount(&self.reserves_and_surplus).unwrap_or(None),
            net_worth: parse_amount(&self.net_worth).unwrap_or(None),
            net_profit_or_loss: parse_amount(&self.net_profit_or_loss).unwrap_or(None),
            borrowings: parse_amount(&self.borrowings).unwrap_or(None),
            turnover: parse_amount(&self.turnover).unwrap_or(None),
        }
    }
}

// ─── Flow ────────────────────────────────────────────────────────────

/// One step payload of the audit wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum AuditStep {
    Auditor(AuditorForm),
    OfficeAddress(OfficeAddressForm),
    Appointment(AppointmentForm),
    Financials(FinancialsForm),
}

/// Accumulated audit wizard state.
#[derive(Debug, Clone, Default)]
pub struct AuditDraft {
    auditor: Option<AuditorForm>,
    address: Option<OfficeAddressForm>,
    appointment: Option<AppointmentForm>,
    financials: Option<FinancialsForm>,
}

/// The audit wizard flow.
pub struct AuditFlow;

fn amount_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl AuditFlow {
    /// Map a stored record back into a draft for edit.
    pub fn draft_from(audit: &Audit) -> AuditDraft {
        AuditDraft {
            auditor: Some(AuditorForm {
                company_id: audit.company_id,
                auditor_name: audit.auditor_name.clone(),
                auditor_type: audit.auditor_type,
                firm_registration_number: audit.firm_registration_number.clone(),
                membership_number: audit.membership_number.clone(),
                pan_of_firm: audit.pan_of_firm.as_ref().map(|p| p.as_str().to_string()),
                pan_of_signing_partner: audit
                    .pan_of_signing_partner
                    .as_ref()
                    .map(|p| p.as_str().to_string()),
            }),
            address: Some(OfficeAddressForm {
                address: audit.address.clone(),
            }),
            appointment: Some(AppointmentForm {
                date_of_appointment: Some(audit.date_of_appointment),
                date_of_cessation: audit.date_of_cessation,
                cessation_type: audit.cessation_type,
            }),
            financials: Some(FinancialsForm {
                paid_up_capital: amount_text(audit.financials.paid_up_capital),
                reserves_and_surplus: amount_text(audit.financials.reserves_and_surplus),
                net_worth: amount_text(audit.financials.net_worth),
                net_profit_or_loss: amount_text(audit.financials.net_profit_or_loss),
                borrowings: amount_text(audit.financials.borrowings),
                turnover: amount_text(audit.financials.turnover),
            }),
        }
    }
}

impl WizardFlow for AuditFlow {
    type Draft = AuditDraft;
    type Step = AuditStep;
    type Output = Audit;

    const STEP_COUNT: usize = 4;

    fn step_index(step: &Self::Step) -> usize {
        match step {
            AuditStep::Auditor(_) => 1,
            AuditStep::OfficeAddress(_) => 2,
            AuditStep::Appointment(_) => 3,
            AuditStep::Financials(_) => 4,
        }
    }

    fn validate(_draft: &Self::Draft, step: &Self::Step) -> Result<(), FieldErrors> {
        match step {
            AuditStep::Auditor(form) => form.validate(),
            AuditStep::OfficeAddress(form) => form.validate(),
            AuditStep::Appointment(form) => form.validate(),
            AuditStep::Financials(form) => form.validate(),
        }
    }

    fn apply(draft: &mut Self::Draft, step: Self::Step) -> Result<(), WizardError> {
        match step {
            AuditStep::Auditor(form) => draft.auditor = Some(form),
            AuditStep::OfficeAddress(form) => draft.address = Some(form),
            AuditStep::Appointment(form) => draft.appointment = Some(form),
            AuditStep::Financials(form) => draft.financials = Some(form),
        }
        Ok(())
    }

    fn finish(draft: Self::Draft) -> Result<Self::Output, WizardError> {
        let auditor = draft.auditor.ok_or(WizardError::Incomplete("auditor"))?;
        let address = draft.address.ok_or(WizardError::Incomplete("office address"))?;
        let appointment = draft
            .appointment
            .ok_or(WizardError::Incomplete("appointment"))?;
        let financials = draft.financials.unwrap_or_default();

        let mut errors = FieldErrors::new();
        let pan_of_firm = rules::parse_optional_pan(&mut errors, "pan_of_firm", &auditor.pan_of_firm);
        let pan_of_signing_partner = rules::parse_optional_pan(
            &mut errors,
            "pan_of_signing_partner",
            &auditor.pan_of_signing_partner,
        );
        errors.into_result()?;

        let date_of_appointment = appointment
            .date_of_appointment
            .ok_or(WizardError::Incomplete("date of appointment"))?;

        let now = Utc::now();
        Ok(Audit {
            id: AuditId::new(),
            company_id: auditor.company_id,
            auditor_name: auditor.auditor_name.trim().to_string(),
            auditor_type: auditor.auditor_type,
            address: address.address,
            date_of_appointment,
            date_of_cessation: appointment.date_of_cessation,
            cessation_type: appointment.cessation_type,
            firm_registration_number: auditor
                .firm_registration_number
                .filter(|v| !v.trim().is_empty()),
            membership_number: auditor.membership_number.filter(|v| !v.trim().is_empty()),
            pan_of_firm,
            pan_of_signing_partner,
            financials: financials.to_snapshot(),
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{Wizard, WizardOutcome};

    fn auditor() -> AuditorForm {
        AuditorForm {
            company_id: CompanyId::new(),
            auditor_name: "S R Vaidya & Associates".to_string(),
            auditor_type: AuditorType::Firm,
            firm_registration_number: Some("104835W".to_string()),
            membership_number: None,
            pan_of_firm: Some("AAEFS1206Q".to_string()),
            pan_of_signing_partner: None,
        }
    }

    fn office() -> OfficeAddressForm {
        OfficeAddressForm {
            address: Address {
                line1: "201 Fort Chambers".to_string(),
                line2: None,
                city: "Mumbai".to_string(),
                state: "Maharashtra".to_string(),
                pin_code: "400001".to_string(),
                country: "India".to_string(),
            },
        }
    }

    #[test]
    fn test_appointment_date_is_required() {
        let form = AppointmentForm::default();
        let errors = form.validate().unwrap_err();
        assert!(errors.has_field("date_of_appointment"));
    }

    #[test]
    fn test_cessation_before_appointment_rejected() {
        let form = AppointmentForm {
            date_of_appointment: NaiveDate::from_ymd_opt(2024, 9, 30),
            date_of_cessation: NaiveDate::from_ymd_opt(2023, 3, 31),
            cessation_type: Some(CessationType::Resignation),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has_field("date_of_cessation"));
    }

    #[test]
    fn test_cessation_type_needs_cessation_date() {
        let form = AppointmentForm {
            date_of_appointment: NaiveDate::from_ymd_opt(2024, 9, 30),
            date_of_cessation: None,
            cessation_type: Some(CessationType::Removal),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has_field("date_of_cessation"));
    }

    #[test]
    fn test_financials_blank_fields_are_unsupplied() {
        let form = FinancialsForm {
            paid_up_capital: "25,00,000".to_string(),
            ..FinancialsForm::default()
        };
        assert!(form.validate().is_ok());
        let snapshot = form.to_snapshot();
        assert_eq!(snapshot.paid_up_capital, Some(2_500_000.0));
        assert_eq!(snapshot.net_worth, None);
        assert_eq!(snapshot.turnover, None);
    }

    #[test]
    fn test_financials_reject_non_numeric_text() {
        let form = FinancialsForm {
            turnover: "eight crore".to_string(),
            ..FinancialsForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has_field("turnover"));
    }

    #[test]
    fn test_full_wizard_builds_audit() {
        let company_id = auditor().company_id;
        let mut wizard: Wizard<AuditFlow> = Wizard::new();
        let mut first = auditor();
        first.company_id = company_id;
        wizard.next(AuditStep::Auditor(first)).unwrap();
        wizard.next(AuditStep::OfficeAddress(office())).unwrap();
        wizard
            .next(AuditStep::Appointment(AppointmentForm {
                date_of_appointment: NaiveDate::from_ymd_opt(2024, 9, 30),
                date_of_cessation: None,
                cessation_type: None,
            }))
            .unwrap();
        let audit = match wizard
            .next(AuditStep::Financials(FinancialsForm {
                turnover: "84000000".to_string(),
                ..FinancialsForm::default()
            }))
            .unwrap()
        {
            WizardOutcome::Submitted(audit) => audit,
            other => panic!("expected Submitted, got {other:?}"),
        };

        assert_eq!(audit.company_id, company_id);
        assert_eq!(audit.auditor_type, AuditorType::Firm);
        assert_eq!(
            audit.date_of_appointment,
            NaiveDate::from_ymd_opt(2024, 9, 30).unwrap()
        );
        assert_eq!(audit.financials.turnover, Some(84_000_000.0));
        assert_eq!(audit.financials.borrowings, None);
    }

    #[test]
    fn test_edit_draft_roundtrips_financial_text() {
        let mut wizard: Wizard<AuditFlow> = Wizard::new();
        wizard.next(AuditStep::Auditor(auditor())).unwrap();
        wizard.next(AuditStep::OfficeAddress(office())).unwrap();
        wizard
            .next(AuditStep::Appointment(AppointmentForm {
                date_of_appointment: NaiveDate::from_ymd_opt(2024, 9, 30),
                ..AppointmentForm::default()
            }))
            .unwrap();
        let audit = match wizard
            .next(AuditStep::Financials(FinancialsForm {
                net_worth: "1500000".to_string(),
                ..FinancialsForm::default()
            }))
            .unwrap()
        {
            WizardOutcome::Submitted(audit) => audit,
            other => panic!("expected Submitted, got {other:?}"),
        };

        let draft = AuditFlow::draft_from(&audit);
        let financials = draft.financials.unwrap();
        assert_eq!(financials.net_worth, "1500000");
        assert_eq!(financials.turnover, "");
    }
}
