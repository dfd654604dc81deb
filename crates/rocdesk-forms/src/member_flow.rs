//! # Share-Capital Member Wizard
//!
//! Seven steps:
//!
//! 1. **Details** — member status, name, contact, PAN, flags.
//! 2. **Authorized capital** — tranche fields, always independent.
//! 3. **Issued capital** — tranche fields, always independent.
//! 4. **Subscribed capital** — independent fields or same-as-issued.
//! 5. **Called-up capital** — independent or same-as-subscribed; the
//!    per-share called-up amount is supplied either way.
//! 6. **Paid-up capital** — independent or same-as-called-up; the PAS-3
//!    SRN is supplied either way and is required.
//! 7. **Holdings** — optional equity and preference holding details.
//!
//! The same-as-previous carry-forward runs at apply time through the
//! tranche builders, so each derived tranche snapshots its predecessor
//! as it stood when the step was submitted. Going back and re-saving an
//! earlier tranche does not reach forward into tranches already derived
//! from it.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use rocdesk_core::MemberId;
use rocdesk_model::{
    AuthorizedCapital, CalledUpCapital, CalledUpInput, HoldingDetails, IssuedCapital,
    MemberDetails, PaidUpCapital, PaidUpInput, ShareCapitalMember, SubscribedCapital,
    SubscribedInput, TrancheFields,
};

use crate::error::FieldErrors;
use crate::rules;
use crate::wizard::{WizardError, WizardFlow};

// ─── Step forms ──────────────────────────────────────────────────────

/// Step 1: personal details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberDetailsForm {
    pub status: String,
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub pan: Option<String>,
    pub nationality: String,
    #[serde(default)]
    pub is_minor: bool,
    #[serde(default)]
    pub has_nomination: bool,
}

impl MemberDetailsForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        rules::require(&mut errors, "status", &self.status);
        rules::require(&mut errors, "first_name", &self.first_name);
        rules::require(&mut errors, "last_name", &self.last_name);
        rules::require_email(&mut errors, "email", &self.email);
        rules::require_phone(&mut errors, "phone", &self.phone);
        rules::parse_optional_pan(&mut errors, "pan", &self.pan);
        rules::require(&mut errors, "nationality", &self.nationality);
        errors.into_result()
    }
}

fn check_tranche_fields(errors: &mut FieldErrors, fields: &TrancheFields) {
    if fields.number_of_shares == 0 {
        errors.push("number_of_shares", "must be at least 1");
    }
    if fields.nominal_value_per_share <= 0.0 {
        errors.push("nominal_value_per_share", "must be positive");
    }
}

fn check_per_share_amount(errors: &mut FieldErrors, field: &str, amount: f64) {
    if amount < 0.0 {
        errors.push(field, "must not be negative");
    }
}

fn check_holding(errors: &mut FieldErrors, prefix: &str, holding: &HoldingDetails) {
    // Demat holdings need both halves of the depository reference.
    if holding.dp_id.is_some() != holding.client_id.is_some() {
        errors.push(
            format!("{prefix}.dp_id"),
            "DP id and client id must be supplied together",
        );
    }
    if holding.demat_shares > 0 && holding.dp_id.is_none() {
        errors.push(
            format!("{prefix}.demat_shares"),
            "demat shares require a depository reference",
        );
    }
}

/// Step 7: equity and preference holding details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoldingsForm {
    #[serde(default)]
    pub equity: Option<HoldingDetails>,
    #[serde(default)]
    pub preference: Option<HoldingDetails>,
}

impl HoldingsForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Some(equity) = &self.equity {
            check_holding(&mut errors, "equity", equity);
        }
        if let Some(preference) = &self.preference {
            check_holding(&mut errors, "preference", preference);
        }
        errors.into_result()
    }
}

// ─── Flow ────────────────────────────────────────────────────────────

/// One step payload of the member wizard. The tranche steps take the
/// builder inputs directly; derivation happens at apply time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum MemberStep {
    Details(MemberDetailsForm),
    Authorized(TrancheFields),
    Issued(TrancheFields),
    Subscribed(SubscribedInput),
    CalledUp(CalledUpInput),
    PaidUp(PaidUpInput),
    Holdings(HoldingsForm),
}

/// Accumulated member wizard state. Tranches are stored already built:
/// the carry-forward snapshot is taken when the step applies, not when
/// the wizard finishes.
#[derive(Debug, Clone, Default)]
pub struct MemberDraft {
    details: Option<MemberDetailsForm>,
    authorized: Option<AuthorizedCapital>,
    issued: Option<IssuedCapital>,
    subscribed: Option<SubscribedCapital>,
    called_up: Option<CalledUpCapital>,
    paid_up: Option<PaidUpCapital>,
    holdings: Option<HoldingsForm>,
}

/// The member wizard flow.
pub struct MemberFlow;

impl MemberFlow {
    /// Map a stored record back into a draft for edit. Tranches come
    /// back as built, source tag included, so re-submitting only the
    /// steps being changed keeps the rest untouched.
    pub fn draft_from(member: &ShareCapitalMember) -> MemberDraft {
        MemberDraft {
            details: Some(MemberDetailsForm {
                status: member.details.status.clone(),
                first_name: member.details.first_name.clone(),
                middle_name: member.details.middle_name.clone(),
                last_name: member.details.last_name.clone(),
                email: member.details.contact.email.clone(),
                phone: member.details.contact.phone.clone(),
                pan: member.details.pan.as_ref().map(|p| p.as_str().to_string()),
                nationality: member.details.nationality.clone(),
                is_minor: member.details.is_minor,
                has_nomination: member.details.has_nomination,
            }),
            authorized: Some(member.authorized.clone()),
            issued: Some(member.issued.clone()),
            subscribed: Some(member.subscribed.clone()),
            called_up: Some(member.called_up.clone()),
            paid_up: Some(member.paid_up.clone()),
            holdings: Some(HoldingsForm {
                equity: member.equity.clone(),
                preference: member.preference.clone(),
            }),
        }
    }
}

impl WizardFlow for MemberFlow {
    type Draft = MemberDraft;
    type Step = MemberStep;
    type Output = ShareCapitalMember;

    const STEP_COUNT: usize = 7;

    fn step_index(step: &Self::Step) -> usize {
        match step {
            MemberStep::Details(_) => 1,
            MemberStep::Authorized(_) => 2,
            MemberStep::Issued(_) => 3,
            MemberStep::Subscribed(_) => 4,
            MemberStep::CalledUp(_) => 5,
            MemberStep::PaidUp(_) => 6,
            MemberStep::Holdings(_) => 7,
        }
    }

    fn validate(_draft: &Self::Draft, step: &Self::Step) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        match step {
            MemberStep::Details(form) => return form.validate(),
            MemberStep::Authorized(fields) | MemberStep::Issued(fields) => {
                check_tranche_fields(&mut errors, fields);
            }
            MemberStep::Subscribed(input) => {
                if let SubscribedInput::Independent { fields } = input {
                    check_tranche_fields(&mut errors, fields);
                }
            }
            MemberStep::CalledUp(input) => match input {
                CalledUpInput::SameAsSubscribed {
                    amount_called_up_per_share,
                } => {
                    check_per_share_amount(
                        &mut errors,
                        "amount_called_up_per_share",
                        *amount_called_up_per_share,
                    );
                }
                CalledUpInput::Independent {
                    fields,
                    amount_called_up_per_share,
                } => {
                    check_tranche_fields(&mut errors, fields);
                    check_per_share_amount(
                        &mut errors,
                        "amount_called_up_per_share",
                        *amount_called_up_per_share,
                    );
                }
            },
            MemberStep::PaidUp(input) => match input {
                PaidUpInput::SameAsCalledUp { srn_of_pas3 } => {
                    rules::require(&mut errors, "srn_of_pas3", srn_of_pas3);
                }
                PaidUpInput::Independent {
                    fields,
                    amount_paid_up_per_share,
                    srn_of_pas3,
                } => {
                    check_tranche_fields(&mut errors, fields);
                    check_per_share_amount(
                        &mut errors,
                        "amount_paid_up_per_share",
                        *amount_paid_up_per_share,
                    );
                    rules::require(&mut errors, "srn_of_pas3", srn_of_pas3);
                }
            },
            MemberStep::Holdings(form) => return form.validate(),
        }
        errors.into_result()
    }

    fn apply(draft: &mut Self::Draft, step: Self::Step) -> Result<(), WizardError> {
        match step {
            MemberStep::Details(form) => draft.details = Some(form),
            MemberStep::Authorized(fields) => {
                draft.authorized = Some(AuthorizedCapital { fields });
            }
            MemberStep::Issued(fields) => {
                draft.issued = Some(IssuedCapital { fields });
            }
            MemberStep::Subscribed(input) => {
                let issued = draft
                    .issued
                    .as_ref()
                    .ok_or(WizardError::Incomplete("issued capital"))?;
                draft.subscribed = Some(SubscribedCapital::build(issued, input));
            }
            MemberStep::CalledUp(input) => {
                let subscribed = draft
                    .subscribed
                    .as_ref()
                    .ok_or(WizardError::Incomplete("subscribed capital"))?;
                draft.called_up = Some(CalledUpCapital::build(subscribed, input));
            }
            MemberStep::PaidUp(input) => {
                let called_up = draft
                    .called_up
                    .as_ref()
                    .ok_or(WizardError::Incomplete("called-up capital"))?;
                draft.paid_up = Some(PaidUpCapital::build(called_up, input));
            }
            MemberStep::Holdings(form) => draft.holdings = Some(form),
        }
        Ok(())
    }

    fn finish(draft: Self::Draft) -> Result<Self::Output, WizardError> {
        let details = draft.details.ok_or(WizardError::Incomplete("member details"))?;
        let authorized = draft
            .authorized
            .ok_or(WizardError::Incomplete("authorized capital"))?;
        let issued = draft.issued.ok_or(WizardError::Incomplete("issued capital"))?;
        let subscribed = draft
            .subscribed
            .ok_or(WizardError::Incomplete("subscribed capital"))?;
        let called_up = draft
            .called_up
            .ok_or(WizardError::Incomplete("called-up capital"))?;
        let paid_up = draft
            .paid_up
            .ok_or(WizardError::Incomplete("paid-up capital"))?;
        let holdings = draft.holdings.unwrap_or_default();

        let mut errors = FieldErrors::new();
        let pan = rules::parse_optional_pan(&mut errors, "pan", &details.pan);
        errors.into_result()?;

        let now = Utc::now();
        Ok(ShareCapitalMember {
            id: MemberId::new(),
            details: MemberDetails {
                status: details.status.trim().to_string(),
                first_name: details.first_name.trim().to_string(),
                middle_name: details.middle_name.filter(|v| !v.trim().is_empty()),
                last_name: details.last_name.trim().to_string(),
                contact: rocdesk_core::Contact {
                    email: details.email.trim().to_string(),
                    phone: details.phone.trim().to_string(),
                },
                pan,
                nationality: details.nationality.trim().to_string(),
                is_minor: details.is_minor,
                has_nomination: details.has_nomination,
            },
            authorized,
            issued,
            subscribed,
            called_up,
            paid_up,
            equity: holdings.equity,
            preference: holdings.preference,
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{Wizard, WizardError, WizardOutcome};
    use chrono::NaiveDate;
    use rocdesk_model::{CapitalMode, CapitalType, TrancheSource};

    fn details() -> MemberDetailsForm {
        MemberDetailsForm {
            status: "Individual".to_string(),
            first_name: "Vikram".to_string(),
            middle_name: None,
            last_name: "Sethi".to_string(),
            email: "vikram.sethi@example.in".to_string(),
            phone: "9810012345".to_string(),
            pan: None,
            nationality: "Indian".to_string(),
            is_minor: false,
            has_nomination: true,
        }
    }

    fn tranche(shares: u64) -> TrancheFields {
        TrancheFields {
            capital_type: CapitalType::Equity,
            description: None,
            date: NaiveDate::from_ymd_opt(2023, 7, 1),
            mode: CapitalMode::Incorporation,
            number_of_shares: shares,
            nominal_value_per_share: 10.0,
            premium_or_discount_per_share: None,
        }
    }

    fn run_to_subscribed(wizard: &mut Wizard<MemberFlow>) {
        wizard.next(MemberStep::Details(details())).unwrap();
        wizard.next(MemberStep::Authorized(tranche(50_000))).unwrap();
        wizard.next(MemberStep::Issued(tranche(10_000))).unwrap();
    }

    #[test]
    fn test_zero_shares_rejected() {
        let wizard: Wizard<MemberFlow> = Wizard::new();
        let errors =
            MemberFlow::validate(wizard.draft(), &MemberStep::Authorized(tranche(0))).unwrap_err();
        assert!(errors.has_field("number_of_shares"));
    }

    #[test]
    fn test_paid_up_requires_srn_even_when_derived() {
        let wizard: Wizard<MemberFlow> = Wizard::new();
        let errors = MemberFlow::validate(
            wizard.draft(),
            &MemberStep::PaidUp(PaidUpInput::SameAsCalledUp {
                srn_of_pas3: "  ".to_string(),
            }),
        )
        .unwrap_err();
        assert!(errors.has_field("srn_of_pas3"));
    }

    #[test]
    fn test_holdings_demat_needs_depository_reference() {
        let form = HoldingsForm {
            equity: Some(HoldingDetails {
                demat_shares: 100,
                ..HoldingDetails::default()
            }),
            preference: None,
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has_field("equity.demat_shares"));
    }

    #[test]
    fn test_derived_tranche_snapshots_at_apply_time() {
        // Same-as-issued on step 4 copies the Issued tranche as it stood
        // then; going back and re-saving Issued must not propagate.
        let mut wizard: Wizard<MemberFlow> = Wizard::new();
        run_to_subscribed(&mut wizard);
        wizard
            .next(MemberStep::Subscribed(SubscribedInput::SameAsIssued))
            .unwrap();
        assert_eq!(wizard.draft().subscribed.as_ref().unwrap().fields.number_of_shares, 10_000);

        wizard.back();
        wizard.back();
        wizard.next(MemberStep::Issued(tranche(20_000))).unwrap();

        let subscribed = wizard.draft().subscribed.as_ref().unwrap();
        assert_eq!(subscribed.source, TrancheSource::SameAsPrevious);
        assert_eq!(subscribed.fields.number_of_shares, 10_000);
    }

    #[test]
    fn test_derived_apply_without_predecessor_is_incomplete() {
        let mut draft = MemberDraft::default();
        let err = MemberFlow::apply(
            &mut draft,
            MemberStep::Subscribed(SubscribedInput::SameAsIssued),
        )
        .unwrap_err();
        assert!(matches!(err, WizardError::Incomplete("issued capital")));
    }

    #[test]
    fn test_full_wizard_builds_member_with_carry_forward() {
        let mut wizard: Wizard<MemberFlow> = Wizard::new();
        run_to_subscribed(&mut wizard);
        wizard
            .next(MemberStep::Subscribed(SubscribedInput::SameAsIssued))
            .unwrap();
        wizard
            .next(MemberStep::CalledUp(CalledUpInput::SameAsSubscribed {
                amount_called_up_per_share: 10.0,
            }))
            .unwrap();
        wizard
            .next(MemberStep::PaidUp(PaidUpInput::SameAsCalledUp {
                srn_of_pas3: "T00481235".to_string(),
            }))
            .unwrap();
        let member = match wizard
            .next(MemberStep::Holdings(HoldingsForm {
                equity: Some(HoldingDetails {
                    folio_number: Some("F-0042".to_string()),
                    physical_shares: 1_000,
                    demat_shares: 0,
                    ..HoldingDetails::default()
                }),
                preference: None,
            }))
            .unwrap()
        {
            WizardOutcome::Submitted(member) => member,
            other => panic!("expected Submitted, got {other:?}"),
        };

        // Shared fields flowed Issued → Subscribed → Called-up → Paid-up;
        // the called-up amount carried over renamed.
        assert_eq!(member.paid_up.fields, member.issued.fields);
        assert_eq!(member.paid_up.amount_paid_up_per_share, 10.0);
        assert_eq!(member.paid_up.srn_of_pas3, "T00481235");
        assert_eq!(member.total_shares(), 1_000);
    }

    #[test]
    fn test_edit_draft_keeps_built_tranches() {
        let mut wizard: Wizard<MemberFlow> = Wizard::new();
        run_to_subscribed(&mut wizard);
        wizard
            .next(MemberStep::Subscribed(SubscribedInput::SameAsIssued))
            .unwrap();
        wizard
            .next(MemberStep::CalledUp(CalledUpInput::SameAsSubscribed {
                amount_called_up_per_share: 10.0,
            }))
            .unwrap();
        wizard
            .next(MemberStep::PaidUp(PaidUpInput::SameAsCalledUp {
                srn_of_pas3: "T00481235".to_string(),
            }))
            .unwrap();
        let member = match wizard
            .next(MemberStep::Holdings(HoldingsForm::default()))
            .unwrap()
        {
            WizardOutcome::Submitted(member) => member,
            other => panic!("expected Submitted, got {other:?}"),
        };

        let draft = MemberFlow::draft_from(&member);
        let subscribed = draft.subscribed.unwrap();
        assert_eq!(subscribed.source, TrancheSource::SameAsPrevious);
        assert_eq!(subscribed.fields, member.issued.fields);
    }
}
