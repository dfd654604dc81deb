//! # Director Wizard
//!
//! Five steps:
//!
//! 1. **Basic details** — name, designation taxonomy, contact.
//! 2. **Identification** — DIN, PAN, passport, driving license, aadhar.
//!    Cross-field rule: PAN is required unless a passport is supplied;
//!    the violation is keyed to `pan`.
//! 3. **Addresses** — present address always required; the permanent
//!    address is required unless declared same-as-present, in which case
//!    apply copies the present fields into the permanent fields. The
//!    copy is data, not a view: later edits to the present address leave
//!    the stored permanent address alone.
//! 4. **Entity interests** — gated by the has-interest flag; when the
//!    flag is set the list must be non-empty.
//! 5. **Company associations** — list of company references with
//!    designation and appointment window, replaced wholesale.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rocdesk_core::{Address, CompanyId, Contact, DirectorId};
use rocdesk_model::{CompanyAssociation, Director, EntityInterest};

use crate::error::FieldErrors;
use crate::rules;
use crate::wizard::{WizardError, WizardFlow};

// ─── Step forms ──────────────────────────────────────────────────────

/// Step 1: name, designation taxonomy and contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicDetailsForm {
    pub first_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub designation: String,
    pub category: String,
    pub subcategory: String,
    pub email: String,
    pub phone: String,
}

impl BasicDetailsForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        rules::require(&mut errors, "first_name", &self.first_name);
        rules::require(&mut errors, "last_name", &self.last_name);
        rules::require(&mut errors, "designation", &self.designation);
        rules::require(&mut errors, "category", &self.category);
        rules::require(&mut errors, "subcategory", &self.subcategory);
        rules::require_email(&mut errors, "email", &self.email);
        rules::require_phone(&mut errors, "phone", &self.phone);
        errors.into_result()
    }
}

/// Step 2: identity numbers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentificationForm {
    #[serde(default)]
    pub din: Option<String>,
    #[serde(default)]
    pub pan: Option<String>,
    #[serde(default)]
    pub passport_number: Option<String>,
    #[serde(default)]
    pub driving_license: Option<String>,
    #[serde(default)]
    pub aadhar: Option<String>,
}

impl IdentificationForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        // PAN is required unless a passport stands in for it.
        if rules::is_blank(&self.pan) && rules::is_blank(&self.passport_number) {
            errors.push("pan", "is required unless a passport number is supplied");
        } else {
            rules::parse_optional_pan(&mut errors, "pan", &self.pan);
        }
        errors.into_result()
    }
}

/// Step 3: present and permanent addresses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddressesForm {
    pub present: Address,
    #[serde(default)]
    pub permanent_same_as_present: bool,
    /// Ignored when `permanent_same_as_present` is set.
    #[serde(default)]
    pub permanent: Option<Address>,
}

impl AddressesForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        rules::require_address(&mut errors, "present", &self.present);
        if !self.permanent_same_as_present {
            match &self.permanent {
                Some(permanent) => rules::require_address(&mut errors, "permanent", permanent),
                None => errors.push(
                    "permanent",
                    "is required unless declared same as the present address",
                ),
            }
        }
        errors.into_result()
    }
}

/// One entity interest as entered on step 4.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterestForm {
    pub entity_name: String,
    #[serde(default)]
    pub registration_number: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub date_of_appointment: Option<NaiveDate>,
    #[serde(default)]
    pub date_of_cessation: Option<NaiveDate>,
    #[serde(default)]
    pub shareholding_percent: Option<f64>,
    #[serde(default)]
    pub shareholding_amount: Option<f64>,
}

/// Step 4: interests in other entities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterestsForm {
    #[serde(default)]
    pub has_interest_in_other_entities: bool,
    #[serde(default)]
    pub interests: Vec<InterestForm>,
}

impl InterestsForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if self.has_interest_in_other_entities && self.interests.is_empty() {
            errors.push(
                "interests",
                "at least one entity interest is required when the interest flag is set",
            );
        }
        for (i, interest) in self.interests.iter().enumerate() {
            rules::require(
                &mut errors,
                &format!("interests[{i}].entity_name"),
                &interest.entity_name,
            );
        }
        errors.into_result()
    }
}

/// One company association as entered on step 5.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssociationForm {
    pub company_id: CompanyId,
    pub designation: String,
    #[serde(default)]
    pub date_of_appointment: Option<NaiveDate>,
    #[serde(default)]
    pub date_of_cessation: Option<NaiveDate>,
}

/// Step 5: company associations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssociationsForm {
    #[serde(default)]
    pub associations: Vec<AssociationForm>,
}

impl AssociationsForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        for (i, association) in self.associations.iter().enumerate() {
            rules::require(
                &mut errors,
                &format!("associations[{i}].designation"),
                &association.designation,
            );
        }
        errors.into_result()
    }
}

// ─── Flow ────────────────────────────────────────────────────────────

/// One step payload of the director wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum DirectorStep {
    BasicDetails(BasicDetailsForm),
    Identification(IdentificationForm),
    Addresses(AddressesForm),
    Interests(InterestsForm),
    Associations(AssociationsForm),
}

/// Accumulated director wizard state.
#[derive(Debug, Clone, Default)]
pub struct DirectorDraft {
    basic: Option<BasicDetailsForm>,
    identification: Option<IdentificationForm>,
    addresses: Option<AddressesForm>,
    interests: Option<InterestsForm>,
    associations: Option<AssociationsForm>,
}

/// The director wizard flow.
pub struct DirectorFlow;

impl DirectorFlow {
    /// Map a stored record back into a draft for edit.
    pub fn draft_from(director: &Director) -> DirectorDraft {
        DirectorDraft {
            basic: Some(BasicDetailsForm {
                first_name: director.first_name.clone(),
                middle_name: director.middle_name.clone(),
                last_name: director.last_name.clone(),
                designation: director.designation.clone(),
                category: director.category.clone(),
                subcategory: director.subcategory.clone(),
                email: director.contact.email.clone(),
                phone: director.contact.phone.clone(),
            }),
            identification: Some(IdentificationForm {
                din: director.din.clone(),
                pan: director.pan.as_ref().map(|p| p.as_str().to_string()),
                passport_number: director.passport_number.clone(),
                driving_license: director.driving_license.clone(),
                aadhar: director.aadhar.clone(),
            }),
            addresses: Some(AddressesForm {
                present: director.present_address.clone(),
                permanent_same_as_present: director.permanent_same_as_present,
                permanent: Some(director.permanent_address.clone()),
            }),
            interests: Some(InterestsForm {
                has_interest_in_other_entities: director.has_interest_in_other_entities,
                interests: director
                    .entity_interests
                    .iter()
                    .map(|i| InterestForm {
                        entity_name: i.entity_name.clone(),
                        registration_number: i.registration_number.clone(),
                        designation: i.designation.clone(),
                        date_of_appointment: i.date_of_appointment,
                        date_of_cessation: i.date_of_cessation,
                        shareholding_percent: i.shareholding_percent,
                        shareholding_amount: i.shareholding_amount,
                    })
                    .collect(),
            }),
            associations: Some(AssociationsForm {
                associations: director
                    .associations
                    .iter()
                    .map(|a| AssociationForm {
                        company_id: a.company_id,
                        designation: a.designation.clone(),
                        date_of_appointment: a.date_of_appointment,
                        date_of_cessation: a.date_of_cessation,
                    })
                    .collect(),
            }),
        }
    }
}

impl WizardFlow for DirectorFlow {
    type Draft = DirectorDraft;
    type Step = DirectorStep;
    type Output = Director;

    const STEP_COUNT: usize = 5;

    fn step_index(step: &Self::Step) -> usize {
        match step {
            DirectorStep::BasicDetails(_) => 1,
            DirectorStep::Identification(_) => 2,
            DirectorStep::Addresses(_) => 3,
            DirectorStep::Interests(_) => 4,
            DirectorStep::Associations(_) => 5,
        }
    }

    fn validate(_draft: &Self::Draft, step: &Self::Step) -> Result<(), FieldErrors> {
        match step {
            DirectorStep::BasicDetails(form) => form.validate(),
            DirectorStep::Identification(form) => form.validate(),
            DirectorStep::Addresses(form) => form.validate(),
            DirectorStep::Interests(form) => form.validate(),
            DirectorStep::Associations(form) => form.validate(),
        }
    }

    fn apply(draft: &mut Self::Draft, step: Self::Step) -> Result<(), WizardError> {
        match step {
            DirectorStep::BasicDetails(form) => draft.basic = Some(form),
            DirectorStep::Identification(form) => draft.identification = Some(form),
            DirectorStep::Addresses(mut form) => {
                // Live copy at input time: the permanent address becomes
                // an independent duplicate of the present one.
                if form.permanent_same_as_present {
                    form.permanent = Some(form.present.clone());
                }
                draft.addresses = Some(form);
            }
            DirectorStep::Interests(form) => draft.interests = Some(form),
            DirectorStep::Associations(form) => draft.associations = Some(form),
        }
        Ok(())
    }

    fn finish(draft: Self::Draft) -> Result<Self::Output, WizardError> {
        let basic = draft.basic.ok_or(WizardError::Incomplete("basic details"))?;
        let identification = draft
            .identification
            .ok_or(WizardError::Incomplete("identification"))?;
        let addresses = draft.addresses.ok_or(WizardError::Incomplete("addresses"))?;
        let interests = draft.interests.unwrap_or_default();
        let associations = draft.associations.unwrap_or_default();

        let mut errors = FieldErrors::new();
        let pan = rules::parse_optional_pan(&mut errors, "pan", &identification.pan);
        errors.into_result()?;

        let permanent_address = addresses
            .permanent
            .ok_or(WizardError::Incomplete("permanent address"))?;

        let now = Utc::now();
        Ok(Director {
            id: DirectorId::new(),
            first_name: basic.first_name.trim().to_string(),
            middle_name: basic.middle_name.filter(|v| !v.trim().is_empty()),
            last_name: basic.last_name.trim().to_string(),
            designation: basic.designation,
            category: basic.category,
            subcategory: basic.subcategory,
            din: identification.din.filter(|v| !v.trim().is_empty()),
            pan,
            passport_number: identification.passport_number.filter(|v| !v.trim().is_empty()),
            driving_license: identification.driving_license.filter(|v| !v.trim().is_empty()),
            aadhar: identification.aadhar.filter(|v| !v.trim().is_empty()),
            contact: Contact {
                email: basic.email.trim().to_string(),
                phone: basic.phone.trim().to_string(),
            },
            present_address: addresses.present,
            permanent_same_as_present: addresses.permanent_same_as_present,
            permanent_address,
            has_interest_in_other_entities: interests.has_interest_in_other_entities,
            entity_interests: interests
                .interests
                .into_iter()
                .map(|i| EntityInterest {
                    entity_name: i.entity_name,
                    registration_number: i.registration_number,
                    designation: i.designation,
                    date_of_appointment: i.date_of_appointment,
                    date_of_cessation: i.date_of_cessation,
                    shareholding_percent: i.shareholding_percent,
                    shareholding_amount: i.shareholding_amount,
                })
                .collect(),
            associations: associations
                .associations
                .into_iter()
                .map(|a| CompanyAssociation {
                    company_id: a.company_id,
                    designation: a.designation,
                    date_of_appointment: a.date_of_appointment,
                    date_of_cessation: a.date_of_cessation,
                })
                .collect(),
            created_at: now,
            updated_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{Wizard, WizardError, WizardOutcome};

    fn basic() -> BasicDetailsForm {
        BasicDetailsForm {
            first_name: "Anita".to_string(),
            middle_name: None,
            last_name: "Krishnan".to_string(),
            designation: "Managing Director".to_string(),
            category: "Promoter".to_string(),
            subcategory: "Executive".to_string(),
            email: "anita.krishnan@example.in".to_string(),
            phone: "9845012345".to_string(),
        }
    }

    fn present_address() -> Address {
        Address {
            line1: "44 Residency Road".to_string(),
            line2: None,
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pin_code: "560025".to_string(),
            country: "India".to_string(),
        }
    }

    #[test]
    fn test_identification_requires_pan_or_passport() {
        // Neither PAN nor passport: a field error on `pan`, not a panic,
        // and the wizard must stay on the identification step.
        let mut wizard: Wizard<DirectorFlow> = Wizard::new();
        wizard.next(DirectorStep::BasicDetails(basic())).unwrap();
        assert_eq!(wizard.current_step(), 2);

        let err = wizard
            .next(DirectorStep::Identification(IdentificationForm::default()))
            .unwrap_err();
        match err {
            WizardError::Validation(errors) => assert!(errors.has_field("pan")),
            other => panic!("expected Validation, got {other:?}"),
        }
        assert_eq!(wizard.current_step(), 2);
    }

    #[test]
    fn test_passport_alone_satisfies_identification() {
        let form = IdentificationForm {
            passport_number: Some("Z4032871".to_string()),
            ..IdentificationForm::default()
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_invalid_pan_still_reported() {
        let form = IdentificationForm {
            pan: Some("BAD".to_string()),
            ..IdentificationForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has_field("pan"));
    }

    #[test]
    fn test_permanent_address_required_unless_same() {
        let missing = AddressesForm {
            present: present_address(),
            permanent_same_as_present: false,
            permanent: None,
        };
        assert!(missing.validate().unwrap_err().has_field("permanent"));

        let same = AddressesForm {
            present: present_address(),
            permanent_same_as_present: true,
            permanent: None,
        };
        assert!(same.validate().is_ok());
    }

    #[test]
    fn test_same_as_present_copies_at_apply_time() {
        let mut draft = DirectorDraft::default();
        DirectorFlow::apply(
            &mut draft,
            DirectorStep::Addresses(AddressesForm {
                present: present_address(),
                permanent_same_as_present: true,
                permanent: None,
            }),
        )
        .unwrap();
        let applied = draft.addresses.unwrap();
        assert_eq!(applied.permanent, Some(present_address()));
    }

    #[test]
    fn test_interest_flag_requires_nonempty_list() {
        let form = InterestsForm {
            has_interest_in_other_entities: true,
            interests: vec![],
        };
        assert!(form.validate().unwrap_err().has_field("interests"));

        let off = InterestsForm::default();
        assert!(off.validate().is_ok());
    }

    #[test]
    fn test_full_wizard_builds_director() {
        let mut wizard: Wizard<DirectorFlow> = Wizard::new();
        wizard.next(DirectorStep::BasicDetails(basic())).unwrap();
        wizard
            .next(DirectorStep::Identification(IdentificationForm {
                din: Some("01234567".to_string()),
                pan: Some("AKXPK4821L".to_string()),
                ..IdentificationForm::default()
            }))
            .unwrap();
        wizard
            .next(DirectorStep::Addresses(AddressesForm {
                present: present_address(),
                permanent_same_as_present: true,
                permanent: None,
            }))
            .unwrap();
        wizard
            .next(DirectorStep::Interests(InterestsForm::default()))
            .unwrap();
        let company = CompanyId::new();
        let director = match wizard
            .next(DirectorStep::Associations(AssociationsForm {
                associations: vec![AssociationForm {
                    company_id: company,
                    designation: "Managing Director".to_string(),
                    date_of_appointment: NaiveDate::from_ymd_opt(2019, 4, 1),
                    date_of_cessation: None,
                }],
            }))
            .unwrap()
        {
            WizardOutcome::Submitted(director) => director,
            other => panic!("expected Submitted, got {other:?}"),
        };

        assert_eq!(director.full_name(), "Anita Krishnan");
        assert!(director.permanent_same_as_present);
        assert_eq!(director.permanent_address, director.present_address);
        assert!(director.is_associated_with(company));
    }

    #[test]
    fn test_edit_draft_preserves_identifiers() {
        let mut wizard: Wizard<DirectorFlow> = Wizard::new();
        wizard.next(DirectorStep::BasicDetails(basic())).unwrap();
        wizard
            .next(DirectorStep::Identification(IdentificationForm {
                pan: Some("AKXPK4821L".to_string()),
                ..IdentificationForm::default()
            }))
            .unwrap();
        wizard
            .next(DirectorStep::Addresses(AddressesForm {
                present: present_address(),
                permanent_same_as_present: true,
                permanent: None,
            }))
            .unwrap();
        wizard
            .next(DirectorStep::Interests(InterestsForm::default()))
            .unwrap();
        let director = match wizard
            .next(DirectorStep::Associations(AssociationsForm::default()))
            .unwrap()
        {
            WizardOutcome::Submitted(d) => d,
            other => panic!("expected Submitted, got {other:?}"),
        };

        let draft = DirectorFlow::draft_from(&director);
        assert_eq!(
            draft.identification.unwrap().pan.as_deref(),
            Some("AKXPK4821L")
        );
        assert!(draft.addresses.unwrap().permanent_same_as_present);
    }
}
