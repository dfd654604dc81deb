//! # Director Record
//!
//! A director with their designation taxonomy, identity numbers,
//! present/permanent addresses, interests in other entities and the list
//! of company associations.
//!
//! ## Invariants (enforced by the form layer, relied on here)
//!
//! - At least one of {PAN, passport} is present.
//! - When `permanent_same_as_present` is true the permanent address
//!   fields hold a **copy** of the present address taken at input time.
//!   The copy is live data, not a hidden view: a later edit of the
//!   present address does not silently desynchronize the stored record.
//! - When `has_interest_in_other_entities` is true, `entity_interests`
//!   is non-empty.
//!
//! Company associations reference companies by id. The reference is weak:
//! deleting the company leaves the association behind, and resolvers drop
//! it silently.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rocdesk_core::{Address, CompanyId, Contact, DirectorId, Pan};

/// An interest the director holds in another company or LLP.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityInterest {
    /// Name of the other entity.
    pub entity_name: String,
    /// Registration number of the other entity, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    /// Designation held there.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    /// Date of appointment there.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_appointment: Option<NaiveDate>,
    /// Date of cessation there, if ceased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_cessation: Option<NaiveDate>,
    /// Percentage of shares held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shareholding_percent: Option<f64>,
    /// Monetary amount of the shareholding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shareholding_amount: Option<f64>,
}

/// One association of the director with a registered company.
///
/// Independently addable and removable; the list is replaced wholesale by
/// the association wizard step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyAssociation {
    /// The associated company (weak reference).
    pub company_id: CompanyId,
    /// Designation at that company.
    pub designation: String,
    /// Date of appointment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_appointment: Option<NaiveDate>,
    /// Date of cessation, if ceased.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_cessation: Option<NaiveDate>,
}

/// A director of one or more companies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Director {
    /// Store-assigned identity.
    pub id: DirectorId,
    /// First name.
    pub first_name: String,
    /// Middle name, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Last name.
    pub last_name: String,
    /// Designation (e.g. "Managing Director").
    pub designation: String,
    /// Designation category. Free-standing enumeration entered as text,
    /// not derived from the designation.
    pub category: String,
    /// Designation subcategory, likewise free-standing.
    pub subcategory: String,
    /// Director Identification Number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub din: Option<String>,
    /// PAN. Required unless a passport is supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<Pan>,
    /// Passport number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passport_number: Option<String>,
    /// Driving license number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driving_license: Option<String>,
    /// Aadhar number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aadhar: Option<String>,
    /// Contact details.
    pub contact: Contact,
    /// Present address. Always required.
    pub present_address: Address,
    /// Whether the permanent address was declared identical to the
    /// present address at input time.
    pub permanent_same_as_present: bool,
    /// Permanent address. When `permanent_same_as_present` is set this
    /// holds the copy taken from the present address.
    pub permanent_address: Address,
    /// Gate for `entity_interests`: when true the list is non-empty.
    pub has_interest_in_other_entities: bool,
    /// Interests in other companies/LLPs.
    #[serde(default)]
    pub entity_interests: Vec<EntityInterest>,
    /// Associations with registered companies.
    #[serde(default)]
    pub associations: Vec<CompanyAssociation>,
    /// Set by the store at creation.
    pub created_at: DateTime<Utc>,
    /// Set by the store on every successful write.
    pub updated_at: DateTime<Utc>,
}

impl Director {
    /// Display name: first, optional middle, last.
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }

    /// Whether this director is associated with the given company.
    pub fn is_associated_with(&self, company_id: CompanyId) -> bool {
        self.associations.iter().any(|a| a.company_id == company_id)
    }
}

/// Shallow-merge patch for [`Director`]. Absent fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectorPatch {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub designation: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub din: Option<String>,
    pub pan: Option<Pan>,
    pub passport_number: Option<String>,
    pub driving_license: Option<String>,
    pub aadhar: Option<String>,
    pub contact: Option<Contact>,
    pub present_address: Option<Address>,
    pub permanent_same_as_present: Option<bool>,
    pub permanent_address: Option<Address>,
    pub has_interest_in_other_entities: Option<bool>,
    pub entity_interests: Option<Vec<EntityInterest>>,
    pub associations: Option<Vec<CompanyAssociation>>,
}

impl Director {
    /// Apply a shallow merge: every present patch field overwrites the
    /// stored value, list fields wholesale.
    pub fn apply_patch(&mut self, patch: DirectorPatch) {
        let DirectorPatch {
            first_name,
            middle_name,
            last_name,
            designation,
            category,
            subcategory,
            din,
            pan,
            passport_number,
            driving_license,
            aadhar,
            contact,
            present_address,
            permanent_same_as_present,
            permanent_address,
            has_interest_in_other_entities,
            entity_interests,
            associations,
        } = patch;
        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = middle_name {
            self.middle_name = Some(v);
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = designation {
            self.designation = v;
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = subcategory {
            self.subcategory = v;
        }
        if let Some(v) = din {
            self.din = Some(v);
        }
        if let Some(v) = pan {
            self.pan = Some(v);
        }
        if let Some(v) = passport_number {
            self.passport_number = Some(v);
        }
        if let Some(v) = driving_license {
            self.driving_license = Some(v);
        }
        if let Some(v) = aadhar {
            self.aadhar = Some(v);
        }
        if let Some(v) = contact {
            self.contact = v;
        }
        if let Some(v) = present_address {
            self.present_address = v;
        }
        if let Some(v) = permanent_same_as_present {
            self.permanent_same_as_present = v;
        }
        if let Some(v) = permanent_address {
            self.permanent_address = v;
        }
        if let Some(v) = has_interest_in_other_entities {
            self.has_interest_in_other_entities = v;
        }
        if let Some(v) = entity_interests {
            self.entity_interests = v;
        }
        if let Some(v) = associations {
            self.associations = v;
        }
    }
}

impl From<Director> for DirectorPatch {
    /// Full-field patch used when a wizard edit re-submits the whole
    /// record through `update`.
    fn from(d: Director) -> Self {
        Self {
            first_name: Some(d.first_name),
            middle_name: d.middle_name,
            last_name: Some(d.last_name),
            designation: Some(d.designation),
            category: Some(d.category),
            subcategory: Some(d.subcategory),
            din: d.din,
            pan: d.pan,
            passport_number: d.passport_number,
            driving_license: d.driving_license,
            aadhar: d.aadhar,
            contact: Some(d.contact),
            present_address: Some(d.present_address),
            permanent_same_as_present: Some(d.permanent_same_as_present),
            permanent_address: Some(d.permanent_address),
            has_interest_in_other_entities: Some(d.has_interest_in_other_entities),
            entity_interests: Some(d.entity_interests),
            associations: Some(d.associations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_director() -> Director {
        let present = Address {
            line1: "44 Residency Road".to_string(),
            line2: None,
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            pin_code: "560025".to_string(),
            country: "India".to_string(),
        };
        Director {
            id: DirectorId::new(),
            first_name: "Anita".to_string(),
            middle_name: None,
            last_name: "Krishnan".to_string(),
            designation: "Managing Director".to_string(),
            category: "Promoter".to_string(),
            subcategory: "Executive".to_string(),
            din: Some("01234567".to_string()),
            pan: Some(Pan::parse("AKXPK4821L").unwrap()),
            passport_number: None,
            driving_license: None,
            aadhar: None,
            contact: Contact {
                email: "anita.krishnan@example.in".to_string(),
                phone: "9845012345".to_string(),
            },
            present_address: present.clone(),
            permanent_same_as_present: true,
            permanent_address: present,
            has_interest_in_other_entities: false,
            entity_interests: vec![],
            associations: vec![],
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_full_name_with_and_without_middle() {
        let mut d = sample_director();
        assert_eq!(d.full_name(), "Anita Krishnan");
        d.middle_name = Some("R".to_string());
        assert_eq!(d.full_name(), "Anita R Krishnan");
    }

    #[test]
    fn test_is_associated_with() {
        let mut d = sample_director();
        let company = CompanyId::new();
        assert!(!d.is_associated_with(company));
        d.associations.push(CompanyAssociation {
            company_id: company,
            designation: "Director".to_string(),
            date_of_appointment: None,
            date_of_cessation: None,
        });
        assert!(d.is_associated_with(company));
        assert!(!d.is_associated_with(CompanyId::new()));
    }

    #[test]
    fn test_permanent_copy_is_independent_data() {
        // The "same as present" copy is taken at input time; editing the
        // present address afterwards must not drag the permanent copy
        // along.
        let mut d = sample_director();
        d.present_address.city = "Mysuru".to_string();
        assert_eq!(d.permanent_address.city, "Bengaluru");
    }

    #[test]
    fn test_patch_is_idempotent() {
        let mut once = sample_director();
        let mut twice = once.clone();
        let patch = DirectorPatch {
            designation: Some("Whole-time Director".to_string()),
            ..DirectorPatch::default()
        };
        once.apply_patch(patch.clone());
        twice.apply_patch(patch.clone());
        twice.apply_patch(patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_serde_roundtrip() {
        let d = sample_director();
        let json = serde_json::to_string(&d).unwrap();
        let parsed: Director = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);
    }
}
