//! # Company Record
//!
//! A registered company with its legal identifiers, registered office,
//! financial year bounds, owned branches, typed corporate relations and
//! the statutory registration bundle.
//!
//! Branches and corporate relations have no independent lifecycle: they
//! are created and deleted only through the company that owns them and
//! are persisted inline with it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rocdesk_core::{Address, Cin, CompanyId, Contact, Gstin, Pan, Tan};

use crate::document::DocumentRef;

// ─── Corporate relations ─────────────────────────────────────────────

/// How a related company stands to this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// The related company holds this one.
    Holding,
    /// The related company is held by this one.
    Subsidiary,
    /// Associate company (significant influence, not control).
    Associate,
}

impl RelationKind {
    /// The snake_case string identifier for this relation kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Holding => "holding",
            Self::Subsidiary => "subsidiary",
            Self::Associate => "associate",
        }
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A typed relation to another company, with its validity window.
///
/// The related company is named, not referenced by id — holding and
/// subsidiary companies are frequently not themselves registered in this
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorporateRelation {
    /// Holding / subsidiary / associate.
    pub kind: RelationKind,
    /// Name of the related company.
    pub company_name: String,
    /// CIN of the related company, when known. Free text: related
    /// companies may be foreign bodies without a CIN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cin: Option<String>,
    /// Percentage of shares held.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shareholding_percent: Option<f64>,
    /// Start of the validity window.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<NaiveDate>,
    /// End of the validity window, if the relation has ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

// ─── Branches ────────────────────────────────────────────────────────

/// A branch office, owned by its company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    /// Branch address.
    pub address: Address,
    /// Registrar-of-Companies jurisdiction the branch falls under.
    pub roc_jurisdiction: String,
}

// ─── Registration bundle ─────────────────────────────────────────────

/// One statutory registration value with its optional proof document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationEntry {
    /// The registration number as issued.
    pub value: String,
    /// Uploaded proof document, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proof: Option<DocumentRef>,
}

/// The statutory registration bundle of a company.
///
/// PAN, TAN and GST carry validated identifier types; ESIC, EPF,
/// professional tax and ISIN registrations are stored as issued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    /// Permanent Account Number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan: Option<Pan>,
    /// Tax Deduction and Collection Account Number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tan: Option<Tan>,
    /// GST registration number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst: Option<Gstin>,
    /// Employees' State Insurance registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub esic: Option<RegistrationEntry>,
    /// Employees' Provident Fund registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub epf: Option<RegistrationEntry>,
    /// Professional tax registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professional_tax: Option<RegistrationEntry>,
    /// ISIN, for companies with dematerialized securities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isin: Option<RegistrationEntry>,
    /// Proof document for the PAN, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_proof: Option<DocumentRef>,
    /// Proof document for the TAN, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tan_proof: Option<DocumentRef>,
    /// Proof document for the GST registration, if supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gst_proof: Option<DocumentRef>,
}

// ─── Supporting bundles ──────────────────────────────────────────────

/// Financial year bounds of the company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialYear {
    /// First day of the financial year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    /// Last day of the financial year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

/// Bank account captured on the registrations step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Account number at the bank.
    pub account_number: String,
    /// IFSC code of the branch (fixed 11 characters, validated by the
    /// form layer).
    pub ifsc: String,
}

// ─── Company ─────────────────────────────────────────────────────────

/// A registered company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Store-assigned identity.
    pub id: CompanyId,
    /// Legal name.
    pub name: String,
    /// Corporate Identity Number. Optional: companies under incorporation
    /// have none yet. When present it is exactly 21 characters by
    /// construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cin: Option<Cin>,
    /// Company category (e.g. "Company limited by shares").
    pub category: String,
    /// Company class (e.g. "Private", "Public").
    #[serde(rename = "class")]
    pub company_class: String,
    /// Company subcategory (e.g. "Non-government company").
    pub subcategory: String,
    /// National Industrial Classification code (fixed 6 characters).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nic_code: Option<String>,
    /// Date of incorporation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_incorporation: Option<NaiveDate>,
    /// Registered office address.
    pub registered_office: Address,
    /// Contact details of the registered office.
    pub contact: Contact,
    /// Financial year bounds.
    #[serde(default)]
    pub financial_year: FinancialYear,
    /// Bank account, when captured.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<BankAccount>,
    /// Branch offices, owned by this record.
    #[serde(default)]
    pub branches: Vec<Branch>,
    /// Corporate relations, owned by this record.
    #[serde(default)]
    pub corporate_relations: Vec<CorporateRelation>,
    /// Statutory registration bundle.
    #[serde(default)]
    pub registration: Registration,
    /// Set by the store at creation.
    pub created_at: DateTime<Utc>,
    /// Set by the store on every successful write.
    pub updated_at: DateTime<Utc>,
}

/// Shallow-merge patch for [`Company`]. Absent fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub cin: Option<Cin>,
    pub category: Option<String>,
    #[serde(rename = "class")]
    pub company_class: Option<String>,
    pub subcategory: Option<String>,
    pub nic_code: Option<String>,
    pub date_of_incorporation: Option<NaiveDate>,
    pub registered_office: Option<Address>,
    pub contact: Option<Contact>,
    pub financial_year: Option<FinancialYear>,
    pub bank_account: Option<BankAccount>,
    pub branches: Option<Vec<Branch>>,
    pub corporate_relations: Option<Vec<CorporateRelation>>,
    pub registration: Option<Registration>,
}

impl Company {
    /// Apply a shallow merge: every present patch field overwrites the
    /// stored value, list fields wholesale.
    pub fn apply_patch(&mut self, patch: CompanyPatch) {
        let CompanyPatch {
            name,
            cin,
            category,
            company_class,
            subcategory,
            nic_code,
            date_of_incorporation,
            registered_office,
            contact,
            financial_year,
            bank_account,
            branches,
            corporate_relations,
            registration,
        } = patch;
        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = cin {
            self.cin = Some(v);
        }
        if let Some(v) = category {
            self.category = v;
        }
        if let Some(v) = company_class {
            self.company_class = v;
        }
        if let Some(v) = subcategory {
            self.subcategory = v;
        }
        if let Some(v) = nic_code {
            self.nic_code = Some(v);
        }
        if let Some(v) = date_of_incorporation {
            self.date_of_incorporation = Some(v);
        }
        if let Some(v) = registered_office {
            self.registered_office = v;
        }
        if let Some(v) = contact {
            self.contact = v;
        }
        if let Some(v) = financial_year {
            self.financial_year = v;
        }
        if let Some(v) = bank_account {
            self.bank_account = Some(v);
        }
        if let Some(v) = branches {
            self.branches = v;
        }
        if let Some(v) = corporate_relations {
            self.corporate_relations = v;
        }
        if let Some(v) = registration {
            self.registration = v;
        }
    }
}

impl From<Company> for CompanyPatch {
    /// Full-field patch used when a wizard edit re-submits the whole
    /// record through `update`.
    fn from(company: Company) -> Self {
        Self {
            name: Some(company.name),
            cin: company.cin,
            category: Some(company.category),
            company_class: Some(company.company_class),
            subcategory: Some(company.subcategory),
            nic_code: company.nic_code,
            date_of_incorporation: company.date_of_incorporation,
            registered_office: Some(company.registered_office),
            contact: Some(company.contact),
            financial_year: Some(company.financial_year),
            bank_account: company.bank_account,
            branches: Some(company.branches),
            corporate_relations: Some(company.corporate_relations),
            registration: Some(company.registration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocdesk_core::{Address, Contact};

    fn sample_company() -> Company {
        Company {
            id: CompanyId::new(),
            name: "Meridian Castings Private Limited".to_string(),
            cin: Some(Cin::parse("U27310MH2012PTC231450").unwrap()),
            category: "Company limited by shares".to_string(),
            company_class: "Private".to_string(),
            subcategory: "Non-government company".to_string(),
            nic_code: Some("243100".to_string()),
            date_of_incorporation: NaiveDate::from_ymd_opt(2012, 6, 14),
            registered_office: Address {
                line1: "Plot 18, MIDC Industrial Area".to_string(),
                line2: None,
                city: "Pune".to_string(),
                state: "Maharashtra".to_string(),
                pin_code: "411019".to_string(),
                country: "India".to_string(),
            },
            contact: Contact {
                email: "compliance@meridiancastings.in".to_string(),
                phone: "02027475500".to_string(),
            },
            financial_year: FinancialYear {
                start: NaiveDate::from_ymd_opt(2025, 4, 1),
                end: NaiveDate::from_ymd_opt(2026, 3, 31),
            },
            bank_account: None,
            branches: vec![],
            corporate_relations: vec![],
            registration: Registration::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let company = sample_company();
        let json = serde_json::to_string(&company).unwrap();
        let parsed: Company = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, company);
    }

    #[test]
    fn test_class_field_serializes_under_original_name() {
        let company = sample_company();
        let value = serde_json::to_value(&company).unwrap();
        assert!(value.get("class").is_some());
        assert!(value.get("company_class").is_none());
    }

    #[test]
    fn test_patch_overwrites_present_fields_only() {
        let mut company = sample_company();
        let original_name = company.name.clone();
        company.apply_patch(CompanyPatch {
            subcategory: Some("Subsidiary of foreign company".to_string()),
            ..CompanyPatch::default()
        });
        assert_eq!(company.name, original_name);
        assert_eq!(company.subcategory, "Subsidiary of foreign company");
    }

    #[test]
    fn test_patch_replaces_lists_wholesale() {
        let mut company = sample_company();
        company.branches.push(Branch {
            address: Address::default(),
            roc_jurisdiction: "RoC-Pune".to_string(),
        });
        company.apply_patch(CompanyPatch {
            branches: Some(vec![]),
            ..CompanyPatch::default()
        });
        assert!(company.branches.is_empty());
    }

    #[test]
    fn test_patch_is_idempotent() {
        let mut once = sample_company();
        let mut twice = once.clone();
        let patch = CompanyPatch {
            name: Some("Meridian Castings Limited".to_string()),
            company_class: Some("Public".to_string()),
            ..CompanyPatch::default()
        };
        once.apply_patch(patch.clone());
        twice.apply_patch(patch.clone());
        twice.apply_patch(patch);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_full_field_patch_reproduces_record() {
        let company = sample_company();
        let mut other = sample_company();
        other.id = company.id;
        other.created_at = company.created_at;
        other.updated_at = company.updated_at;
        other.name = "Placeholder".to_string();
        other.apply_patch(CompanyPatch::from(company.clone()));
        assert_eq!(other, company);
    }
}
