//! # Sample Data
//!
//! Demonstration fixtures for an empty registry: two companies, three
//! directors, two audit engagements and two share-capital members. Keys
//! and timestamps on the fixtures are placeholders; the store re-stamps
//! both at `create`, which is why the director and audit builders take
//! the company ids actually assigned.

use chrono::{NaiveDate, Utc};

use rocdesk_core::{Address, AuditId, Cin, CompanyId, Contact, Pan};
use rocdesk_model::{
    Audit, AuditorType, AuthorizedCapital, CalledUpCapital, CalledUpInput, CapitalMode,
    CapitalType, Company, CompanyAssociation, Director, FinancialSnapshot, FinancialYear,
    HoldingDetails, IssuedCapital, MemberDetails, PaidUpCapital, PaidUpInput, Registration,
    ShareCapitalMember, SubscribedCapital, SubscribedInput, TrancheFields,
};

fn address(line1: &str, city: &str, state: &str, pin: &str) -> Address {
    Address {
        line1: line1.to_string(),
        line2: None,
        city: city.to_string(),
        state: state.to_string(),
        pin_code: pin.to_string(),
        country: "India".to_string(),
    }
}

fn contact(email: &str, phone: &str) -> Contact {
    Contact {
        email: email.to_string(),
        phone: phone.to_string(),
    }
}

/// The two demonstration companies.
pub fn companies() -> Vec<Company> {
    let fy = FinancialYear {
        start: NaiveDate::from_ymd_opt(2025, 4, 1),
        end: NaiveDate::from_ymd_opt(2026, 3, 31),
    };
    vec![
        Company {
            id: CompanyId::new(),
            name: "Meridian Castings Private Limited".to_string(),
            cin: Cin::parse("U27310MH2012PTC231450").ok(),
            category: "Company limited by shares".to_string(),
            company_class: "Private".to_string(),
            subcategory: "Non-government company".to_string(),
            nic_code: Some("243100".to_string()),
            date_of_incorporation: NaiveDate::from_ymd_opt(2012, 6, 14),
            registered_office: address(
                "Plot 18, MIDC Industrial Area",
                "Pune",
                "Maharashtra",
                "411019",
            ),
            contact: contact("compliance@meridiancastings.in", "02027475500"),
            financial_year: fy,
            bank_account: None,
            branches: vec![],
            corporate_relations: vec![],
            registration: Registration {
                pan: Pan::parse("AAFCM2271Q").ok(),
                ..Registration::default()
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        },
        Company {
            id: CompanyId::new(),
            name: "Kaveri Agritech Limited".to_string(),
            cin: Cin::parse("L01110KA2008PLC046722").ok(),
            category: "Company limited by shares".to_string(),
            company_class: "Public".to_string(),
            subcategory: "Non-government company".to_string(),
            nic_code: Some("011101".to_string()),
            date_of_incorporation: NaiveDate::from_ymd_opt(2008, 2, 28),
            registered_office: address(
                "6th Floor, Brigade Towers",
                "Bengaluru",
                "Karnataka",
                "560025",
            ),
            contact: contact("secretarial@kaveriagritech.in", "08041231200"),
            financial_year: fy,
            bank_account: None,
            branches: vec![],
            corporate_relations: vec![],
            registration: Registration::default(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        },
    ]
}

fn director(
    first: &str,
    last: &str,
    designation: &str,
    din: &str,
    pan: &str,
    email: &str,
    home: Address,
    associations: Vec<CompanyAssociation>,
) -> Director {
    Director {
        id: rocdesk_core::DirectorId::new(),
        first_name: first.to_string(),
        middle_name: None,
        last_name: last.to_string(),
        designation: designation.to_string(),
        category: "Promoter".to_string(),
        subcategory: "Executive".to_string(),
        din: Some(din.to_string()),
        pan: Pan::parse(pan).ok(),
        passport_number: None,
        driving_license: None,
        aadhar: None,
        contact: contact(email, "9800011223"),
        present_address: home.clone(),
        permanent_same_as_present: true,
        permanent_address: home,
        has_interest_in_other_entities: false,
        entity_interests: vec![],
        associations,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Three demonstration directors. The third sits on both boards, so the
/// multi-company roll-up in the hierarchy view has something to show.
pub fn directors(company_ids: &[CompanyId]) -> Vec<Director> {
    let first = company_ids.first().copied();
    let second = company_ids.get(1).copied();
    let assoc = |id: Option<CompanyId>, designation: &str| -> Vec<CompanyAssociation> {
        id.map(|company_id| CompanyAssociation {
            company_id,
            designation: designation.to_string(),
            date_of_appointment: NaiveDate::from_ymd_opt(2019, 4, 1),
            date_of_cessation: None,
        })
        .into_iter()
        .collect()
    };
    let mut both = assoc(first, "Director");
    both.extend(assoc(second, "Independent Director"));

    vec![
        director(
            "Anita",
            "Krishnan",
            "Managing Director",
            "01284550",
            "AKXPK4821L",
            "anita.krishnan@meridiancastings.in",
            address("44 Residency Road", "Bengaluru", "Karnataka", "560025"),
            assoc(first, "Managing Director"),
        ),
        director(
            "Rohit",
            "Deshmukh",
            "Whole-time Director",
            "02947183",
            "BLWPD7304K",
            "rohit.deshmukh@kaveriagritech.in",
            address("9 Koregaon Park Lane", "Pune", "Maharashtra", "411001"),
            assoc(second, "Whole-time Director"),
        ),
        director(
            "Sunita",
            "Rao",
            "Independent Director",
            "00731265",
            "AEYPR5518M",
            "sunita.rao@outlook.in",
            address("23 Lavelle Road", "Bengaluru", "Karnataka", "560001"),
            both,
        ),
    ]
}

/// Two demonstration audit engagements, one per company.
pub fn audits(company_ids: &[CompanyId]) -> Vec<Audit> {
    let mut audits = Vec::new();
    let firms = [
        (
            "S R Vaidya & Associates",
            "104835W",
            "AAEFS1206Q",
            address("201 Fort Chambers", "Mumbai", "Maharashtra", "400001"),
        ),
        (
            "Hegde & Kamath LLP",
            "011472S",
            "AAGFH0914B",
            address("5 Infantry Road", "Bengaluru", "Karnataka", "560001"),
        ),
    ];
    for (company_id, (name, frn, pan, office)) in company_ids.iter().zip(firms) {
        audits.push(Audit {
            id: AuditId::new(),
            company_id: *company_id,
            auditor_name: name.to_string(),
            auditor_type: AuditorType::Firm,
            address: office,
            date_of_appointment: NaiveDate::from_ymd_opt(2024, 9, 30)
                .unwrap_or_default(),
            date_of_cessation: None,
            cessation_type: None,
            firm_registration_number: Some(frn.to_string()),
            membership_number: None,
            pan_of_firm: Pan::parse(pan).ok(),
            pan_of_signing_partner: None,
            financials: FinancialSnapshot {
                paid_up_capital: Some(2_500_000.0),
                turnover: Some(84_000_000.0),
                ..FinancialSnapshot::default()
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
    }
    audits
}

fn tranche(shares: u64) -> TrancheFields {
    TrancheFields {
        capital_type: CapitalType::Equity,
        description: Some("Equity shares of INR 10".to_string()),
        date: NaiveDate::from_ymd_opt(2023, 7, 1),
        mode: CapitalMode::Allotment,
        number_of_shares: shares,
        nominal_value_per_share: 10.0,
        premium_or_discount_per_share: None,
    }
}

fn member(first: &str, last: &str, email: &str, shares: u64, srn: &str) -> ShareCapitalMember {
    let issued = IssuedCapital {
        fields: tranche(shares),
    };
    let subscribed = SubscribedCapital::build(&issued, SubscribedInput::SameAsIssued);
    let called_up = CalledUpCapital::build(
        &subscribed,
        CalledUpInput::SameAsSubscribed {
            amount_called_up_per_share: 10.0,
        },
    );
    let paid_up = PaidUpCapital::build(
        &called_up,
        PaidUpInput::SameAsCalledUp {
            srn_of_pas3: srn.to_string(),
        },
    );
    ShareCapitalMember {
        id: rocdesk_core::MemberId::new(),
        details: MemberDetails {
            status: "Individual".to_string(),
            first_name: first.to_string(),
            middle_name: None,
            last_name: last.to_string(),
            contact: contact(email, "9810012345"),
            pan: None,
            nationality: "Indian".to_string(),
            is_minor: false,
            has_nomination: true,
        },
        authorized: AuthorizedCapital {
            fields: tranche(shares * 5),
        },
        issued,
        subscribed,
        called_up,
        paid_up,
        equity: Some(HoldingDetails {
            folio_number: Some(format!("F-{srn}")),
            physical_shares: shares,
            demat_shares: 0,
            ..HoldingDetails::default()
        }),
        preference: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Two demonstration share-capital members.
pub fn members() -> Vec<ShareCapitalMember> {
    vec![
        member("Vikram", "Sethi", "vikram.sethi@example.in", 5_000, "T00481235"),
        member("Meera", "Joshi", "meera.joshi@example.in", 2_000, "T00481298"),
    ]
}
