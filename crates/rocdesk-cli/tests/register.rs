//! Registration from wizard step files, end to end through the CLI
//! handlers and the JSON file backend.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use rocdesk_cli::company::{run_company, CompanyArgs, CompanyCommand};
use rocdesk_cli::ops;
use rocdesk_forms::CompanyFlow;
use rocdesk_store::{JsonFileBackend, Registry};

const COMPANY_STEPS: &str = r#"[
  {
    "step": "details",
    "name": "Meridian Castings Private Limited",
    "cin": "U27310MH2012PTC231450",
    "category": "Company limited by shares",
    "class": "Private",
    "subcategory": "Non-government company",
    "nic_code": "243100"
  },
  {
    "step": "registered_office",
    "address": {
      "line1": "Plot 18, MIDC Industrial Area",
      "city": "Pune",
      "state": "Maharashtra",
      "pin_code": "411019",
      "country": "India"
    },
    "email": "compliance@meridiancastings.in",
    "phone": "02027475500"
  },
  {
    "step": "registrations",
    "pan": "AAACM5409R"
  },
  {
    "step": "branches"
  },
  {
    "step": "relations"
  }
]"#;

fn open_registry(dir: &Path) -> Registry {
    let backend = Arc::new(JsonFileBackend::open(dir).unwrap());
    Registry::open(backend).unwrap()
}

#[test]
fn test_register_company_from_step_file() {
    let dir = tempfile::tempdir().unwrap();
    let steps = dir.path().join("company.json");
    fs::write(&steps, COMPANY_STEPS).unwrap();

    let data_dir = dir.path().join("data");
    {
        let mut registry = open_registry(&data_dir);
        let code = run_company(
            &CompanyArgs {
                command: CompanyCommand::Register { steps },
            },
            &mut registry,
        )
        .unwrap();
        assert_eq!(code, 0);
    }

    // Registered record landed in the data directory.
    let registry = open_registry(&data_dir);
    let companies = registry.companies.list();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].name, "Meridian Castings Private Limited");
    assert_eq!(
        companies[0].registration.pan.as_ref().map(|p| p.as_str()),
        Some("AAACM5409R")
    );
}

#[test]
fn test_step_file_with_validation_error_reports_fields() {
    let dir = tempfile::tempdir().unwrap();
    let steps = dir.path().join("bad.json");
    fs::write(
        &steps,
        r#"[{"step":"details","name":"","category":"","class":"","subcategory":""}]"#,
    )
    .unwrap();

    let err = ops::run_wizard_from_file::<CompanyFlow>(&steps).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("name"), "unexpected error: {message}");
}

#[test]
fn test_step_file_out_of_order_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let steps = dir.path().join("wrong-order.json");
    fs::write(&steps, r#"[{"step":"branches"}]"#).unwrap();

    let err = ops::run_wizard_from_file::<CompanyFlow>(&steps).unwrap_err();
    assert!(format!("{err:#}").contains("step 4"));
}

#[test]
fn test_truncated_step_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let steps = dir.path().join("partial.json");
    // Only the first two steps; the wizard never reaches submission.
    let payload: Vec<serde_json::Value> =
        serde_json::from_str::<Vec<serde_json::Value>>(COMPANY_STEPS)
            .unwrap()
            .into_iter()
            .take(2)
            .collect();
    fs::write(&steps, serde_json::to_string(&payload).unwrap()).unwrap();

    let err = ops::run_wizard_from_file::<CompanyFlow>(&steps).unwrap_err();
    assert!(format!("{err:#}").contains("final wizard step"));
}
