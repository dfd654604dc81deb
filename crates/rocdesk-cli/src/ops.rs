//! # Shared Subcommand Plumbing
//!
//! The per-entity subcommands all do the same four things — run a wizard
//! from a step file, print a record as JSON, list summaries, delete —
//! differing only in the flow and the summary line. The generic pieces
//! live here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use rocdesk_forms::{Wizard, WizardFlow, WizardOutcome};

/// Drive a wizard flow with the step payloads in a JSON file.
///
/// The file holds an array of tagged step objects, one per wizard step,
/// in order. Validation failures surface with every violated field; a
/// file that ends before the final step is rejected.
pub fn run_wizard_from_file<F>(path: &Path) -> Result<F::Output>
where
    F: WizardFlow,
    F::Step: DeserializeOwned,
{
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read step file: {}", path.display()))?;
    let steps: Vec<F::Step> = serde_json::from_str(&text)
        .with_context(|| format!("step file is not a valid step array: {}", path.display()))?;

    let mut wizard: Wizard<F> = Wizard::new();
    let mut output = None;
    for step in steps {
        match wizard.next(step)? {
            WizardOutcome::Advanced { .. } => {}
            WizardOutcome::Submitted(record) => output = Some(record),
        }
    }
    output.context("step file ended before the final wizard step")
}

/// Print one record as pretty JSON.
pub fn print_record<T: Serialize>(record: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

/// Print a summary line per record, with a count footer.
pub fn print_list<T>(records: &[T], noun: &str, summary: impl Fn(&T) -> String) {
    for record in records {
        println!("{}", summary(record));
    }
    println!();
    println!("Total: {} {noun}", records.len());
}
