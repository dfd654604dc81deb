//! # Company Subcommand
//!
//! Registration runs the five-step company wizard over a JSON step
//! file; edit re-runs the wizard and merges the result into the stored
//! record as a full-field patch, keeping the id and creation timestamp.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use rocdesk_core::CompanyId;
use rocdesk_forms::CompanyFlow;
use rocdesk_model::CompanyPatch;
use rocdesk_store::Registry;

use crate::ops;

/// Company subcommand arguments.
#[derive(Args, Debug)]
pub struct CompanyArgs {
    #[command(subcommand)]
    pub command: CompanyCommand,
}

/// Available company subcommands.
#[derive(Subcommand, Debug)]
pub enum CompanyCommand {
    /// List registered companies.
    List,

    /// Show one company as JSON.
    Show {
        /// Company id (`company:<uuid>` or bare UUID).
        #[arg(long)]
        id: CompanyId,
    },

    /// Register a company from a wizard step file.
    Register {
        /// JSON file holding the wizard step payloads in order.
        #[arg(long)]
        steps: PathBuf,
    },

    /// Re-run the wizard over a stored company and save the result.
    Edit {
        /// Company id to edit.
        #[arg(long)]
        id: CompanyId,
        /// JSON file holding the full wizard step payloads.
        #[arg(long)]
        steps: PathBuf,
    },

    /// Delete a company. Directors and audits referencing it are left
    /// in place with dangling references.
    Delete {
        /// Company id to delete.
        #[arg(long)]
        id: CompanyId,
    },
}

/// Execute the company subcommand.
pub fn run_company(args: &CompanyArgs, registry: &mut Registry) -> Result<u8> {
    match &args.command {
        CompanyCommand::List => {
            ops::print_list(&registry.companies.list(), "companies", |c| {
                let cin = c
                    .cin
                    .as_ref()
                    .map(|cin| cin.as_str().to_string())
                    .unwrap_or_else(|| "-".to_string());
                format!("{}  {}  [{}]  CIN: {cin}", c.id, c.name, c.company_class)
            });
            Ok(0)
        }
        CompanyCommand::Show { id } => {
            let company = registry
                .companies
                .get(*id)
                .ok_or_else(|| anyhow::anyhow!("no company {id}"))?;
            ops::print_record(company)?;
            Ok(0)
        }
        CompanyCommand::Register { steps } => {
            let company = ops::run_wizard_from_file::<CompanyFlow>(steps)?;
            let created = registry.companies.create(company)?;
            println!("registered company {}", created.id);
            Ok(0)
        }
        CompanyCommand::Edit { id, steps } => {
            let company = ops::run_wizard_from_file::<CompanyFlow>(steps)?;
            let updated = registry.companies.update(*id, CompanyPatch::from(company))?;
            println!("updated company {}", updated.id);
            Ok(0)
        }
        CompanyCommand::Delete { id } => {
            if !registry.companies.delete(*id)? {
                println!("no company {id}");
                return Ok(1);
            }
            let directors = registry
                .directors
                .list()
                .iter()
                .filter(|d| d.is_associated_with(*id))
                .count();
            let audits = registry
                .audits
                .list()
                .iter()
                .filter(|a| a.company_id == *id)
                .count();
            if directors + audits > 0 {
                tracing::warn!(
                    %id,
                    directors,
                    audits,
                    "deleted company is still referenced; references are now dangling"
                );
            }
            println!("deleted company {id}");
            Ok(0)
        }
    }
}
