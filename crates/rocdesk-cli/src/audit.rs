//! # Audit Subcommand

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use rocdesk_core::AuditId;
use rocdesk_forms::AuditFlow;
use rocdesk_model::AuditPatch;
use rocdesk_store::Registry;

use crate::ops;

/// Audit subcommand arguments.
#[derive(Args, Debug)]
pub struct AuditArgs {
    #[command(subcommand)]
    pub command: AuditCommand,
}

/// Available audit subcommands.
#[derive(Subcommand, Debug)]
pub enum AuditCommand {
    /// List audit engagements.
    List,

    /// Show one audit as JSON.
    Show {
        /// Audit id (`audit:<uuid>` or bare UUID).
        #[arg(long)]
        id: AuditId,
    },

    /// Register an audit from a wizard step file.
    Register {
        /// JSON file holding the wizard step payloads in order.
        #[arg(long)]
        steps: PathBuf,
    },

    /// Re-run the wizard over a stored audit and save the result.
    Edit {
        /// Audit id to edit.
        #[arg(long)]
        id: AuditId,
        /// JSON file holding the full wizard step payloads.
        #[arg(long)]
        steps: PathBuf,
    },

    /// Delete an audit.
    Delete {
        /// Audit id to delete.
        #[arg(long)]
        id: AuditId,
    },
}

/// Execute the audit subcommand.
pub fn run_audit(args: &AuditArgs, registry: &mut Registry) -> Result<u8> {
    match &args.command {
        AuditCommand::List => {
            ops::print_list(&registry.audits.list(), "audits", |a| {
                format!(
                    "{}  {}  ({})  appointed {}",
                    a.id, a.auditor_name, a.auditor_type, a.date_of_appointment
                )
            });
            Ok(0)
        }
        AuditCommand::Show { id } => {
            let audit = registry
                .audits
                .get(*id)
                .ok_or_else(|| anyhow::anyhow!("no audit {id}"))?;
            ops::print_record(audit)?;
            Ok(0)
        }
        AuditCommand::Register { steps } => {
            let audit = ops::run_wizard_from_file::<AuditFlow>(steps)?;
            let created = registry.audits.create(audit)?;
            println!("registered audit {}", created.id);
            Ok(0)
        }
        AuditCommand::Edit { id, steps } => {
            let audit = ops::run_wizard_from_file::<AuditFlow>(steps)?;
            let updated = registry.audits.update(*id, AuditPatch::from(audit))?;
            println!("updated audit {}", updated.id);
            Ok(0)
        }
        AuditCommand::Delete { id } => {
            if registry.audits.delete(*id)? {
                println!("deleted audit {id}");
                Ok(0)
            } else {
                println!("no audit {id}");
                Ok(1)
            }
        }
    }
}
