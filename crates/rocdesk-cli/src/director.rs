//! # Director Subcommand

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use rocdesk_core::DirectorId;
use rocdesk_forms::DirectorFlow;
use rocdesk_model::DirectorPatch;
use rocdesk_store::Registry;

use crate::ops;

/// Director subcommand arguments.
#[derive(Args, Debug)]
pub struct DirectorArgs {
    #[command(subcommand)]
    pub command: DirectorCommand,
}

/// Available director subcommands.
#[derive(Subcommand, Debug)]
pub enum DirectorCommand {
    /// List directors.
    List,

    /// Show one director as JSON.
    Show {
        /// Director id (`director:<uuid>` or bare UUID).
        #[arg(long)]
        id: DirectorId,
    },

    /// Register a director from a wizard step file.
    Register {
        /// JSON file holding the wizard step payloads in order.
        #[arg(long)]
        steps: PathBuf,
    },

    /// Re-run the wizard over a stored director and save the result.
    Edit {
        /// Director id to edit.
        #[arg(long)]
        id: DirectorId,
        /// JSON file holding the full wizard step payloads.
        #[arg(long)]
        steps: PathBuf,
    },

    /// Delete a director.
    Delete {
        /// Director id to delete.
        #[arg(long)]
        id: DirectorId,
    },
}

/// Execute the director subcommand.
pub fn run_director(args: &DirectorArgs, registry: &mut Registry) -> Result<u8> {
    match &args.command {
        DirectorCommand::List => {
            ops::print_list(&registry.directors.list(), "directors", |d| {
                format!(
                    "{}  {}  {}  ({} boards)",
                    d.id,
                    d.full_name(),
                    d.designation,
                    d.associations.len()
                )
            });
            Ok(0)
        }
        DirectorCommand::Show { id } => {
            let director = registry
                .directors
                .get(*id)
                .ok_or_else(|| anyhow::anyhow!("no director {id}"))?;
            ops::print_record(director)?;
            Ok(0)
        }
        DirectorCommand::Register { steps } => {
            let director = ops::run_wizard_from_file::<DirectorFlow>(steps)?;
            let created = registry.directors.create(director)?;
            println!("registered director {}", created.id);
            Ok(0)
        }
        DirectorCommand::Edit { id, steps } => {
            let director = ops::run_wizard_from_file::<DirectorFlow>(steps)?;
            let updated = registry.directors.update(*id, DirectorPatch::from(director))?;
            println!("updated director {}", updated.id);
            Ok(0)
        }
        DirectorCommand::Delete { id } => {
            if registry.directors.delete(*id)? {
                println!("deleted director {id}");
                Ok(0)
            } else {
                println!("no director {id}");
                Ok(1)
            }
        }
    }
}
