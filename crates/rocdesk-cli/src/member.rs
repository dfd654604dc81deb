//! # Share-Capital Member Subcommand

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use rocdesk_core::MemberId;
use rocdesk_forms::MemberFlow;
use rocdesk_model::MemberPatch;
use rocdesk_store::Registry;

use crate::ops;

/// Member subcommand arguments.
#[derive(Args, Debug)]
pub struct MemberArgs {
    #[command(subcommand)]
    pub command: MemberCommand,
}

/// Available member subcommands.
#[derive(Subcommand, Debug)]
pub enum MemberCommand {
    /// List share-capital members.
    List,

    /// Show one member as JSON.
    Show {
        /// Member id (`member:<uuid>` or bare UUID).
        #[arg(long)]
        id: MemberId,
    },

    /// Register a member from a wizard step file.
    Register {
        /// JSON file holding the wizard step payloads in order.
        #[arg(long)]
        steps: PathBuf,
    },

    /// Re-run the wizard over a stored member and save the result.
    Edit {
        /// Member id to edit.
        #[arg(long)]
        id: MemberId,
        /// JSON file holding the full wizard step payloads.
        #[arg(long)]
        steps: PathBuf,
    },

    /// Delete a member.
    Delete {
        /// Member id to delete.
        #[arg(long)]
        id: MemberId,
    },
}

/// Execute the member subcommand.
pub fn run_member(args: &MemberArgs, registry: &mut Registry) -> Result<u8> {
    match &args.command {
        MemberCommand::List => {
            ops::print_list(&registry.members.list(), "members", |m| {
                format!(
                    "{}  {} {}  {} shares",
                    m.id,
                    m.details.first_name,
                    m.details.last_name,
                    m.total_shares()
                )
            });
            Ok(0)
        }
        MemberCommand::Show { id } => {
            let member = registry
                .members
                .get(*id)
                .ok_or_else(|| anyhow::anyhow!("no member {id}"))?;
            ops::print_record(member)?;
            Ok(0)
        }
        MemberCommand::Register { steps } => {
            let member = ops::run_wizard_from_file::<MemberFlow>(steps)?;
            let created = registry.members.create(member)?;
            println!("registered member {}", created.id);
            Ok(0)
        }
        MemberCommand::Edit { id, steps } => {
            let member = ops::run_wizard_from_file::<MemberFlow>(steps)?;
            let updated = registry.members.update(*id, MemberPatch::from(member))?;
            println!("updated member {}", updated.id);
            Ok(0)
        }
        MemberCommand::Delete { id } => {
            if registry.members.delete(*id)? {
                println!("deleted member {id}");
                Ok(0)
            } else {
                println!("no member {id}");
                Ok(1)
            }
        }
    }
}
