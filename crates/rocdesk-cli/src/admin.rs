//! # Registry Administration and Views
//!
//! Seeding, wiping, the dashboard summary and the hierarchy views built
//! by the resolver.

use anyhow::Result;
use clap::Args;

use rocdesk_core::{CompanyId, DirectorId};
use rocdesk_hierarchy::{
    companies_of_director, company_overview, dashboard, directors_with_multiple_companies,
};
use rocdesk_store::Registry;

use crate::ops;

/// Load the demonstration fixtures into an empty registry.
pub fn run_seed(registry: &mut Registry) -> Result<u8> {
    let report = registry.load_sample_data()?;
    if report.total() == 0 {
        println!("registry is not empty; nothing seeded");
    } else {
        println!(
            "seeded {} companies, {} directors, {} audits, {} members",
            report.companies, report.directors, report.audits, report.members
        );
    }
    Ok(0)
}

/// Wipe every collection.
pub fn run_clear(registry: &mut Registry) -> Result<u8> {
    registry.clear_all()?;
    println!("registry cleared");
    Ok(0)
}

/// Print the dashboard summary.
pub fn run_dashboard(registry: &Registry) -> Result<u8> {
    let summary = dashboard(registry);
    println!("companies:     {}", summary.companies);
    println!("directors:     {}", summary.directors);
    println!("audits:        {}", summary.audits);
    println!("members:       {}", summary.members);
    println!("total shares:  {}", summary.total_shares);
    Ok(0)
}

/// Hierarchy view arguments.
#[derive(Args, Debug)]
pub struct HierarchyArgs {
    /// Resolve one company (directors and audits) as JSON.
    #[arg(long, conflicts_with = "director")]
    pub company: Option<CompanyId>,

    /// Resolve one director's companies as JSON.
    #[arg(long)]
    pub director: Option<DirectorId>,
}

/// Execute the hierarchy subcommand.
pub fn run_hierarchy(args: &HierarchyArgs, registry: &Registry) -> Result<u8> {
    if let Some(company_id) = args.company {
        let overview = company_overview(registry, company_id)
            .ok_or_else(|| anyhow::anyhow!("no company {company_id}"))?;
        ops::print_record(&overview)?;
        return Ok(0);
    }
    if let Some(director_id) = args.director {
        let companies = companies_of_director(registry, director_id)
            .ok_or_else(|| anyhow::anyhow!("no director {director_id}"))?;
        ops::print_record(&companies)?;
        return Ok(0);
    }

    // Full tree: every company with its resolved directors and audits,
    // then the multi-directorship roll-up.
    for company in registry.companies.list() {
        println!("{}  {}", company.id, company.name);
        if let Some(overview) = company_overview(registry, company.id) {
            for director in &overview.directors {
                println!("  director  {}  {}", director.id, director.full_name());
            }
            for audit in &overview.audits {
                println!("  audit     {}  {}", audit.id, audit.auditor_name);
            }
        }
    }
    let multi = directors_with_multiple_companies(registry);
    if !multi.is_empty() {
        println!();
        println!("directors on multiple boards:");
        for entry in &multi {
            println!(
                "  {}  {}  ({} companies)",
                entry.director.id,
                entry.director.full_name(),
                entry.companies.len()
            );
        }
    }
    Ok(0)
}
