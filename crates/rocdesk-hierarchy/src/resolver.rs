//! # Relationship Resolver
//!
//! Joins over the registry's weak references:
//!
//! - company → its directors (via the directors' association lists);
//! - company → its audit engagements;
//! - director → the companies they sit on;
//! - the multi-directorship roll-up;
//! - the dashboard summary.
//!
//! Dangling references (an association or audit pointing at a deleted
//! company) are silently dropped from every result. The one place
//! absence is signalled is the *root* of a lookup: asking for the
//! companies of a director who does not exist returns `None`, because
//! "unknown director" and "director with no companies" are different
//! answers.

use serde::Serialize;

use rocdesk_core::{CompanyId, DirectorId};
use rocdesk_model::{Audit, Company, Director};
use rocdesk_store::Registry;

/// Directors associated with the given company, in store order.
pub fn directors_of_company(registry: &Registry, company_id: CompanyId) -> Vec<Director> {
    registry
        .directors
        .list()
        .into_iter()
        .filter(|d| d.is_associated_with(company_id))
        .collect()
}

/// Audit engagements of the given company, in store order.
pub fn audits_of_company(registry: &Registry, company_id: CompanyId) -> Vec<Audit> {
    registry
        .audits
        .list()
        .into_iter()
        .filter(|a| a.company_id == company_id)
        .collect()
}

/// Companies the given director is associated with. `None` when the
/// director does not exist; associations pointing at deleted companies
/// are dropped.
pub fn companies_of_director(
    registry: &Registry,
    director_id: DirectorId,
) -> Option<Vec<Company>> {
    let director = registry.directors.get(director_id)?;
    let companies = director
        .associations
        .iter()
        .filter_map(|a| registry.companies.get(a.company_id).cloned())
        .collect();
    Some(companies)
}

/// One row of the multi-directorship roll-up.
#[derive(Debug, Clone, Serialize)]
pub struct MultiDirectorship {
    /// The director.
    pub director: Director,
    /// The companies they sit on that still exist.
    pub companies: Vec<Company>,
}

/// Directors whose association list has more than one entry. Membership
/// is decided by the list, not by what resolves: a director stays in the
/// roll-up after one of their companies is deleted, with the dangling
/// association dropped from `companies` like everywhere else.
pub fn directors_with_multiple_companies(registry: &Registry) -> Vec<MultiDirectorship> {
    registry
        .directors
        .list()
        .into_iter()
        .filter_map(|director| {
            let companies: Vec<Company> = director
                .associations
                .iter()
                .filter_map(|a| registry.companies.get(a.company_id).cloned())
                .collect();
            (director.associations.len() > 1).then(|| MultiDirectorship {
                director,
                companies,
            })
        })
        .collect()
}

/// One company with everything that resolves to it.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyOverview {
    /// The company itself.
    pub company: Company,
    /// Its directors.
    pub directors: Vec<Director>,
    /// Its audit engagements.
    pub audits: Vec<Audit>,
}

/// Resolve one company with its directors and audits. `None` when the
/// company does not exist.
pub fn company_overview(registry: &Registry, company_id: CompanyId) -> Option<CompanyOverview> {
    let company = registry.companies.get(company_id)?.clone();
    Some(CompanyOverview {
        directors: directors_of_company(registry, company_id),
        audits: audits_of_company(registry, company_id),
        company,
    })
}

/// Registry-wide summary counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// Registered companies.
    pub companies: usize,
    /// Directors.
    pub directors: usize,
    /// Audit engagements.
    pub audits: usize,
    /// Share-capital members.
    pub members: usize,
    /// Total shares held across all members' holdings.
    pub total_shares: u64,
}

/// Compute the dashboard summary.
pub fn dashboard(registry: &Registry) -> Dashboard {
    let total_shares = registry
        .members
        .list()
        .iter()
        .map(|m| m.total_shares())
        .sum();
    Dashboard {
        companies: registry.companies.len(),
        directors: registry.directors.len(),
        audits: registry.audits.len(),
        members: registry.members.len(),
        total_shares,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use rocdesk_store::{MemoryBackend, Registry};

    fn seeded_registry() -> Registry {
        let mut registry = Registry::open(Arc::new(MemoryBackend::new())).unwrap();
        registry.load_sample_data().unwrap();
        registry
    }

    #[test]
    fn test_directors_of_company_joins_by_association() {
        let registry = seeded_registry();
        for company in registry.companies.list() {
            let directors = directors_of_company(&registry, company.id);
            assert!(!directors.is_empty());
            for director in &directors {
                assert!(director.is_associated_with(company.id));
            }
        }
    }

    #[test]
    fn test_companies_of_missing_director_is_none() {
        let registry = seeded_registry();
        assert!(companies_of_director(&registry, DirectorId::new()).is_none());
    }

    #[test]
    fn test_dangling_association_is_dropped_silently() {
        // Delete a company, then resolve a director who sat on its board:
        // the lookup succeeds and the deleted company is simply absent.
        let mut registry = seeded_registry();
        let multi = directors_with_multiple_companies(&registry)
            .into_iter()
            .next()
            .expect("seed includes a multi-company director");
        let director_id = multi.director.id;
        let deleted_id = multi.companies[0].id;
        let before = multi.companies.len();

        registry.companies.delete(deleted_id).unwrap();

        let companies = companies_of_director(&registry, director_id).unwrap();
        assert_eq!(companies.len(), before - 1);
        assert!(companies.iter().all(|c| c.id != deleted_id));
    }

    #[test]
    fn test_multi_company_rollup_counts_associations_not_resolved_companies() {
        let mut registry = seeded_registry();
        let multi = directors_with_multiple_companies(&registry);
        assert_eq!(multi.len(), 1);
        let director_id = multi[0].director.id;

        // Deleting one of the two boards leaves the association list at
        // two entries, so the director stays in the roll-up; only the
        // resolved company list shrinks.
        let deleted_id = multi[0].companies[0].id;
        registry.companies.delete(deleted_id).unwrap();

        let after = directors_with_multiple_companies(&registry);
        assert_eq!(after.len(), 1);
        assert_eq!(after[0].director.id, director_id);
        assert_eq!(after[0].director.associations.len(), 2);
        assert_eq!(after[0].companies.len(), 1);
        assert!(after[0].companies.iter().all(|c| c.id != deleted_id));
    }

    #[test]
    fn test_audits_of_deleted_company_still_listable_by_id() {
        // The audit records survive the company delete; resolving by the
        // dead id still finds them (the reference is weak both ways).
        let mut registry = seeded_registry();
        let company = registry.companies.list().remove(0);
        let audits_before = audits_of_company(&registry, company.id);
        assert!(!audits_before.is_empty());

        registry.companies.delete(company.id).unwrap();
        let audits_after = audits_of_company(&registry, company.id);
        assert_eq!(audits_before.len(), audits_after.len());
        // But the overview for the deleted company is gone.
        assert!(company_overview(&registry, company.id).is_none());
    }

    #[test]
    fn test_dashboard_counts_and_total_shares() {
        let registry = seeded_registry();
        let summary = dashboard(&registry);
        assert_eq!(summary.companies, registry.companies.len());
        assert_eq!(summary.members, 2);
        assert_eq!(summary.total_shares, 7_000);
    }

    #[test]
    fn test_empty_registry_dashboard_is_zero() {
        let registry = Registry::open(Arc::new(MemoryBackend::new())).unwrap();
        assert_eq!(dashboard(&registry), Dashboard::default());
    }
}
