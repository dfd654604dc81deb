//! # Registry
//!
//! The four entity stores bundled over one shared backend, plus the
//! registry-level operations that cut across collections: sample-data
//! seeding (empty registry only, so re-running the seed never
//! duplicates) and the full wipe.

use std::sync::Arc;

use rocdesk_model::{Audit, Company, Director, ShareCapitalMember};

use crate::backend::StorageBackend;
use crate::sample;
use crate::store::{EntityStore, StoreError};

/// How many records a seeding pass inserted per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub companies: usize,
    pub directors: usize,
    pub audits: usize,
    pub members: usize,
}

impl SeedReport {
    /// Total records inserted.
    pub fn total(&self) -> usize {
        self.companies + self.directors + self.audits + self.members
    }
}

/// All four collections over a shared backend.
pub struct Registry {
    /// Registered companies.
    pub companies: EntityStore<Company>,
    /// Directors.
    pub directors: EntityStore<Director>,
    /// Audit engagements.
    pub audits: EntityStore<Audit>,
    /// Share-capital members.
    pub members: EntityStore<ShareCapitalMember>,
}

impl Registry {
    /// Open every collection over the given backend.
    pub fn open(backend: Arc<dyn StorageBackend>) -> Result<Self, StoreError> {
        Ok(Self {
            companies: EntityStore::open(Arc::clone(&backend))?,
            directors: EntityStore::open(Arc::clone(&backend))?,
            audits: EntityStore::open(Arc::clone(&backend))?,
            members: EntityStore::open(backend)?,
        })
    }

    /// Whether every collection is empty.
    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
            && self.directors.is_empty()
            && self.audits.is_empty()
            && self.members.is_empty()
    }

    /// Seed the demonstration fixtures into an empty registry.
    ///
    /// A registry with any existing record is left untouched and the
    /// report comes back all-zero, so running the seed twice (or against
    /// live data) never duplicates.
    pub fn load_sample_data(&mut self) -> Result<SeedReport, StoreError> {
        if !self.is_empty() {
            tracing::info!("registry not empty, sample data skipped");
            return Ok(SeedReport::default());
        }

        let mut report = SeedReport::default();
        let mut company_ids = Vec::new();
        for company in sample::companies() {
            let created = self.companies.create(company)?;
            company_ids.push(created.id);
            report.companies += 1;
        }
        // Directors and audits reference the ids the store actually
        // assigned, not the placeholder ids on the fixtures.
        for director in sample::directors(&company_ids) {
            self.directors.create(director)?;
            report.directors += 1;
        }
        for audit in sample::audits(&company_ids) {
            self.audits.create(audit)?;
            report.audits += 1;
        }
        for member in sample::members() {
            self.members.create(member)?;
            report.members += 1;
        }

        tracing::info!(total = report.total(), "sample data loaded");
        Ok(report)
    }

    /// Wipe every collection.
    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.companies.clear()?;
        self.directors.clear()?;
        self.audits.clear()?;
        self.members.clear()?;
        tracing::info!("registry cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryBackend;

    fn open_registry() -> Registry {
        Registry::open(Arc::new(MemoryBackend::new())).unwrap()
    }

    #[test]
    fn test_seed_fills_empty_registry() {
        let mut registry = open_registry();
        let report = registry.load_sample_data().unwrap();
        assert_eq!(report.companies, 2);
        assert_eq!(report.directors, 3);
        assert_eq!(report.audits, 2);
        assert_eq!(report.members, 2);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_seed_is_idempotent() {
        // Second run inserts nothing.
        let mut registry = open_registry();
        let first = registry.load_sample_data().unwrap();
        let second = registry.load_sample_data().unwrap();
        assert_eq!(second, SeedReport::default());
        assert_eq!(registry.companies.len(), first.companies);
        assert_eq!(registry.members.len(), first.members);
    }

    #[test]
    fn test_seed_skips_nonempty_registry() {
        let mut registry = open_registry();
        let mut companies = sample::companies();
        registry.companies.create(companies.remove(0)).unwrap();
        let report = registry.load_sample_data().unwrap();
        assert_eq!(report, SeedReport::default());
        assert_eq!(registry.companies.len(), 1);
        assert!(registry.directors.is_empty());
    }

    #[test]
    fn test_seeded_references_resolve() {
        // Every seeded director association and audit points at a seeded
        // company.
        let mut registry = open_registry();
        registry.load_sample_data().unwrap();
        for director in registry.directors.list() {
            for association in &director.associations {
                assert!(registry.companies.get(association.company_id).is_some());
            }
        }
        for audit in registry.audits.list() {
            assert!(registry.companies.get(audit.company_id).is_some());
        }
    }

    #[test]
    fn test_clear_all_empties_every_collection() {
        let mut registry = open_registry();
        registry.load_sample_data().unwrap();
        registry.clear_all().unwrap();
        assert!(registry.is_empty());
        // And the wipe reached the backend: re-seeding works again.
        let report = registry.load_sample_data().unwrap();
        assert_eq!(report.companies, 2);
    }
}
