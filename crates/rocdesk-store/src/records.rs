//! # Record Implementations
//!
//! Wires the four model record types into the [`Record`] trait. Each
//! names its backend collection, exposes its typed key and patch, and
//! delegates patch application to the model's shallow merge.

use chrono::{DateTime, Utc};

use rocdesk_core::{AuditId, CompanyId, DirectorId, MemberId};
use rocdesk_model::{
    Audit, AuditPatch, Company, CompanyPatch, Director, DirectorPatch, MemberPatch,
    ShareCapitalMember,
};

use crate::store::Record;

impl Record for Company {
    type Key = CompanyId;
    type Patch = CompanyPatch;

    const COLLECTION: &'static str = "companies";

    fn key(&self) -> Self::Key {
        self.id
    }

    fn assign_fresh_key(&mut self) {
        self.id = CompanyId::new();
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        Company::apply_patch(self, patch);
    }

    fn mark_created(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }

    fn mark_updated(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Record for Director {
    type Key = DirectorId;
    type Patch = DirectorPatch;

    const COLLECTION: &'static str = "directors";

    fn key(&self) -> Self::Key {
        self.id
    }

    fn assign_fresh_key(&mut self) {
        self.id = DirectorId::new();
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        Director::apply_patch(self, patch);
    }

    fn mark_created(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }

    fn mark_updated(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Record for Audit {
    type Key = AuditId;
    type Patch = AuditPatch;

    const COLLECTION: &'static str = "audits";

    fn key(&self) -> Self::Key {
        self.id
    }

    fn assign_fresh_key(&mut self) {
        self.id = AuditId::new();
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        Audit::apply_patch(self, patch);
    }

    fn mark_created(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }

    fn mark_updated(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

impl Record for ShareCapitalMember {
    type Key = MemberId;
    type Patch = MemberPatch;

    const COLLECTION: &'static str = "share_capital_members";

    fn key(&self) -> Self::Key {
        self.id
    }

    fn assign_fresh_key(&mut self) {
        self.id = MemberId::new();
    }

    fn apply_patch(&mut self, patch: Self::Patch) {
        ShareCapitalMember::apply_patch(self, patch);
    }

    fn mark_created(&mut self, now: DateTime<Utc>) {
        self.created_at = now;
        self.updated_at = now;
    }

    fn mark_updated(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
