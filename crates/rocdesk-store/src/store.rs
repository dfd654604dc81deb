//! # Typed Entity Store
//!
//! [`EntityStore`] keeps one collection of records in memory and mirrors
//! every mutation to a [`StorageBackend`]. Writes are
//! persist-before-commit: the mutation is applied to a copy, the whole
//! collection is serialized and handed to the backend, and only a
//! successful persist swaps the copy in. A failed persist leaves the
//! in-memory state (and therefore every later read) exactly as it was.
//!
//! Identity is store-assigned: `create` ignores whatever key the caller
//! put on the record and stamps a fresh one, along with `created_at` /
//! `updated_at`. `update` takes a typed patch and re-stamps
//! `updated_at`; `delete` is final, with no cascade into records that
//! reference the deleted key.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::backend::{StorageBackend, StorageError};

/// A record an [`EntityStore`] can manage.
pub trait Record: Clone + Serialize + DeserializeOwned {
    /// Typed key of the record.
    type Key: Copy + Eq + Hash + Display;
    /// Typed shallow-merge patch accepted by `update`.
    type Patch;

    /// Collection name the backend persists this record type under.
    const COLLECTION: &'static str;

    /// The record's key.
    fn key(&self) -> Self::Key;

    /// Replace the key with a freshly generated one.
    fn assign_fresh_key(&mut self);

    /// Merge a patch into the record.
    fn apply_patch(&mut self, patch: Self::Patch);

    /// Stamp both timestamps at creation.
    fn mark_created(&mut self, now: DateTime<Utc>);

    /// Re-stamp `updated_at` on a successful write.
    fn mark_updated(&mut self, now: DateTime<Utc>);
}

/// Failures raised by an entity store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record under the given key.
    #[error("no record {key} in {collection}")]
    NotFound {
        /// The collection searched.
        collection: &'static str,
        /// Display form of the missing key.
        key: String,
    },

    /// The backend refused the write or read.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The persisted payload does not parse, or a record does not
    /// serialize.
    #[error("collection payload is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One collection of records over a shared backend.
pub struct EntityStore<T: Record> {
    backend: Arc<dyn StorageBackend>,
    records: HashMap<T::Key, T>,
}

impl<T: Record> EntityStore<T> {
    /// Open the store, loading whatever the backend holds for this
    /// collection. A missing collection starts empty.
    pub fn open(backend: Arc<dyn StorageBackend>) -> Result<Self, StoreError> {
        let records = match backend.load(T::COLLECTION)? {
            Some(payload) => {
                let list: Vec<T> = serde_json::from_str(&payload)?;
                list.into_iter().map(|r| (r.key(), r)).collect()
            }
            None => HashMap::new(),
        };
        tracing::debug!(
            collection = T::COLLECTION,
            count = records.len(),
            "store opened"
        );
        Ok(Self { backend, records })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, ordered by key for stable output.
    pub fn list(&self) -> Vec<T> {
        let mut records: Vec<T> = self.records.values().cloned().collect();
        records.sort_by_key(|r| r.key().to_string());
        records
    }

    /// Look up one record.
    pub fn get(&self, key: T::Key) -> Option<&T> {
        self.records.get(&key)
    }

    /// Insert a new record. The caller's key and timestamps are
    /// overwritten: identity and stamping belong to the store.
    pub fn create(&mut self, mut record: T) -> Result<T, StoreError> {
        record.assign_fresh_key();
        record.mark_created(Utc::now());

        let mut staged = self.records.clone();
        staged.insert(record.key(), record.clone());
        self.commit(staged)?;

        tracing::info!(collection = T::COLLECTION, key = %record.key(), "record created");
        Ok(record)
    }

    /// Merge a patch into an existing record.
    pub fn update(&mut self, key: T::Key, patch: T::Patch) -> Result<T, StoreError> {
        let mut record = self
            .records
            .get(&key)
            .cloned()
            .ok_or(StoreError::NotFound {
                collection: T::COLLECTION,
                key: key.to_string(),
            })?;
        record.apply_patch(patch);
        record.mark_updated(Utc::now());

        let mut staged = self.records.clone();
        staged.insert(key, record.clone());
        self.commit(staged)?;

        tracing::info!(collection = T::COLLECTION, key = %key, "record updated");
        Ok(record)
    }

    /// Remove a record, reporting whether a removal occurred. Deleting a
    /// missing key is a no-op, not an error. References held by other
    /// collections are left alone; resolvers treat them as dangling.
    pub fn delete(&mut self, key: T::Key) -> Result<bool, StoreError> {
        if !self.records.contains_key(&key) {
            return Ok(false);
        }
        let mut staged = self.records.clone();
        staged.remove(&key);
        self.commit(staged)?;

        tracing::info!(collection = T::COLLECTION, key = %key, "record deleted");
        Ok(true)
    }

    /// Drop every record in the collection.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.commit(HashMap::new())?;
        tracing::info!(collection = T::COLLECTION, "collection cleared");
        Ok(())
    }

    /// Persist a staged state, then swap it in. The in-memory state is
    /// untouched unless the backend accepted the write.
    fn commit(&mut self, staged: HashMap<T::Key, T>) -> Result<(), StoreError> {
        let mut list: Vec<&T> = staged.values().collect();
        list.sort_by_key(|r| r.key().to_string());
        let payload = serde_json::to_string_pretty(&list)?;
        self.backend.persist(T::COLLECTION, &payload)?;
        self.records = staged;
        Ok(())
    }
}
