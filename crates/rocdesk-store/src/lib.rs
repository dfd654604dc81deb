//! # rocdesk-store
//!
//! Persistence for the compliance register. Records live in typed
//! collections ([`EntityStore`]) over a pluggable blob backend
//! ([`StorageBackend`]): the in-memory backend for tests and ephemeral
//! sessions, the JSON file backend for durable data directories.
//!
//! Writes are persist-before-commit — a mutation only becomes visible to
//! readers after the backend accepted it. Identity and timestamps are
//! store-assigned. Cross-collection references are weak; `delete` never
//! cascades.
//!
//! [`Registry`] bundles the four collections and owns the registry-level
//! operations (sample seeding, full wipe).

pub mod backend;
pub mod records;
pub mod registry;
pub mod sample;
pub mod store;

pub use backend::{JsonFileBackend, MemoryBackend, StorageBackend, StorageError};
pub use registry::{Registry, SeedReport};
pub use store::{EntityStore, Record, StoreError};
