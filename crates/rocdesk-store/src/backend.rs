//! # Storage Backends
//!
//! The entity stores speak to persistence through [`StorageBackend`]: a
//! keyed blob interface with one serialized payload per collection. Two
//! backends are provided:
//!
//! - [`MemoryBackend`] — a mutex-guarded map, used by tests and as the
//!   store for ephemeral sessions.
//! - [`JsonFileBackend`] — one JSON file per collection under a data
//!   directory. Writes go to a temporary sibling first and rename into
//!   place, so a crash mid-write leaves the previous payload intact.

use std::collections::HashMap;
use std::fs;
use std::io::Write as _;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

/// Failures raised by a storage backend.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem failure.
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The backend's internal state is unusable.
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

/// A keyed blob store holding one serialized payload per collection.
///
/// Backends never interpret payloads; serialization belongs to the
/// entity store layer.
pub trait StorageBackend: Send + Sync {
    /// Read a collection's payload. `None` when the collection has never
    /// been persisted.
    fn load(&self, collection: &str) -> Result<Option<String>, StorageError>;

    /// Replace a collection's payload. The write must be durable before
    /// this returns.
    fn persist(&self, collection: &str, payload: &str) -> Result<(), StorageError>;
}

// ─── In-memory backend ───────────────────────────────────────────────

/// Backend holding payloads in a mutex-guarded map.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    collections: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, collection: &str) -> Result<Option<String>, StorageError> {
        let collections = self
            .collections
            .lock()
            .map_err(|_| StorageError::Unavailable("memory backend poisoned".to_string()))?;
        Ok(collections.get(collection).cloned())
    }

    fn persist(&self, collection: &str, payload: &str) -> Result<(), StorageError> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| StorageError::Unavailable("memory backend poisoned".to_string()))?;
        collections.insert(collection.to_string(), payload.to_string());
        Ok(())
    }
}

// ─── JSON file backend ───────────────────────────────────────────────

/// Backend persisting each collection as `<data_dir>/<collection>.json`.
#[derive(Debug)]
pub struct JsonFileBackend {
    data_dir: PathBuf,
}

impl JsonFileBackend {
    /// Open a backend rooted at `data_dir`, creating the directory when
    /// missing.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    fn path_for(&self, collection: &str) -> PathBuf {
        self.data_dir.join(format!("{collection}.json"))
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self, collection: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(collection)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn persist(&self, collection: &str, payload: &str) -> Result<(), StorageError> {
        // Write-then-rename: the previous payload survives a crash
        // mid-write.
        let target = self.path_for(collection);
        let staging = self.data_dir.join(format!("{collection}.json.tmp"));
        {
            let mut file = fs::File::create(&staging)?;
            file.write_all(payload.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&staging, &target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.load("companies").unwrap(), None);
        backend.persist("companies", "[]").unwrap();
        assert_eq!(backend.load("companies").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_backend_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        {
            let backend = JsonFileBackend::open(dir.path()).unwrap();
            backend.persist("directors", r#"[{"x":1}]"#).unwrap();
        }
        let reopened = JsonFileBackend::open(dir.path()).unwrap();
        assert_eq!(
            reopened.load("directors").unwrap().as_deref(),
            Some(r#"[{"x":1}]"#)
        );
    }

    #[test]
    fn test_file_backend_missing_collection_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::open(dir.path()).unwrap();
        assert_eq!(backend.load("audits").unwrap(), None);
    }

    #[test]
    fn test_file_backend_overwrite_replaces_payload() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFileBackend::open(dir.path()).unwrap();
        backend.persist("members", "[1]").unwrap();
        backend.persist("members", "[1,2]").unwrap();
        assert_eq!(backend.load("members").unwrap().as_deref(), Some("[1,2]"));
    }
}
