//! # Document References
//!
//! A proof document attached to a registration entry or identity field.
//! The register stores a reference (name + size), never the bytes; the
//! upload constraints (size cap, extension whitelist) are enforced by the
//! form layer before a reference is accepted.

use serde::{Deserialize, Serialize};

/// Reference to an uploaded proof document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// File name as uploaded, including extension.
    pub file_name: String,
    /// Size of the upload in bytes.
    pub size_bytes: u64,
}

impl DocumentRef {
    /// The lowercased extension of the file name, if it has one.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}
