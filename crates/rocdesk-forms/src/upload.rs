//! # Upload Constraints
//!
//! Proof documents are referenced, never stored, but the reference is
//! only accepted when the upload meets the register's constraints: at
//! most 2 MB, with the extension restricted to the document whitelist
//! (or the narrower image whitelist for logo/image-only fields).

use rocdesk_model::DocumentRef;

use crate::error::FieldErrors;

/// Maximum accepted upload size.
pub const MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;

/// Extensions accepted for general proof documents.
pub const DOCUMENT_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "pdf"];

/// Extensions accepted for image-only fields (logos).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// What a given upload field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    /// General proof document: jpg, jpeg, png or pdf.
    Document,
    /// Image-only field: jpg, jpeg or png.
    Image,
}

impl UploadKind {
    fn allowed(&self) -> &'static [&'static str] {
        match self {
            Self::Document => DOCUMENT_EXTENSIONS,
            Self::Image => IMAGE_EXTENSIONS,
        }
    }
}

/// Validate one uploaded document reference against the size cap and the
/// extension whitelist for its kind.
pub fn check_upload(errors: &mut FieldErrors, field: &str, doc: &DocumentRef, kind: UploadKind) {
    if doc.size_bytes > MAX_UPLOAD_BYTES {
        errors.push(field, "must be at most 2 MB");
    }
    match doc.extension() {
        Some(ext) if kind.allowed().contains(&ext.as_str()) => {}
        _ => {
            let allowed = kind.allowed().join(", ");
            errors.push(field, format!("must be one of: {allowed}"));
        }
    }
}

/// Validate an optional upload; absent documents are fine.
pub fn check_optional_upload(
    errors: &mut FieldErrors,
    field: &str,
    doc: &Option<DocumentRef>,
    kind: UploadKind,
) {
    if let Some(doc) = doc {
        check_upload(errors, field, doc, kind);
    }
}
