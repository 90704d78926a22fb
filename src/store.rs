//! Document repository keyed by slug.
//!
//! Pages never discover content themselves: they are handed a
//! [`DocumentStore`] that returns raw markdown for a slug or signals that
//! the slug does not exist.

mod fs;
mod memory;

use std::path::PathBuf;
use thiserror::Error;

pub use fs::FsStore;
pub use memory::MemoryStore;

/// Errors raised while looking up documents.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No document exists for the slug
    #[error("Document not found: {slug}")]
    NotFound { slug: String },

    /// Slug is malformed or attempts to leave the store root
    #[error("Invalid slug {slug:?}: {reason}")]
    InvalidSlug { slug: String, reason: &'static str },

    /// IO error while reading the backing storage
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document bytes are not valid UTF8
    #[error("Document contains invalid UTF8: {}", .path.display())]
    InvalidUtf8 { path: PathBuf },
}

impl StoreError {
    /// Whether this error is the not found signal rather than a failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

/// Source of raw markdown documents.
pub trait DocumentStore {
    /// Returns the raw markdown for a slug.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no document exists for the
    /// slug, [`StoreError::InvalidSlug`] for malformed slugs, and IO or
    /// encoding errors from the backing storage.
    fn load(&self, slug: &str) -> Result<String, StoreError>;

    /// Returns every available slug in sorted order.
    ///
    /// # Errors
    ///
    /// Returns error if the backing storage cannot be listed
    fn slugs(&self) -> Result<Vec<String>, StoreError>;
}

/// Validates a slug before it touches any storage.
///
/// A slug is a non empty, relative, `/` separated path without `.` or `..`
/// components, empty components or backslashes.
///
/// # Errors
///
/// Returns [`StoreError::InvalidSlug`] describing the first violation
pub fn validate_slug(slug: &str) -> Result<(), StoreError> {
    let invalid = |reason| {
        Err(StoreError::InvalidSlug {
            slug: slug.to_string(),
            reason,
        })
    };

    if slug.is_empty() {
        return invalid("slug is empty");
    }
    if slug.starts_with('/') {
        return invalid("slug is absolute, must be relative");
    }
    if slug.contains('\\') {
        return invalid("slug contains a backslash");
    }

    for component in slug.split('/') {
        match component {
            "" => return invalid("slug contains an empty component"),
            "." | ".." => return invalid("slug contains directory traversal"),
            _ => {}
        }
    }

    Ok(())
}
