//! In memory document store.

use std::collections::BTreeMap;

use super::{DocumentStore, StoreError, validate_slug};

/// Document store backed by a sorted map.
///
/// Useful for tests and for embedding documents compiled into a binary.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    documents: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a document and returns the store for chaining.
    pub fn with_document(mut self, slug: impl Into<String>, content: impl Into<String>) -> Self {
        self.insert(slug, content);
        self
    }

    /// Adds or replaces a document.
    pub fn insert(&mut self, slug: impl Into<String>, content: impl Into<String>) {
        self.documents.insert(slug.into(), content.into());
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self, slug: &str) -> Result<String, StoreError> {
        validate_slug(slug)?;
        self.documents
            .get(slug)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                slug: slug.to_string(),
            })
    }

    fn slugs(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.documents.keys().cloned().collect())
    }
}
