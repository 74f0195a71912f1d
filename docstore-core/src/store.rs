//! Main document store interface for interacting with storage backends.
//!
//! [`DocumentStore`] is the primary entry point: a thin wrapper that binds a
//! backend implementation to the store API. It delegates every operation to
//! the backend and owns it for the store's lifetime.
//!
//! # Example
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let mut store = DocumentStore::new(InMemoryStore::new());
//! let saved = store.save(Document::new("Title", "Body", Author::new("a-1", "Alice")))?;
//! assert!(saved.id.is_some());
//! ```

use crate::{
    backend::StoreBackend,
    document::Document,
    error::DocumentStoreResult,
    query::SearchRequest,
};

/// A document store bound to a specific backend implementation.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Saves a document, assigning an id when absent and restamping `created`.
    ///
    /// See [`StoreBackend::save`] for the full semantics, including the
    /// append-always behavior for documents saved under an existing id.
    pub fn save(&mut self, document: Document) -> DocumentStoreResult<Document> {
        self.backend.save(document)
    }

    /// Returns all documents matching the request, in insertion order.
    pub fn search(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        self.backend.search(request)
    }

    /// Returns the first stored document with the given id, if any.
    pub fn find_by_id(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        self.backend.find_by_id(id)
    }

    /// Returns the number of documents currently held.
    pub fn count(&self) -> DocumentStoreResult<usize> {
        self.backend.count()
    }

    /// Consumes the store and returns the underlying backend.
    pub fn into_inner(self) -> B {
        self.backend
    }
}
