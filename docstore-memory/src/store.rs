//! In-memory storage implementation for the document store.
//!
//! This module provides a simple in-memory backend that holds documents in an
//! owned, insertion-ordered collection.

use tracing::debug;
use uuid::Uuid;

use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::Document,
    error::DocumentStoreResult,
    query::SearchRequest,
};

use crate::{
    clock::{Clock, SystemClock},
    evaluator::DocumentEvaluator,
};

/// In-memory document storage backend.
///
/// This struct implements the [`StoreBackend`] trait over an owned
/// `Vec<Document>`. Insertion order is preserved and reflected in `search`
/// results; every document returned to a caller is a detached copy, so
/// nothing a caller does to a returned value can reach the store's internals.
///
/// # Semantics
///
/// `save` appends unconditionally: re-saving under an existing id adds a
/// second entry rather than replacing the first, and `find_by_id` then
/// returns the earliest entry. Every save restamps `created` from the
/// store's clock, overwriting any caller-supplied value.
///
/// # Scope
///
/// The store is single-threaded and volatile: no locking, no persistence.
/// Queries scan the whole collection; there is no indexing.
///
/// # Example
///
/// ```ignore
/// use docstore::{prelude::*, memory::InMemoryStore};
///
/// let mut store = InMemoryStore::new();
/// let saved = store.save(Document::new("Title", "Body", Author::new("a-1", "Alice")))?;
/// assert!(saved.id.is_some());
/// assert_eq!(store.count()?, 1);
/// ```
#[derive(Debug)]
pub struct InMemoryStore {
    /// Owned backing collection, in insertion order.
    documents: Vec<Document>,
    /// Time source for stamping `created`.
    clock: Box<dyn Clock>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store using the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates a new empty in-memory store with the given time source.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            documents: Vec::new(),
            clock: Box::new(clock),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBackend for InMemoryStore {
    fn save(&mut self, mut document: Document) -> DocumentStoreResult<Document> {
        let id = document
            .id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        document.id = Some(id.clone());
        // `created` reflects the save time, including on re-saves of the
        // same id; the caller-supplied value is discarded.
        document.created = Some(self.clock.now());

        debug!(doc_id = %id, "saving document to in-memory store");
        self.documents.push(document.clone());

        Ok(document)
    }

    fn search(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        debug!(candidates = self.documents.len(), "searching in-memory store");
        DocumentEvaluator::filter_documents(self.documents.iter(), &request.to_expr())
    }

    fn find_by_id(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        debug!(doc_id = %id, "looking up document in in-memory store");
        Ok(self
            .documents
            .iter()
            .find(|doc| doc.id.as_deref() == Some(id))
            .cloned())
    }

    fn count(&self) -> DocumentStoreResult<usize> {
        Ok(self.documents.len())
    }
}

/// Builder for constructing [`InMemoryStore`] instances.
///
/// The only option is the time source; an unset clock defaults to
/// [`SystemClock`].
#[derive(Debug, Default)]
pub struct InMemoryStoreBuilder {
    clock: Option<Box<dyn Clock>>,
}

impl InMemoryStoreBuilder {
    /// Sets the time source used to stamp `created` on saved documents.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }
}

impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    fn build(self) -> DocumentStoreResult<Self::Backend> {
        Ok(InMemoryStore {
            documents: Vec::new(),
            clock: self.clock.unwrap_or_else(|| Box::new(SystemClock)),
        })
    }
}
