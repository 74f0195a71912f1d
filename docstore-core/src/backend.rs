//! Storage backend abstraction for the document store.
//!
//! This module defines the trait that abstracts over storage implementations,
//! allowing the document store to work with different backends (in-memory,
//! persistent, and so on).
//!
//! # Overview
//!
//! The [`StoreBackend`] trait provides a unified synchronous interface for the
//! four store operations: save, search, lookup by id, and count. Operations
//! are plain blocking calls; the store targets single-threaded embedding and
//! makes no concurrency guarantees.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances

use std::fmt::Debug;

use crate::{document::Document, error::DocumentStoreResult, query::SearchRequest};

/// Abstract interface for document storage backends.
///
/// Implementers provide the concrete storage strategy behind the four store
/// operations. The backend exclusively owns its collection: methods that
/// return documents hand out detached copies, never views into internal
/// state.
///
/// # Error Handling
///
/// Operations return [`DocumentStoreResult<T>`](crate::error::DocumentStoreResult).
/// Backends without external resources may never fail in practice; the
/// `Result` seam exists so that fallible backends share the same interface.
pub trait StoreBackend: Debug {
    /// Saves a document, assigning store-managed fields.
    ///
    /// If the document has no `id`, a freshly generated unique identifier is
    /// assigned. `created` is always restamped with the current time,
    /// overwriting any caller-supplied value. The document is appended to the
    /// backend's collection unconditionally: saving under an id that is
    /// already present adds a second entry rather than replacing the first.
    ///
    /// # Returns
    ///
    /// The saved document with `id` and `created` populated.
    fn save(&mut self, document: Document) -> DocumentStoreResult<Document>;

    /// Returns all documents matching the request, in insertion order.
    ///
    /// Constraints combine with AND across request fields and OR within a
    /// field's listed values; see [`SearchRequest`]. An all-absent request
    /// matches every stored document.
    fn search(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>>;

    /// Returns the first stored document (insertion order) with the given id,
    /// or `None` if no such document exists.
    fn find_by_id(&self, id: &str) -> DocumentStoreResult<Option<Document>>;

    /// Returns the number of documents currently held, duplicates included.
    fn count(&self) -> DocumentStoreResult<usize>;
}

impl<B> StoreBackend for &mut B
where
    B: StoreBackend,
{
    fn save(&mut self, document: Document) -> DocumentStoreResult<Document> {
        (**self).save(document)
    }

    fn search(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        (**self).search(request)
    }

    fn find_by_id(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        (**self).find_by_id(id)
    }

    fn count(&self) -> DocumentStoreResult<usize> {
        (**self).count()
    }
}

pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    fn build(self) -> DocumentStoreResult<Self::Backend>;
}
