//! Main docstore crate providing a unified interface for document storage.
//!
//! This crate is the primary entry point for users of the docstore project.
//! It re-exports the core types from `docstore-core` and provides convenient
//! access to the in-memory backend.
//!
//! # Features
//!
//! - **Typed documents** - A concrete [`Document`](document::Document) value
//!   type with an embedded author and store-managed id/creation metadata
//! - **Predicate search** - Optional-field [`SearchRequest`](query::SearchRequest)s
//!   combined with AND across fields and OR within a field's listed values
//! - **Pluggable backends** - The [`StoreBackend`](backend::StoreBackend)
//!   trait seam with an in-memory implementation
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let mut store = DocumentStore::new(InMemoryStore::new());
//!
//! let saved = store.save(Document::new(
//!     "Release notes",
//!     "All changes since the last release.",
//!     Author::new("a-1", "Alice"),
//! ))?;
//!
//! let request = SearchRequest {
//!     title_prefixes: Some(vec!["Release".to_string()]),
//!     ..Default::default()
//! };
//! let results = store.search(&request)?;
//! assert_eq!(results.len(), 1);
//!
//! let found = store.find_by_id(saved.id.as_deref().unwrap())?;
//! assert!(found.is_some());
//! ```
//!
//! # Semantics worth knowing
//!
//! - `save` appends unconditionally. Re-saving under an existing id adds a
//!   second entry rather than replacing the first; `find_by_id` then returns
//!   the earliest entry in insertion order.
//! - `created` is restamped from the store's clock on every save, discarding
//!   any caller-supplied value. Use
//!   [`SequenceClock`](docstore_memory::SequenceClock) for deterministic
//!   timestamps in tests.
//! - Timestamp bounds are strict on both ends: a document created exactly at
//!   `created_from` or `created_to` does not match.

pub mod prelude;

pub use docstore_core::{backend, document, error, query, store};

/// In-memory storage backend implementations.
pub mod memory {
    pub use docstore_memory::{
        Clock, InMemoryStore, InMemoryStoreBuilder, SequenceClock, SystemClock,
    };
}
