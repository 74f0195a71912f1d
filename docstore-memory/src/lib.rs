//! In-memory document storage backend for docstore.
//!
//! This crate provides an in-memory implementation of the
//! [`StoreBackend`](docstore_core::backend::StoreBackend) trait. Documents
//! live in an owned, insertion-ordered collection; the store is
//! single-threaded, synchronous, and volatile, which makes it suitable for
//! embedding directly in an application or test harness.
//!
//! # Features
//!
//! - **Insertion-ordered storage** - Search results come back in the order
//!   documents were saved
//! - **Predicate search** - Optional-field requests combined with AND across
//!   fields and OR within a field
//! - **Detached results** - Callers receive copies, never views into the
//!   store's internals
//! - **Pluggable clock** - Deterministic creation timestamps in tests
//!
//! # Quick Start
//!
//! ```ignore
//! use docstore::{prelude::*, memory::InMemoryStore};
//!
//! let mut store = InMemoryStore::new();
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
//! assert_eq!(store.search(&request)?.len(), 1);
//! ```

pub mod clock;
pub mod evaluator;
pub mod store;

pub use clock::{Clock, SequenceClock, SystemClock};
pub use store::{InMemoryStore, InMemoryStoreBuilder};
