//! Convenient re-exports of commonly used types from docstore.
//!
//! Import this prelude module to quickly access the most frequently used
//! types and traits without needing to import from multiple sub-modules:
//!
//! ```ignore
//! use docstore::prelude::*;
//! ```

pub use docstore_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::{Author, Document},
    error::{DocumentStoreError, DocumentStoreResult},
    query::{Expr, Predicate, QueryVisitor, SearchRequest},
    store::DocumentStore,
};
