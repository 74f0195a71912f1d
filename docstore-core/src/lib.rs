//! Core types and traits for an in-memory document store with
//! predicate-based search.
//!
//! This crate is the core of the docstore project and provides:
//!
//! - **Document types** ([`document`]) - The [`Document`](document::Document)
//!   and [`Author`](document::Author) value types and JSON conversion helpers
//! - **Search requests** ([`query`]) - Optional-field search requests and the
//!   filter expression tree they desugar into
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing
//!   storage backends
//! - **Document store** ([`store`]) - The backend-owning store wrapper
//! - **Error handling** ([`error`]) - Error and result types
//!
//! # Example
//!
//! ```ignore
//! use docstore_core::document::{Author, Document};
//!
//! let document = Document::new(
//!     "Release notes",
//!     "All changes since the last release.",
//!     Author::new("a-1", "Alice"),
//! );
//! ```

pub mod backend;
pub mod document;
pub mod error;
pub mod query;
pub mod store;
