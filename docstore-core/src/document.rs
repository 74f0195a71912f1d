//! Core types for document representation and serialization.
//!
//! This module provides the value types held by a document store —
//! [`Document`] and its embedded [`Author`] — as well as utilities for
//! converting documents to and from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};

use crate::error::DocumentStoreResult;

/// An identity value attached to a document.
///
/// Authors have no independent lifecycle; they exist only embedded inside
/// the documents that reference them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Unique identifier of the author.
    pub id: String,
    /// Display name of the author.
    pub name: String,
}

impl Author {
    /// Creates a new author value.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// A stored record with title, content, author, and store-managed metadata.
///
/// `id` and `created` may be absent on a caller-constructed document; the
/// store populates both during `save` and every document it holds has them
/// set. `created` always reflects the time of the most recent save of that
/// entry, regardless of any caller-supplied value.
///
/// # Example
///
/// ```ignore
/// use docstore::prelude::*;
///
/// let document = Document::new(
///     "Release notes",
///     "All changes since the last release.",
///     Author::new("a-1", "Alice"),
/// );
/// assert!(document.id.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier, assigned by the store when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Document title.
    pub title: String,
    /// Document body.
    pub content: String,
    /// The author of the document.
    pub author: Author,
    /// Creation timestamp, stamped by the store at save time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates an unsaved document without an id or creation timestamp.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
    ) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
            author,
            created: None,
        }
    }

    /// Converts this document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    /// Creates a document from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    pub fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }
}
