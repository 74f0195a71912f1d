//! Search request and filter expression types for document stores.
//!
//! The public search surface is the [`SearchRequest`] value struct: a set of
//! optional constraints combined with logical AND across fields and logical
//! OR within a field's listed values. Internally a request desugars into a
//! small [`Expr`] tree that backends evaluate through the [`QueryVisitor`]
//! pattern.
//!
//! # Example
//!
//! ```ignore
//! use docstore::prelude::*;
//!
//! let request = SearchRequest {
//!     title_prefixes: Some(vec!["Release".to_string()]),
//!     author_ids: Some(vec!["a-1".to_string()]),
//!     ..Default::default()
//! };
//! let results = store.search(&request)?;
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DocumentStoreError;

/// A set of optional, independently-applied match constraints.
///
/// Every field is optional; an absent field places no constraint on that
/// dimension, so the default request matches every stored document. A field
/// that is present with multiple values matches a document when *any* value
/// matches (OR within a field), while all present fields must match
/// simultaneously (AND across fields).
///
/// A present-but-empty value list matches nothing: there is no value for the
/// document to satisfy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Case-sensitive title prefixes; a document matches if its title starts
    /// with at least one of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_prefixes: Option<Vec<String>>,
    /// Case-sensitive substrings; a document matches if its content contains
    /// at least one of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_contents: Option<Vec<String>>,
    /// Author ids; a document matches if its author's id equals at least one
    /// of them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_ids: Option<Vec<String>>,
    /// Lower bound on the creation timestamp, exclusive: a document matches
    /// only if it was created strictly after this instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_from: Option<DateTime<Utc>>,
    /// Upper bound on the creation timestamp, exclusive: a document matches
    /// only if it was created strictly before this instant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Desugars this request into a filter expression.
    ///
    /// Each present field contributes one clause to a top-level [`Expr::And`];
    /// multi-valued fields desugar to an [`Expr::Or`] over their values. An
    /// all-absent request therefore desugars to `And([])`, which matches
    /// every document.
    pub fn to_expr(&self) -> Expr {
        let mut clauses = Vec::new();

        if let Some(prefixes) = &self.title_prefixes {
            clauses.push(Expr::Or(
                prefixes
                    .iter()
                    .cloned()
                    .map(Predicate::TitleStartsWith)
                    .map(Expr::Predicate)
                    .collect(),
            ));
        }

        if let Some(contents) = &self.contains_contents {
            clauses.push(Expr::Or(
                contents
                    .iter()
                    .cloned()
                    .map(Predicate::ContentContains)
                    .map(Expr::Predicate)
                    .collect(),
            ));
        }

        if let Some(author_ids) = &self.author_ids {
            clauses.push(Expr::Or(
                author_ids
                    .iter()
                    .cloned()
                    .map(Predicate::AuthorIdEq)
                    .map(Expr::Predicate)
                    .collect(),
            ));
        }

        if let Some(from) = self.created_from {
            clauses.push(Expr::Predicate(Predicate::CreatedAfter(from)));
        }

        if let Some(to) = self.created_to {
            clauses.push(Expr::Predicate(Predicate::CreatedBefore(to)));
        }

        Expr::And(clauses)
    }
}

/// A single-field comparison against a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// The document title starts with the given prefix (case-sensitive).
    TitleStartsWith(String),
    /// The document content contains the given substring (case-sensitive).
    ContentContains(String),
    /// The document's author id equals the given id.
    AuthorIdEq(String),
    /// The document was created strictly after the given instant.
    CreatedAfter(DateTime<Utc>),
    /// The document was created strictly before the given instant.
    CreatedBefore(DateTime<Utc>),
}

/// A filter expression for matching documents.
///
/// Expressions combine predicates with logical operators. `And` of an empty
/// list matches everything; `Or` of an empty list matches nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Logical AND of multiple expressions (all must match).
    And(Vec<Expr>),
    /// Logical OR of multiple expressions (any must match).
    Or(Vec<Expr>),
    /// A single-field comparison.
    Predicate(Predicate),
}

impl Expr {
    /// Combines this expression with another using logical AND.
    ///
    /// If this expression is already an AND, the other expression is appended
    /// to the list. Otherwise, a new AND expression is created.
    pub fn and(self, other: Expr) -> Self {
        match self {
            Expr::And(mut list) => {
                list.push(other);
                Expr::And(list)
            }
            _ => Expr::And(vec![self, other]),
        }
    }

    /// Combines this expression with another using logical OR.
    ///
    /// If this expression is already an OR, the other expression is appended
    /// to the list. Otherwise, a new OR expression is created.
    pub fn or(self, other: Expr) -> Self {
        match self {
            Expr::Or(mut list) => {
                list.push(other);
                Expr::Or(list)
            }
            _ => Expr::Or(vec![self, other]),
        }
    }
}

pub trait QueryVisitor {
    type Output;
    type Error: Into<DocumentStoreError>;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_predicate(&mut self, predicate: &Predicate) -> Result<Self::Output, Self::Error>;

    fn visit_expr(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error> {
        match expr {
            Expr::And(exprs) => self.visit_and(exprs),
            Expr::Or(exprs) => self.visit_or(exprs),
            Expr::Predicate(predicate) => self.visit_predicate(predicate),
        }
    }
}
