//! Filter expression evaluation for in-memory document matching.
//!
//! This module provides the evaluation engine for filter expressions,
//! matching [`Document`] values against the expression tree a
//! [`SearchRequest`](docstore_core::query::SearchRequest) desugars into.

use docstore_core::{
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    query::{Expr, Predicate, QueryVisitor},
};

pub(crate) struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn evaluate(&mut self, expr: &Expr) -> DocumentStoreResult<bool> {
        self.visit_expr(expr)
    }

    /// Filters documents against an expression, preserving input order.
    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        expr: &Expr,
    ) -> DocumentStoreResult<Vec<Document>> {
        Ok(documents
            .into_iter()
            .filter(|doc| {
                DocumentEvaluator::new(doc)
                    .evaluate(expr)
                    .unwrap_or(false)
            })
            .cloned()
            .collect::<Vec<_>>())
    }
}

impl QueryVisitor for DocumentEvaluator<'_> {
    type Output = bool;
    type Error = DocumentStoreError;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        for expr in exprs {
            if !self.visit_expr(expr)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        for expr in exprs {
            if self.visit_expr(expr)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn visit_predicate(&mut self, predicate: &Predicate) -> Result<Self::Output, Self::Error> {
        // A missing `created` never matches a timestamp bound; stored
        // documents always carry one, so this only affects unsaved values.
        Ok(match predicate {
            Predicate::TitleStartsWith(prefix) => self.document.title.starts_with(prefix),
            Predicate::ContentContains(needle) => self.document.content.contains(needle),
            Predicate::AuthorIdEq(id) => self.document.author.id == *id,
            Predicate::CreatedAfter(from) => {
                self.document.created.is_some_and(|created| created > *from)
            }
            Predicate::CreatedBefore(to) => {
                self.document.created.is_some_and(|created| created < *to)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use docstore_core::{
        document::{Author, Document},
        query::SearchRequest,
    };

    fn ts(value: &str) -> DateTime<Utc> {
        value.parse().unwrap()
    }

    fn document() -> Document {
        Document {
            id: Some("doc-1".to_string()),
            title: "Test document title 1".to_string(),
            content: "Test content 1".to_string(),
            author: Author::new("A", "Alice"),
            created: Some(ts("2010-06-01T00:00:00Z")),
        }
    }

    fn matches(document: &Document, expr: &Expr) -> bool {
        DocumentEvaluator::new(document).evaluate(expr).unwrap()
    }

    #[test]
    fn title_prefix_is_case_sensitive() {
        let doc = document();
        let hit = Expr::Predicate(Predicate::TitleStartsWith("Test".to_string()));
        let miss = Expr::Predicate(Predicate::TitleStartsWith("test".to_string()));

        assert!(matches(&doc, &hit));
        assert!(!matches(&doc, &miss));
    }

    #[test]
    fn content_match_is_substring_not_prefix() {
        let doc = document();
        let expr = Expr::Predicate(Predicate::ContentContains("content 1".to_string()));
        assert!(matches(&doc, &expr));
    }

    #[test]
    fn created_bounds_are_strict() {
        let doc = document();

        // The document's own timestamp satisfies neither strict bound.
        let at_boundary = Expr::Predicate(Predicate::CreatedAfter(ts("2010-06-01T00:00:00Z")));
        assert!(!matches(&doc, &at_boundary));

        let before = Expr::Predicate(Predicate::CreatedAfter(ts("2010-05-31T23:59:59Z")));
        assert!(matches(&doc, &before));

        let to_boundary = Expr::Predicate(Predicate::CreatedBefore(ts("2010-06-01T00:00:00Z")));
        assert!(!matches(&doc, &to_boundary));

        let after = Expr::Predicate(Predicate::CreatedBefore(ts("2010-06-01T00:00:01Z")));
        assert!(matches(&doc, &after));
    }

    #[test]
    fn missing_created_never_matches_timestamp_bounds() {
        let mut doc = document();
        doc.created = None;

        let from = Expr::Predicate(Predicate::CreatedAfter(ts("2000-01-01T00:00:00Z")));
        let to = Expr::Predicate(Predicate::CreatedBefore(ts("2030-01-01T00:00:00Z")));
        assert!(!matches(&doc, &from));
        assert!(!matches(&doc, &to));
    }

    #[test]
    fn empty_and_matches_everything_empty_or_matches_nothing() {
        let doc = document();
        assert!(matches(&doc, &Expr::And(vec![])));
        assert!(!matches(&doc, &Expr::Or(vec![])));
    }

    #[test]
    fn request_desugaring_combines_or_within_and_across() {
        let doc = document();
        let request = SearchRequest {
            title_prefixes: Some(vec!["Draft".to_string(), "Test".to_string()]),
            author_ids: Some(vec!["A".to_string()]),
            ..Default::default()
        };
        assert!(matches(&doc, &request.to_expr()));

        let conflicting = SearchRequest {
            title_prefixes: Some(vec!["Test".to_string()]),
            author_ids: Some(vec!["B".to_string()]),
            ..Default::default()
        };
        assert!(!matches(&doc, &conflicting.to_expr()));
    }

    #[test]
    fn filter_preserves_input_order() {
        let first = document();
        let mut second = document();
        second.id = Some("doc-2".to_string());
        second.title = "Test document title 2".to_string();

        let expr = Expr::Predicate(Predicate::TitleStartsWith("Test".to_string()));
        let filtered = DocumentEvaluator::filter_documents([&first, &second], &expr).unwrap();

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].id.as_deref(), Some("doc-1"));
        assert_eq!(filtered[1].id.as_deref(), Some("doc-2"));
    }
}
