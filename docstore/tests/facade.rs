//! End-to-end tests exercising the facade crate surface: the prelude, the
//! `DocumentStore` wrapper, and the backend builder.

use docstore::memory::{InMemoryStore, SequenceClock};
use docstore::prelude::*;

fn author() -> Author {
    Author::new("a-1", "Alice")
}

#[test]
fn wrapper_delegates_all_four_operations() {
    let mut store = DocumentStore::new(InMemoryStore::new());

    let saved = store
        .save(Document::new("Release notes", "All changes.", author()))
        .unwrap();
    let id = saved.id.as_deref().unwrap().to_string();

    let request = SearchRequest {
        title_prefixes: Some(vec!["Release".to_string()]),
        ..Default::default()
    };
    assert_eq!(store.search(&request).unwrap().len(), 1);

    let found = store.find_by_id(&id).unwrap().unwrap();
    assert_eq!(found.title, "Release notes");
    assert_eq!(store.count().unwrap(), 1);
}

#[test]
fn builder_constructs_a_backend_with_a_custom_clock() {
    let created: chrono::DateTime<chrono::Utc> = "2024-02-10T00:00:00Z".parse().unwrap();
    let backend = InMemoryStore::builder()
        .clock(SequenceClock::new(vec![created]))
        .build()
        .unwrap();

    let mut store = DocumentStore::new(backend);
    let saved = store
        .save(Document::new("Pinned", "Body", author()))
        .unwrap();

    assert_eq!(saved.created, Some(created));
}

#[test]
fn wrapper_works_over_a_borrowed_backend() {
    let mut backend = InMemoryStore::new();

    {
        let mut store = DocumentStore::new(&mut backend);
        store
            .save(Document::new("Borrowed", "Body", author()))
            .unwrap();
    }

    // The wrapped borrow mutated the original backend.
    assert_eq!(backend.count().unwrap(), 1);
    let results = backend.search(&SearchRequest::default()).unwrap();
    assert_eq!(results[0].title, "Borrowed");
}

#[test]
fn into_inner_returns_the_backing_store() {
    let mut store = DocumentStore::new(InMemoryStore::new());
    store
        .save(Document::new("Kept", "Body", author()))
        .unwrap();

    let backend = store.into_inner();
    assert_eq!(backend.count().unwrap(), 1);
}
