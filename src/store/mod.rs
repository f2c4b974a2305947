//! # Book Store
//!
//! The in-memory book collection and its CRUD operations. This is the
//! canonical state of the whole system: a single ordered sequence of
//! records, transient for the lifetime of the process.
//!
//! # Invariants Enforced
//!
//! - All `id` values in the store are distinct
//! - Next assigned id = max(existing ids) + 1, or 1 when empty
//! - Insertion order is stable until mutated by delete
//! - Every operation holds the store lock for its full duration, so
//!   list/get/create/update/delete each appear atomic to all observers

mod errors;

pub use errors::{StoreError, StoreResult};

use std::sync::Mutex;

use serde::{Deserialize, Serialize};

// ==================
// Records
// ==================

/// A book record. The non-id fields are optional: clients may omit any
/// of them on create/update and the omission is stored verbatim,
/// surfacing as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: u64,
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub copies_available: Option<i64>,
}

/// Client-supplied fields for create and update. Every field defaults to
/// `None` so any subset of keys (including the empty object)
/// deserializes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookFields {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub copies_available: Option<i64>,
}

impl BookFields {
    /// Build a fully-populated payload (handy for callers and tests)
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        copies_available: i64,
    ) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
            genre: Some(genre.into()),
            copies_available: Some(copies_available),
        }
    }

    fn into_book(self, id: u64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            copies_available: self.copies_available,
        }
    }
}

// ==================
// Store
// ==================

/// The in-memory book collection.
///
/// Owned explicitly by the composing process and injected into route
/// handlers; there is no module-level singleton.
#[derive(Debug, Default)]
pub struct BookStore {
    books: Mutex<Vec<Book>>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the fixed initial catalog (ids 1..=3)
    pub fn seeded() -> Self {
        let books = vec![
            BookFields::new("The Great Gatsby", "F. Scott Fitzgerald", "Classic", 5).into_book(1),
            BookFields::new("1984", "George Orwell", "Dystopian", 3).into_book(2),
            BookFields::new("The Hobbit", "J.R.R. Tolkien", "Fantasy", 4).into_book(3),
        ];
        Self {
            books: Mutex::new(books),
        }
    }

    /// Number of books currently stored
    pub fn len(&self) -> usize {
        self.books.lock().unwrap().len()
    }

    /// True when the store holds no books
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the full ordered sequence of books. Side-effect free.
    pub fn list(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }

    /// Return the book with the given id
    pub fn get(&self, id: u64) -> StoreResult<Book> {
        self.books
            .lock()
            .unwrap()
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Append a new book with a freshly assigned id. Never fails: absent
    /// fields are stored as `None`.
    ///
    /// The id is max(existing ids) + 1, computed under the lock. Deleting
    /// the highest-id book and creating again therefore reuses that id;
    /// this matches the original contract and is pinned by tests.
    pub fn create(&self, fields: BookFields) -> Book {
        let mut books = self.books.lock().unwrap();
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        let book = fields.into_book(next_id);
        books.push(book.clone());
        book
    }

    /// Replace the book with the given id. Full-replace (PUT) semantics:
    /// fields absent from the payload overwrite prior values with `None`.
    /// The id and the position in the sequence are preserved.
    pub fn update(&self, id: u64, fields: BookFields) -> StoreResult<Book> {
        let mut books = self.books.lock().unwrap();
        let slot = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(StoreError::NotFound)?;
        *slot = fields.into_book(id);
        Ok(slot.clone())
    }

    /// Remove the book with the given id and return it. Relative order of
    /// the remaining books is preserved.
    pub fn delete(&self, id: u64) -> StoreResult<Book> {
        let mut books = self.books.lock().unwrap();
        let pos = books
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::NotFound)?;
        Ok(books.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_has_three_books() {
        let store = BookStore::seeded();
        let books = store.list();
        assert_eq!(books.len(), 3);
        let ids: Vec<u64> = books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = BookStore::new();
        store.create(BookFields::new("A", "a", "g", 1));
        store.create(BookFields::new("B", "b", "g", 2));
        store.create(BookFields::new("C", "c", "g", 3));
        let titles: Vec<_> = store.list().into_iter().map(|b| b.title).collect();
        assert_eq!(
            titles,
            vec![
                Some("A".to_string()),
                Some("B".to_string()),
                Some("C".to_string())
            ]
        );
    }

    #[test]
    fn test_get_existing_and_missing() {
        let store = BookStore::seeded();
        assert_eq!(store.get(2).unwrap().title, Some("1984".to_string()));
        assert_eq!(store.get(99), Err(StoreError::NotFound));
        assert_eq!(store.get(0), Err(StoreError::NotFound));
    }

    #[test]
    fn test_create_assigns_max_plus_one() {
        let store = BookStore::seeded();
        let book = store.create(BookFields::new("Dune", "Frank Herbert", "Science Fiction", 2));
        assert_eq!(book.id, 4);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn test_create_on_empty_store_starts_at_one() {
        let store = BookStore::new();
        let book = store.create(BookFields::default());
        assert_eq!(book.id, 1);
    }

    #[test]
    fn test_sequential_creates_yield_distinct_ids() {
        let store = BookStore::seeded();
        let a = store.create(BookFields::default());
        let b = store.create(BookFields::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_create_stores_absent_fields_as_none() {
        let store = BookStore::new();
        let book = store.create(BookFields {
            title: Some("Untitled".to_string()),
            ..Default::default()
        });
        assert_eq!(book.author, None);
        assert_eq!(book.genre, None);
        assert_eq!(book.copies_available, None);
    }

    #[test]
    fn test_id_reused_after_deleting_max() {
        let store = BookStore::seeded();
        store.delete(3).unwrap();
        let book = store.create(BookFields::default());
        assert_eq!(book.id, 3);
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let store = BookStore::seeded();
        let updated = store
            .update(
                1,
                BookFields {
                    title: Some("Gatsby, Revised".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.title, Some("Gatsby, Revised".to_string()));
        // Full replace: omitted fields are wiped, not merged.
        assert_eq!(updated.author, None);
        assert_eq!(store.get(1).unwrap(), updated);
    }

    #[test]
    fn test_update_preserves_position() {
        let store = BookStore::seeded();
        store
            .update(2, BookFields::new("1984", "George Orwell", "Dystopian", 7))
            .unwrap();
        let ids: Vec<u64> = store.list().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_missing_leaves_store_unmodified() {
        let store = BookStore::seeded();
        let before = store.list();
        assert_eq!(
            store.update(42, BookFields::default()),
            Err(StoreError::NotFound)
        );
        assert_eq!(store.list(), before);
    }

    #[test]
    fn test_delete_returns_record_and_shrinks() {
        let store = BookStore::seeded();
        let removed = store.delete(2).unwrap();
        assert_eq!(removed.id, 2);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(2), Err(StoreError::NotFound));
        let ids: Vec<u64> = store.list().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_delete_missing_leaves_store_unmodified() {
        let store = BookStore::seeded();
        assert_eq!(store.delete(42), Err(StoreError::NotFound));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_book_serializes_camel_case_with_nulls() {
        let book = Book {
            id: 7,
            title: Some("X".to_string()),
            author: None,
            genre: None,
            copies_available: None,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["copiesAvailable"], serde_json::Value::Null);
        assert!(json.get("copies_available").is_none());
    }

    #[test]
    fn test_fields_deserialize_from_empty_object() {
        let fields: BookFields = serde_json::from_str("{}").unwrap();
        assert_eq!(fields, BookFields::default());
    }
}
