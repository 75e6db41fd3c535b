//! In-memory book store.
//!
//! All records live in one `Vec` behind a single `RwLock`. Lookups scan in
//! insertion order and the first matching id wins. Every mutation holds the
//! write lock for its whole check-and-update step.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
};

#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<Vec<Book>>>,
}

impl BooksRepository {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(RwLock::new(books)),
        }
    }

    // =========================================================================
    // READ
    // =========================================================================

    /// Snapshot of every record, in insertion order
    pub async fn list_all(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    /// First record whose id equals `id`
    pub async fn find_by_id(&self, id: &str) -> AppResult<Book> {
        self.books
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(AppError::book_not_found)
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }

    // =========================================================================
    // WRITE
    // =========================================================================

    /// Append without checking for an existing id
    pub async fn append(&self, book: Book) -> Book {
        self.books.write().await.push(book.clone());
        book
    }

    /// Append unless a record with the same id already exists
    pub async fn insert_unique(&self, book: Book) -> AppResult<Book> {
        let mut books = self.books.write().await;
        if books.iter().any(|b| b.id == book.id) {
            return Err(AppError::Conflict(
                "Book with this ID already exists.".to_string(),
            ));
        }
        books.push(book.clone());
        Ok(book)
    }

    /// Run `update` on the first record with this id while holding the write lock.
    ///
    /// `update` works on a scratch copy; the stored record only changes when it
    /// returns `Ok`.
    pub async fn update_by_id<F>(&self, id: &str, update: F) -> AppResult<Book>
    where
        F: FnOnce(&mut Book) -> AppResult<()>,
    {
        let mut books = self.books.write().await;
        let slot = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(AppError::book_not_found)?;

        let mut updated = slot.clone();
        update(&mut updated)?;
        *slot = updated.clone();
        Ok(updated)
    }
}
