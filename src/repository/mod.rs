//! Repository layer for the in-memory catalog

pub mod books;

use crate::models::book::Book;

/// Main repository struct holding the stores
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository over the given records
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books::BooksRepository::new(books),
        }
    }

    /// Repository holding the starter catalog
    pub fn seeded() -> Self {
        Self::new(Book::starter_set())
    }
}
