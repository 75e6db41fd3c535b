//! Catalog management service

use validator::Validate;

use crate::{
    config::CatalogConfig,
    error::AppResult,
    models::book::{Book, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    allow_duplicate_ids: bool,
}

impl CatalogService {
    pub fn new(repository: Repository, config: &CatalogConfig) -> Self {
        Self {
            repository,
            allow_duplicate_ids: config.allow_duplicate_ids,
        }
    }

    /// All books in catalog order
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        Ok(self.repository.books.list_all().await)
    }

    /// Get a book by its identifier
    pub async fn get_book(&self, id: &str) -> AppResult<Book> {
        self.repository.books.find_by_id(id).await
    }

    /// Add a book to the catalog.
    /// Duplicate ids are rejected unless the catalog is configured to accept them.
    pub async fn create_book(&self, new: CreateBook) -> AppResult<Book> {
        new.validate()?;

        let book = Book::from(new);
        let created = if self.allow_duplicate_ids {
            self.repository.books.append(book).await
        } else {
            self.repository.books.insert_unique(book).await.inspect_err(|_| {
                tracing::warn!("Catalog create: rejected duplicate id");
            })?
        };

        tracing::info!(
            "Catalog create: added book id={} quantity={}",
            created.id,
            created.quantity
        );
        Ok(created)
    }

    /// Number of records currently held
    pub async fn count(&self) -> usize {
        self.repository.books.len().await
    }
}
