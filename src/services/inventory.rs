//! Checkout and return of book copies

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct InventoryService {
    repository: Repository,
}

impl InventoryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Take one copy off the shelf. Refused when none are left.
    pub async fn checkout(&self, id: &str) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .update_by_id(id, |book| {
                if book.quantity == 0 {
                    return Err(AppError::book_unavailable());
                }
                book.quantity -= 1;
                Ok(())
            })
            .await
            .inspect_err(|e| tracing::warn!("Checkout refused for id={}: {}", id, e))?;

        tracing::info!("Checked out book id={} (remaining={})", book.id, book.quantity);
        Ok(book)
    }

    /// Put one copy back on the shelf
    pub async fn return_copy(&self, id: &str) -> AppResult<Book> {
        let book = self
            .repository
            .books
            .update_by_id(id, |book| {
                book.quantity = book.quantity.checked_add(1).ok_or_else(|| {
                    AppError::Validation("Book quantity is at its maximum.".to_string())
                })?;
                Ok(())
            })
            .await
            .inspect_err(|e| tracing::warn!("Return refused for id={}: {}", id, e))?;

        tracing::info!("Returned book id={} (available={})", book.id, book.quantity);
        Ok(book)
    }
}
