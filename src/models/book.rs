//! Book (catalog record) model and related types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A catalog record with its count of copies on the shelf
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Catalog identifier
    pub id: String,
    pub title: String,
    pub author: String,
    /// Copies currently available for checkout
    pub quantity: u32,
}

impl Book {
    pub fn new(id: &str, title: &str, author: &str, quantity: u32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            quantity,
        }
    }

    /// Starter catalog loaded at startup
    pub fn starter_set() -> Vec<Book> {
        vec![
            Book::new("1", "Little Women", "Louisa May Alcott", 3),
            Book::new("2", "Pride, Price and Prejudice", "Jane Austen", 1),
            Book::new("3", "Red Rising", "Pierce Brown", 4),
            Book::new("4", "The Master and Margarita", "Mikhail Bulgakov", 2),
        ]
    }
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "Book id is required"))]
    pub id: String,
    #[validate(length(min = 1, message = "Book title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Book author is required"))]
    pub author: String,
    #[serde(default)]
    pub quantity: u32,
}

impl From<CreateBook> for Book {
    fn from(new: CreateBook) -> Self {
        Self {
            id: new.id,
            title: new.title,
            author: new.author,
            quantity: new.quantity,
        }
    }
}

/// Query string for checkout and return
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookIdQuery {
    /// Book identifier
    pub id: Option<String>,
}
