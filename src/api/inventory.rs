//! Checkout and return endpoints

use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookIdQuery},
    AppState,
};

use super::ApiQuery;

fn required_id(query: BookIdQuery) -> AppResult<String> {
    query.id.ok_or_else(AppError::missing_id)
}

/// Check out one copy of a book
#[utoipa::path(
    patch,
    path = "/checkout",
    tag = "inventory",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Book checked out", body = Book),
        (status = 400, description = "Missing or malformed ID, or no copies left", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BookIdQuery>,
) -> AppResult<Json<Book>> {
    let id = required_id(query)?;
    let book = state.services.inventory.checkout(&id).await?;
    Ok(Json(book))
}

/// Return one copy of a book
#[utoipa::path(
    patch,
    path = "/return",
    tag = "inventory",
    params(BookIdQuery),
    responses(
        (status = 200, description = "Book returned", body = Book),
        (status = 400, description = "Missing or malformed ID", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BookIdQuery>,
) -> AppResult<Json<Book>> {
    let id = required_id(query)?;
    let book = state.services.inventory.return_copy(&id).await?;
    Ok(Json(book))
}
