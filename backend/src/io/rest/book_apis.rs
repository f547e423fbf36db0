//! # REST API for Book Management
//!
//! Endpoints for creating, listing, retrieving and deleting books.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    response::Json,
    routing::get,
    Router,
};
use shared::{Book, CreateBookRequest};
use tracing::debug;

use crate::io::rest::errors::RestError;
use crate::io::rest::mappers::book_mapper::BookMapper;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", get(list_books).post(create_book))
        .route("/books/:id", get(get_book).delete(delete_book))
}

/// List all books
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, RestError> {
    debug!("GET /books");

    let books = state.book_service.list_books().await?;
    Ok(Json(BookMapper::to_dtos(books)))
}

/// Create a new book
pub async fn create_book(
    State(state): State<AppState>,
    request: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<Json<Book>, RestError> {
    let Json(request) = request?;
    debug!("POST /books - request: {:?}", request);

    let book = state.book_service.create_book(request).await?;
    Ok(Json(BookMapper::to_dto(book)))
}

/// Get a book by ID
pub async fn get_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Book>, RestError> {
    let Path(id) = id?;
    debug!("GET /books/{}", id);

    let book = state.book_service.get_book(id).await?;
    Ok(Json(BookMapper::to_dto(book)))
}

/// Delete a book by ID
pub async fn delete_book(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<&'static str, RestError> {
    let Path(id) = id?;
    debug!("DELETE /books/{}", id);

    Ok(state.book_service.delete_book(id).await?)
}
