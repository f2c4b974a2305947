//! Book HTTP Routes
//!
//! CRUD endpoints for the books resource, nested under `/api`.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;

use super::errors::ApiError;
use crate::store::{Book, BookFields, BookStore};

// ==================
// Shared State
// ==================

/// Book state shared across handlers
pub struct BookState {
    pub store: BookStore,
}

impl BookState {
    /// State with the seeded catalog
    pub fn new() -> Self {
        Self {
            store: BookStore::seeded(),
        }
    }
}

impl Default for BookState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct DeleteBookResponse {
    pub message: String,
    pub book: Book,
}

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes(state: Arc<BookState>) -> Router {
    Router::new()
        .route("/books", get(list_books_handler))
        .route("/books", post(create_book_handler))
        .route("/books/{id}", get(get_book_handler))
        .route("/books/{id}", put(update_book_handler))
        .route("/books/{id}", delete(delete_book_handler))
        .with_state(state)
}

// ==================
// Helper Functions
// ==================

/// The id segment is taken as a raw string and parsed here: a
/// non-numeric or out-of-range id never matches any record, so it yields
/// the same 404 as a missing one instead of an extractor 400.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>().map_err(|_| ApiError::NotFound)
}

// ==================
// Handlers
// ==================

async fn list_books_handler(State(state): State<Arc<BookState>>) -> Json<Vec<Book>> {
    Json(state.store.list())
}

async fn get_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    let book = state.store.get(id)?;
    Ok(Json(book))
}

async fn create_book_handler(
    State(state): State<Arc<BookState>>,
    Json(fields): Json<BookFields>,
) -> (StatusCode, Json<Book>) {
    let book = state.store.create(fields);
    (StatusCode::CREATED, Json(book))
}

async fn update_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
    Json(fields): Json<BookFields>,
) -> Result<Json<Book>, ApiError> {
    let id = parse_id(&id)?;
    let book = state.store.update(id, fields)?;
    Ok(Json(book))
}

async fn delete_book_handler(
    State(state): State<Arc<BookState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteBookResponse>, ApiError> {
    let id = parse_id(&id)?;
    let book = state.store.delete(id)?;
    Ok(Json(DeleteBookResponse {
        message: "Book deleted successfully".to_string(),
        book,
    }))
}
