//! # Store Errors
//!
//! Error types for the book store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Book store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No book matches the referenced id
    #[error("Book not found")]
    NotFound,
}
