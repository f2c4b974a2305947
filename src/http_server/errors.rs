//! # HTTP Server Errors
//!
//! Error types for the HTTP API and server startup.

use std::net::AddrParseError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// API errors surfaced to HTTP clients
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No book matches the referenced id. Covers malformed ids too: an
    /// unparsable id never matches any record and collapses to the same
    /// 404, never a 400.
    #[error("Book not found")]
    NotFound,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => ApiError::NotFound,
        }
    }
}

/// Error response body. Exactly `{"error": "..."}` — the 404 contract
/// promises no other keys.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(self));
        (status, body).into_response()
    }
}

/// Errors that abort server startup
#[derive(Debug, Error)]
pub enum ServerError {
    /// The configured host/port did not parse as a socket address
    #[error("Invalid bind address: {0}")]
    InvalidAddr(#[from] AddrParseError),

    /// Binding or serving failed
    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
