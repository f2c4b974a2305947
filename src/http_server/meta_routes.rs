//! Meta HTTP Routes
//!
//! The root index (API directory) and the health check.

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Create the root index route
pub fn index_routes() -> Router {
    Router::new().route("/", get(index_handler))
}

/// Health check route at root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Index handler: a human-readable directory of the API
async fn index_handler() -> impl IntoResponse {
    Json(json!({
        "message": "Welcome to the Bookshelf API",
        "endpoints": {
            "list": "GET /api/books",
            "get": "GET /api/books/:id",
            "create": "POST /api/books",
            "update": "PUT /api/books/:id",
            "delete": "DELETE /api/books/:id",
        },
    }))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
