//! # Bookshelf HTTP Server Module
//!
//! Axum server exposing the book store over HTTP.
//!
//! # Endpoints
//!
//! - `/` - API index
//! - `/health` - Health check
//! - `/api/books` - Book CRUD

pub mod book_routes;
pub mod config;
pub mod errors;
pub mod meta_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ServerError};
pub use server::HttpServer;
