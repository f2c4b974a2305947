//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use log::info;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use super::book_routes::{book_routes, BookState};
use super::config::HttpServerConfig;
use super::errors::ServerError;
use super::meta_routes::{health_routes, index_routes};

/// HTTP server for the bookshelf API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig) -> Router {
        // The store lives here, owned by the router's state; handlers
        // receive it by injection rather than reading ambient state.
        let book_state = Arc::new(BookState::new());

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Index and health check at root level
            .merge(index_routes())
            .merge(health_routes())
            // Book CRUD under /api
            .nest("/api", book_routes(book_state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), ServerError> {
        let addr: SocketAddr = self.config.socket_addr().parse()?;

        info!("Starting bookshelf HTTP server on {}", addr);
        info!("Health check: http://{}/health", addr);
        info!("Books API: http://{}/api/books", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
