//! CLI-specific error types

use thiserror::Error;

use crate::http_server::ServerError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Failed to build the tokio runtime
    #[error("Runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    /// The server failed to start or exited with an error
    #[error("{0}")]
    Server(#[from] ServerError),
}
