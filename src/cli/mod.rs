//! CLI module for bookshelf
//!
//! Provides the command-line interface:
//! - serve: boot the HTTP server and block until it exits

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, serve};
pub use errors::{CliError, CliResult};
