//! CLI command implementations

use log::info;

use super::args::{Cli, Command};
use super::errors::CliResult;
use crate::http_server::{HttpServer, HttpServerConfig};

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    pretty_env_logger::init();

    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { host, port } => serve(host, port),
    }
}

/// Boot the HTTP server and block until it exits
pub fn serve(host: String, port: u16) -> CliResult<()> {
    let config = HttpServerConfig {
        host,
        port,
        ..Default::default()
    };

    info!("bookshelf {} serving on {}", env!("CARGO_PKG_VERSION"), config.socket_addr());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(HttpServer::with_config(config).start())?;

    Ok(())
}
