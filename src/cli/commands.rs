//! CLI command implementations
//!
//! `serve` follows a strict boot order: resolve configuration, load the
//! books document, then bind. A document that exists but cannot be read
//! stops the process before any request is served.

use std::path::PathBuf;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::BookStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::logging::init_tracing;

/// Parse arguments, install logging, and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    init_tracing("info");
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { db } => init(db),
        Command::Serve { host, port, db } => serve(host, port, db),
    }
}

/// Build the server configuration from the environment, then flags
pub fn resolve_config(
    host: Option<String>,
    port: Option<u16>,
    db: Option<PathBuf>,
) -> CliResult<HttpServerConfig> {
    let mut config = HttpServerConfig::from_env()?;

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(db) = db {
        config.db_path = db;
    }

    Ok(config)
}

/// Create an empty books document
///
/// Refuses to touch an existing file.
pub fn init(db: Option<PathBuf>) -> CliResult<()> {
    let config = resolve_config(None, None, db)?;
    let path = config.db_path;

    if path.exists() {
        return Err(CliError::already_initialized(&path));
    }

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::io_error(format!("Failed to create tokio runtime: {}", e)))?;
    rt.block_on(BookStore::empty(&path).persist())?;
    tracing::info!(path = %path.display(), "books document created");

    Ok(())
}

/// Load the books document and serve the HTTP API until shutdown
pub fn serve(host: Option<String>, port: Option<u16>, db: Option<PathBuf>) -> CliResult<()> {
    let config = resolve_config(host, port, db)?;

    let store = BookStore::load(&config.db_path).map_err(|e| {
        tracing::error!(error = %e, "cannot load books document");
        CliError::boot_failed(e.to_string())
    })?;

    let server = HttpServer::new(config, store);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(server.start())?;

    Ok(())
}
