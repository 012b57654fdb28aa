//! CLI module for the library API
//!
//! Provides command-line interface for:
//! - init: Create an empty books document
//! - serve: Load the document and serve the HTTP API

mod args;
mod commands;
mod errors;
mod logging;

pub use args::{Cli, Command};
pub use commands::{init, resolve_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use logging::init_tracing;
