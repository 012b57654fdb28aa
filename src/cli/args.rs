//! CLI argument definitions using clap
//!
//! Commands:
//! - library-api init [--db <path>]
//! - library-api serve [--host <host>] [--port <port>] [--db <path>]
//!
//! Flags override the `PORT` and `LIBRARY_DB_PATH` environment variables.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Library API - books CRUD over a JSON file
#[derive(Parser, Debug)]
#[command(name = "library-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty books document
    Init {
        /// Path to the books JSON file
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Serve the books API over HTTP
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(long)]
        port: Option<u16>,

        /// Path to the books JSON file
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_flags() {
        let cli = Cli::try_parse_from([
            "library-api",
            "serve",
            "--port",
            "8080",
            "--db",
            "/tmp/books.json",
        ])
        .unwrap();

        match cli.command {
            Command::Serve { host, port, db } => {
                assert_eq!(host, None);
                assert_eq!(port, Some(8080));
                assert_eq!(db, Some(PathBuf::from("/tmp/books.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_without_flags() {
        let cli = Cli::try_parse_from(["library-api", "serve"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Serve { host: None, port: None, db: None }
        ));
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["library-api", "serve", "--port", "abc"]).is_err());
    }
}
