//! HTTP Server Configuration
//!
//! Configuration for the HTTP server including host, port, backing file, and
//! CORS settings. Values come from defaults, then the environment, then CLI
//! flags.

use std::path::PathBuf;

use super::errors::HttpServerError;

/// Environment variable selecting the listening port
pub const PORT_ENV: &str = "PORT";

/// Environment variable selecting the backing JSON file
pub const DB_PATH_ENV: &str = "LIBRARY_DB_PATH";

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    pub host: String,

    /// Port to bind to (default: 4000)
    pub port: u16,

    /// Backing JSON file (default: "db.json")
    pub db_path: PathBuf,

    /// CORS allowed origins; empty allows any origin
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4000
}

fn default_db_path() -> PathBuf {
    PathBuf::from("db.json")
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            db_path: default_db_path(),
            cors_origins: Vec::new(),
        }
    }
}

impl HttpServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Defaults overridden by `PORT` and `LIBRARY_DB_PATH`
    pub fn from_env() -> Result<Self, HttpServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but reading variables through `lookup`
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HttpServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(port) = var(PORT_ENV) {
            config.port = port.trim().parse().map_err(|_| {
                HttpServerError::Config(format!("Invalid {}: '{}'", PORT_ENV, port))
            })?;
        }

        if let Some(path) = var(DB_PATH_ENV) {
            config.db_path = PathBuf::from(path);
        }

        Ok(config)
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
