//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;

use crate::http_server::HttpServerError;
use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Invalid configuration (environment or flags)
    ConfigError,
    /// I/O error
    IoError,
    /// Books document already exists
    AlreadyInitialized,
    /// Books document could not be loaded at startup
    BootFailed,
    /// Server stopped with an error
    ServeFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "LIBRARY_CLI_CONFIG_ERROR",
            Self::IoError => "LIBRARY_CLI_IO_ERROR",
            Self::AlreadyInitialized => "LIBRARY_CLI_ALREADY_INITIALIZED",
            Self::BootFailed => "LIBRARY_CLI_BOOT_FAILED",
            Self::ServeFailed => "LIBRARY_CLI_SERVE_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Already initialized
    pub fn already_initialized(path: &std::path::Path) -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            format!("Books document already exists at {}", path.display()),
        )
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Serve failed
    pub fn serve_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServeFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<HttpServerError> for CliError {
    fn from(e: HttpServerError) -> Self {
        match e {
            HttpServerError::Config(msg) => Self::config_error(msg),
            HttpServerError::Io(e) => Self::serve_failed(e.to_string()),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::boot_failed("db.json unreadable");
        assert_eq!(err.to_string(), "LIBRARY_CLI_BOOT_FAILED: db.json unreadable");
        assert_eq!(err.code(), &CliErrorCode::BootFailed);
    }

    #[test]
    fn test_server_config_error_maps_to_config_code() {
        let err = CliError::from(HttpServerError::Config("Invalid PORT".to_string()));
        assert_eq!(err.code_str(), "LIBRARY_CLI_CONFIG_ERROR");
        assert_eq!(err.message(), "Invalid PORT");
    }
}
