//! # HTTP Errors
//!
//! Request-level and server-level error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Result type for book handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by book handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// No book with the requested id
    #[error("Book not found")]
    NotFound,

    /// The store failed to persist the document
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Not-found carries no body
            ApiError::NotFound => self.status_code().into_response(),
            ApiError::Store(_) => {
                tracing::error!(error = %self, "book request failed");
                let body = Json(ErrorResponse::from(&self));
                (self.status_code(), body).into_response()
            }
        }
    }
}

/// Errors that stop the server from starting or running
#[derive(Debug, Error)]
pub enum HttpServerError {
    /// Invalid server configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Listener or connection failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
