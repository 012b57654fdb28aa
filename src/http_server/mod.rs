//! # Library HTTP Server Module
//!
//! HTTP surface of the books service, combining all endpoint routers into a
//! single Axum server.
//!
//! # Endpoints
//!
//! - `/` - Plain-text liveness
//! - `/health` - Health check
//! - `/api-docs` - OpenAPI document
//! - `/books`, `/books/:id` - Books CRUD

pub mod book_routes;
pub mod config;
pub mod docs_routes;
pub mod errors;
pub mod observability_routes;
pub mod server;

pub use book_routes::{book_routes, BookState};
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, HttpServerError};
pub use server::HttpServer;
