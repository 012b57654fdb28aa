//! library-api - books CRUD over a flat-file JSON store
//!
//! The [`store`] owns the persisted document and its in-memory mirror; the
//! [`http_server`] maps HTTP requests onto store operations.

pub mod cli;
pub mod http_server;
pub mod id;
pub mod store;
