//! fyyur-server: venue and artist booking site
//!
//! Lists venues and artists, books artists into venues as shows, and renders
//! everything as HTML pages backed by PostgreSQL.

pub mod db;
pub mod http;
pub mod listing;
pub mod models;

pub use db::{DbError, Store};
pub use http::{build_router, run_server, ServerConfig, ServerError};
