//! HTTP layer
//!
//! Axum server with:
//! - HTML pages rendered from askama templates
//! - Request tracing and a per-request timeout
//! - Graceful shutdown
//! - 404 and 500 error pages

pub mod error;
pub mod extractors;
pub mod pages;
pub mod routes;
pub mod server;

pub use error::PageError;
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
