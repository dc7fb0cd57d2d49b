//! Landing page and the not-found fallback

use axum::{response::Html, routing::get, Router};

use crate::http::error::PageError;
use crate::http::pages::{render, HomePage};

/// GET / - landing page
async fn index() -> Result<Html<String>, PageError> {
    render(&HomePage { flash: None })
}

/// Fallback for unknown paths
pub async fn not_found() -> PageError {
    PageError::NotFound { flash: None }
}

/// Home routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
