//! Page errors with IntoResponse
//!
//! Errors render the 404 or 500 page with an optional flash message.
//! Database and template failures are logged and shown generically.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::pages::{NotFoundPage, ServerErrorPage};
use crate::db::DbError;
use askama::Template;

/// Page error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum PageError {
    /// Missing record or unknown path (404)
    NotFound { flash: Option<String> },

    /// An operation failed and the user is told which (500)
    Failed { flash: String },

    /// Database error (500, logged)
    Database(DbError),

    /// Template rendering failed (500, logged)
    Render(askama::Error),
}

impl PageError {
    pub fn not_found(flash: impl Into<String>) -> Self {
        Self::NotFound {
            flash: Some(flash.into()),
        }
    }

    pub fn failed(flash: impl Into<String>) -> Self {
        Self::Failed {
            flash: flash.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        let rendered = match self {
            Self::NotFound { flash } => NotFoundPage { flash }.render(),
            Self::Failed { flash } => ServerErrorPage { flash: Some(flash) }.render(),
            Self::Database(e) => {
                // Log the actual error, show a generic page
                tracing::error!("Database error: {}", e);
                ServerErrorPage { flash: None }.render()
            }
            Self::Render(e) => {
                tracing::error!("Template error: {}", e);
                ServerErrorPage { flash: None }.render()
            }
        };

        match rendered {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!("Error page failed to render: {}", e);
                (status, "an internal error occurred").into_response()
            }
        }
    }
}

impl From<DbError> for PageError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => {
                Self::not_found(format!("{} with id {} is not present!", capitalize(resource), id))
            }
            _ => Self::Database(e),
        }
    }
}

impl From<askama::Error> for PageError {
    fn from(e: askama::Error) -> Self {
        Self::Render(e)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
