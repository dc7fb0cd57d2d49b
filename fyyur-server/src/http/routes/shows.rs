//! Show pages

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use chrono::Utc;

use crate::db::DbError;
use crate::http::error::PageError;
use crate::http::pages::{render, HomePage, ShowFormPage, ShowRow, ShowsPage};
use crate::http::server::AppState;
use crate::models::{NewShow, ShowForm};

const SHOW_FAILED: &str = "An error occurred. Show could not be listed.";

/// GET /shows - every show, grouped by venue and ordered by start
async fn list_shows(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let shows = state.store.shows().list().await?;
    render(&ShowsPage {
        flash: None,
        shows: shows.into_iter().map(ShowRow::from).collect(),
    })
}

/// GET /shows/create - form with start time pre-filled to now
async fn new_show_form() -> Result<Html<String>, PageError> {
    render(&ShowFormPage::blank(Utc::now()))
}

/// POST /shows/create - book an artist at a venue
async fn create_show(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ShowForm>,
) -> Result<Response, PageError> {
    let show = match NewShow::try_from(&form) {
        Ok(show) => show,
        Err(e) => {
            tracing::debug!(error = %e, "show form rejected");
            let page = ShowFormPage::new(&form).flash(e.to_string());
            return Ok((StatusCode::BAD_REQUEST, render(&page)?).into_response());
        }
    };

    match state.store.shows().create(show).await {
        Ok(created) => {
            tracing::info!(
                id = created.id,
                artist_id = created.artist_id,
                venue_id = created.venue_id,
                "show listed"
            );
            Ok(render(&HomePage::with_flash("Show was successfully listed!"))?.into_response())
        }
        Err(DbError::NotFound { resource, id }) => {
            tracing::warn!(resource, id = %id, "show references a missing record");
            Err(PageError::failed(SHOW_FAILED))
        }
        Err(e) => {
            tracing::error!(error = %e, "show insert failed");
            Err(PageError::failed(SHOW_FAILED))
        }
    }
}

/// Show routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(new_show_form).post(create_show))
}
