//! Venue pages

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::Form as MultiForm;
use chrono::Utc;

use super::SearchForm;
use crate::db::DbError;
use crate::http::error::PageError;
use crate::http::extractors::EntityId;
use crate::http::pages::{render, FormMode, HomePage, SearchPage, VenueFormPage, VenuePage, VenuesPage};
use crate::http::server::AppState;
use crate::models::{NewVenue, VenueForm};

/// GET /venues - venues grouped by state and city
async fn list_venues(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let areas = state.store.venues().list_by_locale(Utc::now()).await?;
    render(&VenuesPage { flash: None, areas })
}

/// POST /venues/search - case-insensitive name search
async fn search_venues(
    State(state): State<Arc<AppState>>,
    Form(search): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let results = state.store.venues().search(&search.search_term, Utc::now()).await?;
    render(&SearchPage {
        flash: None,
        kind: "venues",
        search_term: search.search_term,
        results,
    })
}

/// GET /venues/{id} - venue with past and upcoming shows
async fn show_venue(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Html<String>, PageError> {
    let detail = state.store.venues().detail(id, Utc::now()).await?;
    render(&VenuePage::from(detail))
}

/// GET /venues/create - empty venue form
async fn new_venue_form() -> Result<Html<String>, PageError> {
    render(&VenueFormPage::new(&VenueForm::default(), FormMode::Create))
}

/// POST /venues/create - validate and insert a venue
async fn create_venue(
    State(state): State<Arc<AppState>>,
    MultiForm(form): MultiForm<VenueForm>,
) -> Result<Response, PageError> {
    let venue = match NewVenue::try_from(&form) {
        Ok(venue) => venue,
        Err(e) => {
            tracing::debug!(error = %e, "venue form rejected");
            let page = VenueFormPage::new(&form, FormMode::Create).flash(e.to_string());
            return Ok((StatusCode::BAD_REQUEST, render(&page)?).into_response());
        }
    };

    match state.store.venues().create(venue).await {
        Ok(created) => {
            tracing::info!(id = created.id, name = %created.name, "venue listed");
            let flash = format!("Venue {} was successfully listed!", created.name);
            Ok(render(&HomePage::with_flash(flash))?.into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, name = %form.name, "venue insert failed");
            Err(PageError::failed(format!(
                "An error occurred. Venue {} could not be listed.",
                form.name.trim()
            )))
        }
    }
}

/// DELETE /venues/{id} - delete a venue and its shows
async fn delete_venue(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Html<String>, PageError> {
    match state.store.venues().delete(id).await {
        Ok(venue) => {
            tracing::info!(id, name = %venue.name, "venue deleted");
            render(&HomePage::with_flash(format!("Venue with id {id} is deleted")))
        }
        Err(DbError::NotFound { .. }) => {
            tracing::warn!(id, "delete requested for missing venue");
            Err(PageError::not_found(format!("Venue with id {id} is not present!")))
        }
        Err(e) => {
            tracing::error!(error = %e, id, "venue delete failed");
            Err(PageError::failed(format!(
                "An error occurred. Venue with id {id} could not be deleted."
            )))
        }
    }
}

/// GET /venues/{id}/edit - venue form filled from the stored record
async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Html<String>, PageError> {
    let venue = state.store.venues().get(id).await?;
    render(&VenueFormPage::new(&VenueForm::from(&venue), FormMode::Edit { id }))
}

/// POST /venues/{id}/edit - no update is stored; back to the detail page
async fn edit_venue(EntityId(id): EntityId) -> Redirect {
    Redirect::to(&format!("/venues/{id}"))
}

/// Venue routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(new_venue_form).post(create_venue))
        .route("/venues/{id}", get(show_venue).delete(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue_form).post(edit_venue))
}
