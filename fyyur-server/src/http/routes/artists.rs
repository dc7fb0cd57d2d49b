//! Artist pages

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
use crate::http::error::PageError;
use crate::http::extractors::EntityId;
use crate::http::pages::{render, ArtistFormPage, ArtistPage, ArtistsPage, FormMode, HomePage, SearchPage};
use crate::http::server::AppState;
use crate::models::{ArtistForm, NewArtist};

/// GET /artists - every artist by id
async fn list_artists(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let artists = state.store.artists().list().await?;
    render(&ArtistsPage { flash: None, artists })
}

/// POST /artists/search - case-insensitive name search
async fn search_artists(
    State(state): State<Arc<AppState>>,
    Form(search): Form<SearchForm>,
) -> Result<Html<String>, PageError> {
    let results = state.store.artists().search(&search.search_term, Utc::now()).await?;
    render(&SearchPage {
        flash: None,
        kind: "artists",
        search_term: search.search_term,
        results,
    })
}

/// GET /artists/{id} - artist with past and upcoming shows
async fn show_artist(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Html<String>, PageError> {
    let detail = state.store.artists().detail(id, Utc::now()).await?;
    render(&ArtistPage::from(detail))
}

/// GET /artists/create
async fn new_artist_form() -> Result<Html<String>, PageError> {
    render(&ArtistFormPage::new(&ArtistForm::default(), FormMode::Create))
}

/// POST /artists/create
async fn create_artist(
    State(state): State<Arc<AppState>>,
    MultiForm(form): MultiForm<ArtistForm>,
) -> Result<Response, PageError> {
    let artist = match NewArtist::try_from(&form) {
        Ok(artist) => artist,
        Err(e) => {
            tracing::debug!(error = %e, "artist form rejected");
            let page = ArtistFormPage::new(&form, FormMode::Create).flash(e.to_string());
            return Ok((StatusCode::BAD_REQUEST, render(&page)?).into_response());
        }
    };

    match state.store.artists().create(artist).await {
        Ok(created) => {
            tracing::info!(id = created.id, name = %created.name, "artist listed");
            let flash = format!("Artist {} was successfully listed!", created.name);
            Ok(render(&HomePage::with_flash(flash))?.into_response())
        }
        Err(e) => {
            tracing::error!(error = %e, name = %form.name, "artist insert failed");
            Err(PageError::failed(format!(
                "An error occurred. Artist {} could not be listed.",
                form.name.trim()
            )))
        }
    }
}

/// GET /artists/{id}/edit
async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Html<String>, PageError> {
    let artist = state.store.artists().get(id).await?;
    render(&ArtistFormPage::new(&ArtistForm::from(&artist), FormMode::Edit { id }))
}

/// POST /artists/{id}/edit - redirect only, nothing is stored
async fn edit_artist(EntityId(id): EntityId) -> Redirect {
    Redirect::to(&format!("/artists/{id}"))
}

/// Artist routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(new_artist_form).post(create_artist))
        .route("/artists/{id}", get(show_artist))
        .route("/artists/{id}/edit", get(edit_artist_form).post(edit_artist))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::LOCATION;

    #[tokio::test]
    async fn edit_redirects_to_detail() {
        let response = edit_artist(EntityId(12)).await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/artists/12");
    }
}
