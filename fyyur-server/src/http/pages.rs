//! Page templates and the view models they render
//!
//! Every page carries an optional flash message shown by the base layout.
//! Times are formatted here so templates only print strings.

use askama::Template;
use axum::response::Html;
use chrono::{DateTime, Utc};

use super::error::PageError;
use crate::db::{Artist, ArtistDetail, ArtistListing, Booking, ShowListing, Venue, VenueDetail};
use crate::listing::{self, DateStyle, Locale, SearchResults, DETAIL_TIME_FORMAT, LISTING_TIME_FORMAT};
use crate::models::choices::{GENRES, STATES};
use crate::models::{ArtistForm, ShowForm, VenueForm};

/// Render a template into an HTML body.
pub fn render<T: Template>(page: &T) -> Result<Html<String>, PageError> {
    Ok(Html(page.render()?))
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomePage {
    pub flash: Option<String>,
}

impl HomePage {
    pub fn with_flash(message: impl Into<String>) -> Self {
        Self {
            flash: Some(message.into()),
        }
    }
}

#[derive(Template)]
#[template(path = "errors/404.html")]
pub struct NotFoundPage {
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "errors/500.html")]
pub struct ServerErrorPage {
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "pages/venues.html")]
pub struct VenuesPage {
    pub flash: Option<String>,
    pub areas: Vec<Locale>,
}

#[derive(Template)]
#[template(path = "pages/artists.html")]
pub struct ArtistsPage {
    pub flash: Option<String>,
    pub artists: Vec<ArtistListing>,
}

/// Search results page, shared by venues and artists.
#[derive(Template)]
#[template(path = "pages/search.html")]
pub struct SearchPage {
    pub flash: Option<String>,
    /// Plural path segment: `venues` or `artists`.
    pub kind: &'static str,
    pub search_term: String,
    pub results: SearchResults,
}

/// One row of a detail page's show table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowEntry {
    pub id: i32,
    pub name: String,
    pub image_link: String,
    pub start_time: String,
    pub when: String,
}

impl From<Booking> for ShowEntry {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.counterpart_id,
            name: booking.counterpart_name,
            image_link: booking.counterpart_image_link.unwrap_or_default(),
            start_time: booking.start_time.format(DETAIL_TIME_FORMAT).to_string(),
            when: listing::format_datetime(booking.start_time, DateStyle::Full),
        }
    }
}

/// Fields shared by the venue and artist detail pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub website_link: String,
    pub facebook_link: String,
    pub image_link: String,
    pub seeking: bool,
    pub seeking_description: String,
    pub past_shows: Vec<ShowEntry>,
    pub upcoming_shows: Vec<ShowEntry>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

#[derive(Template)]
#[template(path = "pages/show_venue.html")]
pub struct VenuePage {
    pub flash: Option<String>,
    pub venue: Profile,
    pub address: String,
}

impl From<VenueDetail> for VenuePage {
    fn from(detail: VenueDetail) -> Self {
        let VenueDetail { venue, shows } = detail;
        let shows = shows.map(ShowEntry::from);
        Self {
            flash: None,
            address: venue.address,
            venue: Profile {
                id: venue.id,
                name: venue.name,
                genres: venue.genres,
                city: venue.city,
                state: venue.state,
                phone: venue.phone.unwrap_or_default(),
                website_link: venue.website_link.unwrap_or_default(),
                facebook_link: venue.facebook_link.unwrap_or_default(),
                image_link: venue.image_link.unwrap_or_default(),
                seeking: venue.seeking_talent,
                seeking_description: venue.seeking_description.unwrap_or_default(),
                past_shows_count: shows.past_count(),
                upcoming_shows_count: shows.upcoming_count(),
                past_shows: shows.past,
                upcoming_shows: shows.upcoming,
            },
        }
    }
}

#[derive(Template)]
#[template(path = "pages/show_artist.html")]
pub struct ArtistPage {
    pub flash: Option<String>,
    pub artist: Profile,
}

impl From<ArtistDetail> for ArtistPage {
    fn from(detail: ArtistDetail) -> Self {
        let ArtistDetail { artist, shows } = detail;
        let shows = shows.map(ShowEntry::from);
        Self {
            flash: None,
            artist: Profile {
                id: artist.id,
                name: artist.name,
                genres: artist.genres,
                city: artist.city,
                state: artist.state,
                phone: artist.phone.unwrap_or_default(),
                website_link: artist.website_link.unwrap_or_default(),
                facebook_link: artist.facebook_link.unwrap_or_default(),
                image_link: artist.image_link.unwrap_or_default(),
                seeking: artist.seeking_venue,
                seeking_description: artist.seeking_description.unwrap_or_default(),
                past_shows_count: shows.past_count(),
                upcoming_shows_count: shows.upcoming_count(),
                past_shows: shows.past,
                upcoming_shows: shows.upcoming,
            },
        }
    }
}

/// Row of the show listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowRow {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: String,
    pub start_time: String,
    pub when: String,
}

impl From<ShowListing> for ShowRow {
    fn from(show: ShowListing) -> Self {
        Self {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link.unwrap_or_default(),
            start_time: show.start_time.format(LISTING_TIME_FORMAT).to_string(),
            when: listing::format_datetime(show.start_time, DateStyle::Medium),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/shows.html")]
pub struct ShowsPage {
    pub flash: Option<String>,
    pub shows: Vec<ShowRow>,
}

/// `<option>` or checkbox entry with its selection state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub selected: bool,
}

fn choices(all: &[&'static str], selected: impl Fn(&str) -> bool) -> Vec<Choice> {
    all.iter()
        .map(|&value| Choice {
            value,
            selected: selected(value),
        })
        .collect()
}

fn state_choices(current: &str) -> Vec<Choice> {
    choices(STATES, |s| s.eq_ignore_ascii_case(current.trim()))
}

fn genre_choices(current: &[String]) -> Vec<Choice> {
    choices(GENRES, |g| current.iter().any(|c| c.trim().eq_ignore_ascii_case(g)))
}

/// Whether a form creates a record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { id: i32 },
}

impl FormMode {
    fn action(self, kind: &str) -> String {
        match self {
            Self::Create => format!("/{kind}/create"),
            Self::Edit { id } => format!("/{kind}/{id}/edit"),
        }
    }
}

#[derive(Template)]
#[template(path = "forms/venue.html")]
pub struct VenueFormPage {
    pub flash: Option<String>,
    pub editing: bool,
    pub action: String,
    pub name: String,
    pub city: String,
    pub address: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_talent: bool,
    pub seeking_description: String,
    pub states: Vec<Choice>,
    pub genres: Vec<Choice>,
}

impl VenueFormPage {
    pub fn new(form: &VenueForm, mode: FormMode) -> Self {
        Self {
            flash: None,
            editing: matches!(mode, FormMode::Edit { .. }),
            action: mode.action("venues"),
            name: form.name.clone(),
            city: form.city.clone(),
            address: form.address.clone(),
            phone: form.phone.clone().unwrap_or_default(),
            image_link: form.image_link.clone().unwrap_or_default(),
            facebook_link: form.facebook_link.clone().unwrap_or_default(),
            website_link: form.website_link.clone().unwrap_or_default(),
            seeking_talent: form.seeking_talent(),
            seeking_description: form.seeking_description.clone().unwrap_or_default(),
            states: state_choices(&form.state),
            genres: genre_choices(&form.genres),
        }
    }

    pub fn flash(mut self, message: impl Into<String>) -> Self {
        self.flash = Some(message.into());
        self
    }
}

impl From<&Venue> for VenueForm {
    fn from(venue: &Venue) -> Self {
        Self {
            name: venue.name.clone(),
            city: venue.city.clone(),
            state: venue.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            genres: venue.genres.clone(),
            image_link: venue.image_link.clone(),
            facebook_link: venue.facebook_link.clone(),
            website_link: venue.website_link.clone(),
            seeking_talent: venue.seeking_talent.then(|| "y".to_string()),
            seeking_description: venue.seeking_description.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "forms/artist.html")]
pub struct ArtistFormPage {
    pub flash: Option<String>,
    pub editing: bool,
    pub action: String,
    pub name: String,
    pub city: String,
    pub phone: String,
    pub image_link: String,
    pub facebook_link: String,
    pub website_link: String,
    pub seeking_venue: bool,
    pub seeking_description: String,
    pub states: Vec<Choice>,
    pub genres: Vec<Choice>,
}

impl ArtistFormPage {
    pub fn new(form: &ArtistForm, mode: FormMode) -> Self {
        Self {
            flash: None,
            editing: matches!(mode, FormMode::Edit { .. }),
            action: mode.action("artists"),
            name: form.name.clone(),
            city: form.city.clone(),
            phone: form.phone.clone().unwrap_or_default(),
            image_link: form.image_link.clone().unwrap_or_default(),
            facebook_link: form.facebook_link.clone().unwrap_or_default(),
            website_link: form.website_link.clone().unwrap_or_default(),
            seeking_venue: form.seeking_venue(),
            seeking_description: form.seeking_description.clone().unwrap_or_default(),
            states: state_choices(&form.state),
            genres: genre_choices(&form.genres),
        }
    }

    pub fn flash(mut self, message: impl Into<String>) -> Self {
        self.flash = Some(message.into());
        self
    }
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            city: artist.city.clone(),
            state: artist.state.clone(),
            phone: artist.phone.clone(),
            genres: artist.genres.clone(),
            image_link: artist.image_link.clone(),
            facebook_link: artist.facebook_link.clone(),
            website_link: artist.website_link.clone(),
            seeking_venue: artist.seeking_venue.then(|| "y".to_string()),
            seeking_description: artist.seeking_description.clone(),
        }
    }
}

#[derive(Template)]
#[template(path = "forms/show.html")]
pub struct ShowFormPage {
    pub flash: Option<String>,
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowFormPage {
    pub fn new(form: &ShowForm) -> Self {
        Self {
            flash: None,
            artist_id: form.artist_id.clone(),
            venue_id: form.venue_id.clone(),
            start_time: form.start_time.clone(),
        }
    }

    pub fn blank(now: DateTime<Utc>) -> Self {
        Self::new(&ShowForm::starting_at(now))
    }

    pub fn flash(mut self, message: impl Into<String>) -> Self {
        self.flash = Some(message.into());
        self
    }
}
