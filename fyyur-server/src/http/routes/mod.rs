//! Route handlers organized by resource

use serde::Deserialize;

pub mod artists;
pub mod home;
pub mod shows;
pub mod venues;

/// Search box shared by the venue and artist listings
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}
