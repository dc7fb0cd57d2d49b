//! Artist form parsing and validation

use serde::Deserialize;

use super::choices;
use super::validation::{optional, required};
use super::ValidationError;

const MAX_NAME_LEN: usize = 255;
const MAX_FIELD_LEN: usize = 120;
const MAX_LINK_LEN: usize = 500;
const MAX_DESCRIPTION_LEN: usize = 500;

/// Raw artist form as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub website_link: Option<String>,
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn seeking_venue(&self) -> bool {
        choices::checkbox(self.seeking_venue.as_deref())
    }
}

/// An artist that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl TryFrom<&ArtistForm> for NewArtist {
    type Error = ValidationError;

    fn try_from(form: &ArtistForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required("name", &form.name, MAX_NAME_LEN)?,
            city: required("city", &form.city, MAX_FIELD_LEN)?,
            state: choices::state(&form.state)?,
            phone: optional("phone", form.phone.as_deref(), MAX_FIELD_LEN)?,
            genres: choices::genres(&form.genres)?,
            image_link: choices::link(
                "image_link",
                optional("image_link", form.image_link.as_deref(), MAX_LINK_LEN)?,
            )?,
            facebook_link: choices::link(
                "facebook_link",
                optional("facebook_link", form.facebook_link.as_deref(), MAX_FIELD_LEN)?,
            )?,
            website_link: choices::link(
                "website_link",
                optional("website_link", form.website_link.as_deref(), MAX_FIELD_LEN)?,
            )?,
            seeking_venue: form.seeking_venue(),
            seeking_description: optional(
                "seeking_description",
                form.seeking_description.as_deref(),
                MAX_DESCRIPTION_LEN,
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guns_n_petals() -> ArtistForm {
        ArtistForm {
            name: "Guns N Petals".into(),
            city: "San Francisco".into(),
            state: "ca".into(),
            phone: Some("326-123-5000".into()),
            genres: vec!["Rock n Roll".into()],
            ..Default::default()
        }
    }

    #[test]
    fn valid_form() {
        let artist = NewArtist::try_from(&guns_n_petals()).unwrap();
        assert_eq!(artist.state, "CA");
        assert_eq!(artist.genres, vec!["Rock n Roll".to_owned()]);
        assert!(!artist.seeking_venue);
    }

    #[test]
    fn genres_stored_as_list() {
        let form = ArtistForm {
            genres: vec!["Jazz".into(), "Blues".into()],
            ..guns_n_petals()
        };
        let artist = NewArtist::try_from(&form).unwrap();
        assert_eq!(artist.genres, vec!["Jazz".to_owned(), "Blues".to_owned()]);
    }

    #[test]
    fn missing_name_rejected() {
        let form = ArtistForm {
            name: String::new(),
            ..guns_n_petals()
        };
        assert_eq!(
            NewArtist::try_from(&form).unwrap_err(),
            ValidationError::Empty { field: "name" }
        );
    }
}
