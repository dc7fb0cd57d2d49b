//! Venue form parsing and validation

use serde::Deserialize;

use super::choices;
use super::validation::{optional, required};
use super::ValidationError;

const MAX_NAME_LEN: usize = 255;
const MAX_FIELD_LEN: usize = 120;
const MAX_LINK_LEN: usize = 500;
const MAX_DESCRIPTION_LEN: usize = 500;

/// Raw venue form as submitted by the browser.
///
/// Every field defaults so that a partially filled form still decodes and
/// can be re-rendered with a validation message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
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
    pub seeking_talent: Option<String>,
    #[serde(default)]
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Whether the seeking-talent checkbox was ticked.
    pub fn seeking_talent(&self) -> bool {
        choices::checkbox(self.seeking_talent.as_deref())
    }
}

/// A venue that passed validation and is ready to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl TryFrom<&VenueForm> for NewVenue {
    type Error = ValidationError;

    fn try_from(form: &VenueForm) -> Result<Self, Self::Error> {
        Ok(Self {
            name: required("name", &form.name, MAX_NAME_LEN)?,
            city: required("city", &form.city, MAX_FIELD_LEN)?,
            state: choices::state(&form.state)?,
            address: required("address", &form.address, MAX_FIELD_LEN)?,
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
            seeking_talent: form.seeking_talent(),
            seeking_description: optional(
                "seeking_description",
                form.seeking_description.as_deref(),
                MAX_DESCRIPTION_LEN,
            )?,
        })
    }
}
