//! Form models with validation at construction
//!
//! Submitted forms decode into the lenient `*Form` types, which convert into
//! the `New*` records with `TryFrom`. Invalid input returns
//! `ValidationError`, never a panic.

pub mod artist;
pub mod choices;
pub mod show;
pub mod validation;
pub mod venue;

pub use artist::{ArtistForm, NewArtist};
pub use show::{NewShow, ShowForm};
pub use validation::ValidationError;
pub use venue::{NewVenue, VenueForm};
