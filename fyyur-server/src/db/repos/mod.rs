//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool from [`Store`](crate::db::Store)
//! - Takes "now" as an argument wherever past/upcoming matters
//! - Wraps writes in [`with_transaction`](crate::db::with_transaction)

pub mod artists;
pub mod shows;
pub mod venues;

pub use artists::{Artist, ArtistDetail, ArtistListing, ArtistRepo};
pub use shows::{Booking, Show, ShowListing, ShowRepo};
pub use venues::{Venue, VenueDetail, VenueRepo};
