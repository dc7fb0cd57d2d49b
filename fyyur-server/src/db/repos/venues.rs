//! Venue repository
//!
//! - list: venues bucketed by (state, city) with upcoming-show counts
//! - search: case-insensitive name match
//! - detail: venue plus its shows split into past / upcoming
//! - create / delete: transactional, delete cascades to shows

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Row};

use super::shows::Booking;
use crate::db::{with_transaction, DbError};
use crate::listing::{self, Locale, LocatedVenue, Partition, SearchResults, Summary};
use crate::models::NewVenue;

/// Venue record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Venue {
    pub id: i32,
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

/// Venue with its shows, for the detail page
#[derive(Debug, Clone)]
pub struct VenueDetail {
    pub venue: Venue,
    /// Counterpart of each booking is the artist.
    pub shows: Partition<Booking>,
}

/// Venue repository
pub struct VenueRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VenueRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All venues grouped by (state, city).
    ///
    /// Ordered by state then city; upcoming counts include only shows
    /// starting strictly after `now`.
    pub async fn list_by_locale(&self, now: DateTime<Utc>) -> Result<Vec<Locale>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                v.id,
                v.name,
                v.city,
                v.state,
                COUNT(s.id) FILTER (WHERE s.start_time > $1) AS num_upcoming_shows
            FROM venue v
            LEFT JOIN "show" s ON s.venue_id = v.id
            GROUP BY v.id
            ORDER BY v.state, v.city, v.id
            "#,
        )
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(listing::group_by_locale(rows.into_iter().map(|r| {
            LocatedVenue {
                state: r.get("state"),
                city: r.get("city"),
                venue: Summary {
                    id: r.get("id"),
                    name: r.get("name"),
                    num_upcoming_shows: r.get("num_upcoming_shows"),
                },
            }
        })))
    }

    /// Venues whose name contains `term`, ignoring case.
    ///
    /// A blank term matches every venue.
    pub async fn search(&self, term: &str, now: DateTime<Utc>) -> Result<SearchResults, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                v.id,
                v.name,
                COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows
            FROM venue v
            LEFT JOIN "show" s ON s.venue_id = v.id
            WHERE v.name ILIKE $1
            GROUP BY v.id
            ORDER BY v.name, v.id
            "#,
        )
        .bind(listing::contains_pattern(term))
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        let data: Vec<Summary> = rows
            .into_iter()
            .map(|r| Summary {
                id: r.get("id"),
                name: r.get("name"),
                num_upcoming_shows: r.get("num_upcoming_shows"),
            })
            .collect();

        Ok(SearchResults::from(data))
    }

    /// Get a single venue by id.
    pub async fn get(&self, id: i32) -> Result<Venue, DbError> {
        sqlx::query_as::<_, Venue>(
            r#"
            SELECT id, name, city, state, address, phone, genres, image_link,
                   facebook_link, website_link, seeking_talent, seeking_description
            FROM venue
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("venue", id))
    }

    /// Venue with its shows joined to their artists.
    pub async fn detail(&self, id: i32, now: DateTime<Utc>) -> Result<VenueDetail, DbError> {
        let venue = self.get(id).await?;

        let bookings: Vec<Booking> = sqlx::query_as(
            r#"
            SELECT
                a.id AS counterpart_id,
                a.name AS counterpart_name,
                a.image_link AS counterpart_image_link,
                s.start_time
            FROM "show" s
            JOIN artist a ON a.id = s.artist_id
            WHERE s.venue_id = $1
            ORDER BY s.start_time, s.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(VenueDetail {
            venue,
            shows: listing::partition_by_time(bookings, now, |b| b.start_time),
        })
    }

    /// Insert a venue in its own transaction.
    pub async fn create(&self, venue: NewVenue) -> Result<Venue, DbError> {
        with_transaction(self.pool, move |conn| {
            Box::pin(async move {
                sqlx::query_as::<_, Venue>(
                    r#"
                    INSERT INTO venue (name, city, state, address, phone, genres, image_link,
                                       facebook_link, website_link, seeking_talent,
                                       seeking_description)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
                    RETURNING id, name, city, state, address, phone, genres, image_link,
                              facebook_link, website_link, seeking_talent, seeking_description
                    "#,
                )
                .bind(&venue.name)
                .bind(&venue.city)
                .bind(&venue.state)
                .bind(&venue.address)
                .bind(&venue.phone)
                .bind(&venue.genres)
                .bind(&venue.image_link)
                .bind(&venue.facebook_link)
                .bind(&venue.website_link)
                .bind(venue.seeking_talent)
                .bind(&venue.seeking_description)
                .fetch_one(&mut *conn)
                .await
                .map_err(|e| DbError::from_insert(e, "venue"))
            })
        })
        .await
    }

    /// Delete a venue and, through the foreign keys, all of its shows.
    ///
    /// Returns [`DbError::NotFound`] without issuing the delete when the
    /// venue does not exist.
    pub async fn delete(&self, id: i32) -> Result<Venue, DbError> {
        with_transaction(self.pool, move |conn| {
            Box::pin(async move {
                let venue = sqlx::query_as::<_, Venue>(
                    r#"
                    SELECT id, name, city, state, address, phone, genres, image_link,
                           facebook_link, website_link, seeking_talent, seeking_description
                    FROM venue
                    WHERE id = $1
                    FOR UPDATE
                    "#,
                )
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?
                .ok_or_else(|| DbError::not_found("venue", id))?;

                sqlx::query("DELETE FROM venue WHERE id = $1")
                    .bind(id)
                    .execute(&mut *conn)
                    .await?;

                Ok(venue)
            })
        })
        .await
    }
}
