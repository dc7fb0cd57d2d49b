//! Artist repository
//!
//! Mirrors the venue repository minus grouping and deletion.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Row};

use super::shows::Booking;
use crate::db::{with_transaction, DbError};
use crate::listing::{self, Partition, SearchResults, Summary};
use crate::models::NewArtist;

/// Artist record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Artist {
    pub id: i32,
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

/// Artist row for the plain listing
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ArtistListing {
    pub id: i32,
    pub name: String,
}

/// Artist with its shows, for the detail page
#[derive(Debug, Clone)]
pub struct ArtistDetail {
    pub artist: Artist,
    /// Counterpart of each booking is the venue.
    pub shows: Partition<Booking>,
}

/// Artist repository
pub struct ArtistRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All artists, oldest first.
    pub async fn list(&self) -> Result<Vec<ArtistListing>, DbError> {
        let artists = sqlx::query_as::<_, ArtistListing>("SELECT id, name FROM artist ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(artists)
    }

    /// Artists whose name contains `term`, ignoring case.
    pub async fn search(&self, term: &str, now: DateTime<Utc>) -> Result<SearchResults, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                a.id,
                a.name,
                COUNT(s.id) FILTER (WHERE s.start_time > $2) AS num_upcoming_shows
            FROM artist a
            LEFT JOIN "show" s ON s.artist_id = a.id
            WHERE a.name ILIKE $1
            GROUP BY a.id
            ORDER BY a.name, a.id
            "#,
        )
        .bind(listing::contains_pattern(term))
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| Summary {
                id: r.get("id"),
                name: r.get("name"),
                num_upcoming_shows: r.get("num_upcoming_shows"),
            })
            .collect::<Vec<_>>()
            .into())
    }

    /// Get a single artist by id.
    pub async fn get(&self, id: i32) -> Result<Artist, DbError> {
        sqlx::query_as::<_, Artist>(
            r#"
            SELECT id, name, city, state, phone, genres, image_link, facebook_link,
                   website_link, seeking_venue, seeking_description
            FROM artist
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("artist", id))
    }

    /// Artist with its shows joined to their venues.
    pub async fn detail(&self, id: i32, now: DateTime<Utc>) -> Result<ArtistDetail, DbError> {
        let artist = self.get(id).await?;

        let bookings: Vec<Booking> = sqlx::query_as(
            r#"
            SELECT
                v.id AS counterpart_id,
                v.name AS counterpart_name,
                v.image_link AS counterpart_image_link,
                s.start_time
            FROM "show" s
            JOIN venue v ON v.id = s.venue_id
            WHERE s.artist_id = $1
            ORDER BY s.start_time, s.id
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(ArtistDetail {
            artist,
            shows: listing::partition_by_time(bookings, now, |b| b.start_time),
        })
    }

    /// Insert an artist in its own transaction.
    pub async fn create(&self, artist: NewArtist) -> Result<Artist, DbError> {
        with_transaction(self.pool, move |conn| {
            Box::pin(async move {
                sqlx::query_as::<_, Artist>(
                    r#"
                    INSERT INTO artist (name, city, state, phone, genres, image_link,
                                        facebook_link, website_link, seeking_venue,
                                        seeking_description)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                    RETURNING id, name, city, state, phone, genres, image_link, facebook_link,
                              website_link, seeking_venue, seeking_description
                    "#,
                )
                .bind(&artist.name)
                .bind(&artist.city)
                .bind(&artist.state)
                .bind(&artist.phone)
                .bind(&artist.genres)
                .bind(&artist.image_link)
                .bind(&artist.facebook_link)
                .bind(&artist.website_link)
                .bind(artist.seeking_venue)
                .bind(&artist.seeking_description)
                .fetch_one(&mut *conn)
                .await
                .map_err(|e| DbError::from_insert(e, "artist"))
            })
        })
        .await
    }
}
