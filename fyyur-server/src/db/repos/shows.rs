//! Show repository
//!
//! Creation verifies the artist and venue inside the insert transaction and
//! leans on the unique constraint for double bookings.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::db::{with_transaction, DbError};
use crate::models::NewShow;

/// Show record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: DateTime<Utc>,
}

/// One show seen from a venue or an artist: the other side of the booking
/// and when it starts.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Booking {
    pub counterpart_id: i32,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Show joined to both sides, for the show listing
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ShowListing {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: DateTime<Utc>,
}

/// Show repository
pub struct ShowRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ShowRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every show, ordered by venue then start time.
    pub async fn list(&self) -> Result<Vec<ShowListing>, DbError> {
        let shows = sqlx::query_as::<_, ShowListing>(
            r#"
            SELECT
                s.id,
                s.venue_id,
                v.name AS venue_name,
                s.artist_id,
                a.name AS artist_name,
                a.image_link AS artist_image_link,
                s.start_time
            FROM "show" s
            JOIN venue v ON v.id = s.venue_id
            JOIN artist a ON a.id = s.artist_id
            ORDER BY s.venue_id, s.start_time, s.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(shows)
    }

    /// Book an artist at a venue (atomic).
    ///
    /// Fails with [`DbError::NotFound`] before inserting when either side is
    /// missing, and with [`DbError::Duplicate`] when the same artist is
    /// already booked at that venue and time.
    pub async fn create(&self, show: NewShow) -> Result<Show, DbError> {
        with_transaction(self.pool, move |conn| {
            Box::pin(async move {
                // Lock both rows so neither can be deleted before the insert lands
                let artist: Option<(i32,)> =
                    sqlx::query_as("SELECT id FROM artist WHERE id = $1 FOR SHARE")
                        .bind(show.artist_id)
                        .fetch_optional(&mut *conn)
                        .await?;
                if artist.is_none() {
                    return Err(DbError::not_found("artist", show.artist_id));
                }

                let venue: Option<(i32,)> =
                    sqlx::query_as("SELECT id FROM venue WHERE id = $1 FOR SHARE")
                        .bind(show.venue_id)
                        .fetch_optional(&mut *conn)
                        .await?;
                if venue.is_none() {
                    return Err(DbError::not_found("venue", show.venue_id));
                }

                sqlx::query_as::<_, Show>(
                    r#"
                    INSERT INTO "show" (artist_id, venue_id, start_time)
                    VALUES ($1, $2, $3)
                    RETURNING id, artist_id, venue_id, start_time
                    "#,
                )
                .bind(show.artist_id)
                .bind(show.venue_id)
                .bind(show.start_time)
                .fetch_one(&mut *conn)
                .await
                .map_err(|e| DbError::from_insert(e, "show"))
            })
        })
        .await
    }
}
