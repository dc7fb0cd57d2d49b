//! Schema migrations for the venue, artist and show tables
//!
//! Every statement is idempotent so the set can run on each startup. The
//! whole set runs in one transaction behind an advisory lock, so servers
//! starting side by side apply it once.

use sqlx::{PgConnection, PgPool};

use super::DbError;

/// Advisory lock key held while migrating.
const MIGRATION_LOCK_KEY: i64 = 0x6679_7975_72;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running fyyur migrations...");

    let mut tx = pool.begin().await?;
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(MIGRATION_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venue (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            city VARCHAR(120) NOT NULL,
            state VARCHAR(120) NOT NULL,
            address VARCHAR(120) NOT NULL,
            phone VARCHAR(120),
            genres TEXT[] NOT NULL DEFAULT '{}',
            image_link VARCHAR(500),
            facebook_link VARCHAR(500),
            website_link VARCHAR(500),
            seeking_talent BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description VARCHAR(500)
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artist (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            city VARCHAR(120) NOT NULL,
            state VARCHAR(120) NOT NULL,
            phone VARCHAR(120),
            genres TEXT[] NOT NULL DEFAULT '{}',
            image_link VARCHAR(500),
            facebook_link VARCHAR(500),
            website_link VARCHAR(500),
            seeking_venue BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description VARCHAR(500)
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    // One artist cannot be booked twice at the same venue and instant.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS "show" (
            id SERIAL PRIMARY KEY,
            artist_id INTEGER NOT NULL REFERENCES artist(id) ON DELETE CASCADE,
            venue_id INTEGER NOT NULL REFERENCES venue(id) ON DELETE CASCADE,
            start_time TIMESTAMPTZ NOT NULL,
            CONSTRAINT show_artist_venue_start_key UNIQUE (artist_id, venue_id, start_time)
        )
        "#,
    )
    .execute(&mut *tx)
    .await?;

    create_indexes(&mut tx).await?;
    tx.commit().await?;

    tracing::info!("fyyur migrations complete");
    Ok(())
}

async fn create_indexes(conn: &mut PgConnection) -> Result<(), DbError> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venue_state_city ON venue(state, city)")
        .execute(&mut *conn)
        .await?;
    sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_show_venue_start ON "show"(venue_id, start_time)"#)
        .execute(&mut *conn)
        .await?;
    sqlx::query(r#"CREATE INDEX IF NOT EXISTS idx_show_artist_start ON "show"(artist_id, start_time)"#)
        .execute(&mut *conn)
        .await?;

    Ok(())
}
