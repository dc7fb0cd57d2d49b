//! Database layer - connection pool, schema, transactions and repositories
//!
//! # Design Principles
//!
//! - Connection pool owned by an explicitly constructed [`Store`]
//! - Upcoming-show counts come from one LEFT JOIN per listing (no N+1)
//! - Rely on DB constraints for uniqueness, map violations to [`DbError`]
//! - Every mutation runs inside [`tx::with_transaction`]

pub mod migrations;
pub mod pool;
pub mod repos;
pub mod tx;

use sqlx::PgPool;

pub use pool::{create_lazy_pool, create_pool, create_pool_with_options, DEFAULT_MAX_CONNECTIONS};
pub use repos::*;
pub use tx::with_transaction;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("duplicate {resource}: {detail}")]
    Duplicate { resource: &'static str, detail: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Classify an insert failure, turning unique violations into
    /// [`DbError::Duplicate`].
    pub(crate) fn from_insert(err: sqlx::Error, resource: &'static str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Duplicate {
                resource,
                detail: db.message().to_owned(),
            },
            _ => Self::Sqlx(err),
        }
    }
}

/// Handle on the relational store, shared by every request handler.
///
/// Cloning is cheap: the pool is reference counted.
#[derive(Debug, Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Apply the schema.
    pub async fn migrate(&self) -> Result<(), DbError> {
        migrations::run(&self.pool).await
    }

    pub fn venues(&self) -> VenueRepo<'_> {
        VenueRepo::new(&self.pool)
    }

    pub fn artists(&self) -> ArtistRepo<'_> {
        ArtistRepo::new(&self.pool)
    }

    pub fn shows(&self) -> ShowRepo<'_> {
        ShowRepo::new(&self.pool)
    }
}
