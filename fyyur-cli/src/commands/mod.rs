//! Command implementations for the fyyur CLI

pub mod migrate;
pub mod serve;

use anyhow::{Context, Result};
use clap::Args;
use fyyur_server::db::create_pool_with_options;
use fyyur_server::Store;

// Re-export dispatcher functions for flat access from main.rs
pub use migrate::run_migrate;
pub use serve::run_serve;

/// Connection options shared by every command that touches the database
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = fyyur_server::db::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    /// Connect and wrap the pool in a [`Store`].
    pub async fn connect(&self) -> Result<Store> {
        let database_url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let pool = create_pool_with_options(database_url, self.max_connections)
            .await
            .context("Failed to create database pool")?;

        Ok(Store::new(pool))
    }
}
