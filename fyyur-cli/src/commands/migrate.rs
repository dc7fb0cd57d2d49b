//! Schema command: create tables and indexes, then exit

use anyhow::{Context, Result};
use clap::Parser;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Apply the schema
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let store = args.db.connect().await?;
    store.migrate().await.context("Failed to apply schema")?;
    tracing::info!("Schema is up to date");
    Ok(())
}
