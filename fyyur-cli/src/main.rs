//! fyyur CLI - run the venue and artist booking site
//!
//! Subcommands:
//! - `serve`: apply the schema, then serve the site until Ctrl+C / SIGTERM
//! - `migrate`: apply the schema and exit
//!
//! A `.env` file in the working directory is loaded before arguments are
//! parsed, so `DATABASE_URL` and `FYYUR_BIND` can live there.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "fyyur",
    author,
    version,
    about = "Venue and artist booking site",
    long_about = "List venues and artists, book artists into venues as shows, and browse \
                  everything through server-rendered HTML pages backed by PostgreSQL."
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still wins when set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (applies the schema first)
    Serve(commands::serve::ServeArgs),
    /// Create tables and indexes, then exit
    Migrate(commands::migrate::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Migrate(args) => commands::run_migrate(args).await?,
    }
    Ok(())
}
