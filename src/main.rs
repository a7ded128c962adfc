//! CLI entry point for the LiterAlura catalog.

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use literalura_core::{Catalog, Database, DatabaseLocation, HttpFetcher, MenuController};
use tracing::{debug, info};

mod cli;

use cli::Args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (warn)
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(args.default_log_level()));

    // stdout belongs to the menu
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");

    let config = args.to_config();
    config.validate()?;

    let db = match &config.database {
        DatabaseLocation::File(path) => Database::new(path)
            .await
            .with_context(|| format!("failed to open catalog at {}", path.display()))?,
        DatabaseLocation::InMemory => Database::new_in_memory().await?,
    };
    info!(database = ?config.database, "Catalog ready");

    let catalog = Catalog::new(db.clone());
    let fetcher = HttpFetcher::new(config.timeouts)?;

    let mut menu = MenuController::new(
        fetcher,
        catalog,
        config.api_base_url.as_str(),
        io::stdin().lock(),
        io::stdout(),
    );
    menu.run().await?;

    db.close().await;
    info!("LiterAlura finished");
    Ok(())
}
