use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_db::{Catalog, CatalogConfig};

mod cli;
mod commands;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing (stderr, so stdout stays pure JSON) ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_cli=info,catalog_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();

    // --- Configuration ---
    let mut config = CatalogConfig::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "Invalid catalog configuration"))?;
    if let Some(variant) = cli.variant {
        config.variant = variant;
    }
    tracing::info!(variant = %config.variant, "Loaded catalog configuration");

    // --- Database ---
    let catalog = Catalog::connect(&config)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Unable to connect to the database"))?;

    catalog.sync_schema().await?;

    // --- Command ---
    let result = commands::run(&catalog, config.variant, cli.command).await;
    catalog.close().await;

    let output = result.inspect_err(|e| tracing::error!(error = %e, "Command failed"))?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
