//! Data access for the product catalog.
//!
//! [`Catalog`] is the entry point: it owns the connection pool and exposes the
//! read operations for both catalog variants. The repositories underneath are
//! zero-sized structs taking `&PgPool`, usable directly by seeding code and
//! tests.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod catalog;
pub mod config;
pub mod models;
pub mod repositories;

pub use catalog::Catalog;
pub use config::{CatalogConfig, CatalogVariant, ConfigError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from the catalog configuration.
pub async fn create_pool(config: &CatalogConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_with(config.connect_options.clone())
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations, creating any missing tables.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
