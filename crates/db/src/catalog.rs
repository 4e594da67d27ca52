//! The catalog data-access context.
//!
//! `Catalog` is constructed explicitly, owns the shared pool and is passed to
//! whoever needs catalog reads. Query failures are logged here once and then
//! returned unchanged to the caller.

use catalog_core::listing::Page;
use catalog_core::types::DbId;

use crate::config::CatalogConfig;
use crate::models::filters::{MoldingFacet, ProductFilters};
use crate::models::frame_molding::{MoldingListParams, MoldingWithColor};
use crate::models::product::{ProductListParams, ProductWithDetails};
use crate::repositories::{FilterRepo, FrameMoldingRepo, ProductRepo};
use crate::DbPool;

/// Shared handle to the catalog database. Cheap to clone.
#[derive(Clone)]
pub struct Catalog {
    pool: DbPool,
}

impl Catalog {
    /// Open the pool and verify the database answers.
    pub async fn connect(config: &CatalogConfig) -> Result<Self, sqlx::Error> {
        let pool = crate::create_pool(config).await?;
        crate::health_check(&pool).await?;
        tracing::info!(
            max_connections = config.max_connections,
            variant = %config.variant,
            "Catalog database connected"
        );
        Ok(Self { pool })
    }

    /// Wrap an existing pool (tests, embedding applications).
    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Bring the schema up to date with the embedded migrations.
    pub async fn sync_schema(&self) -> Result<(), sqlx::migrate::MigrateError> {
        crate::run_migrations(&self.pool)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Schema migration failed"))?;
        tracing::info!("Catalog schema synchronized");
        Ok(())
    }

    /// Close every pooled connection, waiting for checked-out ones to return.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Catalog database pool closed");
    }

    // -----------------------------------------------------------------------
    // Composite products
    // -----------------------------------------------------------------------

    /// One page of products with nested info, properties and children.
    pub async fn products(
        &self,
        params: &ProductListParams,
    ) -> Result<Page<ProductWithDetails>, sqlx::Error> {
        let page = ProductRepo::list(&self.pool, params)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to list products"))?;
        tracing::debug!(rows = page.rows.len(), count = page.count, "Listed products");
        Ok(page)
    }

    /// A single product, or `None` if no row has this id.
    pub async fn product_by_id(&self, id: DbId) -> Result<Option<ProductWithDetails>, sqlx::Error> {
        ProductRepo::find_by_id_with_details(&self.pool, id)
            .await
            .inspect_err(|e| tracing::error!(error = %e, product_id = id, "Failed to load product"))
    }

    /// Product and child property facets.
    pub async fn filters(&self) -> Result<ProductFilters, sqlx::Error> {
        FilterRepo::product_filters(&self.pool)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to build product filters"))
    }

    // -----------------------------------------------------------------------
    // Frame moldings
    // -----------------------------------------------------------------------

    /// Frame moldings with their colors. Unbounded unless a limit is given.
    pub async fn moldings(
        &self,
        params: &MoldingListParams,
    ) -> Result<Page<MoldingWithColor>, sqlx::Error> {
        let page = FrameMoldingRepo::list(&self.pool, params)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to list frame moldings"))?;
        tracing::debug!(rows = page.rows.len(), count = page.count, "Listed frame moldings");
        Ok(page)
    }

    /// A single frame molding, or `None` if no row has this id.
    pub async fn molding_by_id(&self, id: DbId) -> Result<Option<MoldingWithColor>, sqlx::Error> {
        FrameMoldingRepo::find_by_id_with_color(&self.pool, id)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, molding_id = id, "Failed to load frame molding")
            })
    }

    /// Material, width, price and color facets.
    pub async fn molding_filters(&self) -> Result<Vec<MoldingFacet>, sqlx::Error> {
        FilterRepo::molding_filters(&self.pool)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to build frame molding filters"))
    }
}
