//! Repository for the `product_infos` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product_info::{CreateProductInfo, ProductInfo};

/// Column list for the `product_infos` table.
const COLUMNS: &str = "id, name, description, \"type\", created_at, updated_at";

/// Provides CRUD operations for product info rows.
pub struct ProductInfoRepo;

impl ProductInfoRepo {
    /// Insert a new product info row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProductInfo,
    ) -> Result<ProductInfo, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_infos (name, description, \"type\") \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductInfo>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.product_type)
            .fetch_one(pool)
            .await
    }

    /// Find a product info row by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProductInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_infos WHERE id = $1");
        sqlx::query_as::<_, ProductInfo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every product info row whose ID is in `ids`.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<ProductInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_infos WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, ProductInfo>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Delete a product info row. Its products go with it (ON DELETE CASCADE).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM product_infos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
