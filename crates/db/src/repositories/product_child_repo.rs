//! Repository for the `product_children` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product_child::{CreateProductChild, ProductChild};

/// Column list for the `product_children` table.
const COLUMNS: &str = "id, product_id, child_property_id, count, price, created_at, updated_at";

/// Provides CRUD operations for product children.
pub struct ProductChildRepo;

impl ProductChildRepo {
    /// Insert a new child. `count` defaults to 0.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProductChild,
    ) -> Result<ProductChild, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_children (product_id, child_property_id, count, price) \
             VALUES ($1, $2, COALESCE($3, 0), $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductChild>(&query)
            .bind(input.product_id)
            .bind(input.child_property_id)
            .bind(input.count)
            .bind(input.price)
            .fetch_one(pool)
            .await
    }

    /// Children of a single product, cheapest first.
    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<ProductChild>, sqlx::Error> {
        Self::list_for_products(pool, &[product_id]).await
    }

    /// Children of any of `product_ids`, grouped by product and cheapest first.
    pub async fn list_for_products(
        pool: &PgPool,
        product_ids: &[DbId],
    ) -> Result<Vec<ProductChild>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM product_children \
             WHERE product_id = ANY($1) \
             ORDER BY product_id, price ASC, id ASC"
        );
        sqlx::query_as::<_, ProductChild>(&query)
            .bind(product_ids)
            .fetch_all(pool)
            .await
    }

    /// Delete a child by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM product_children WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
