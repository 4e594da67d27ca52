//! Repository for `product_properties` and the `product_property_links`
//! junction table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product_property::{
    CreateProductProperty, LinkedProductProperty, ProductProperty,
};

/// Column list for the `product_properties` table.
const COLUMNS: &str = "id, name, value, eng_name, created_at, updated_at";

/// Same columns, qualified for JOIN queries.
const PREFIXED_COLUMNS: &str = "pp.id, pp.name, pp.value, pp.eng_name, pp.created_at, pp.updated_at";

/// Provides CRUD operations for product properties and their product links.
pub struct ProductPropertyRepo;

impl ProductPropertyRepo {
    /// Insert a new product property.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProductProperty,
    ) -> Result<ProductProperty, sqlx::Error> {
        let query = format!(
            "INSERT INTO product_properties (name, value, eng_name) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProductProperty>(&query)
            .bind(&input.name)
            .bind(&input.value)
            .bind(&input.eng_name)
            .fetch_one(pool)
            .await
    }

    /// List all product properties in insertion (id) order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProductProperty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM product_properties ORDER BY id");
        sqlx::query_as::<_, ProductProperty>(&query)
            .fetch_all(pool)
            .await
    }

    /// Properties linked to any of `product_ids`, ordered by product then property id.
    pub async fn list_for_products(
        pool: &PgPool,
        product_ids: &[DbId],
    ) -> Result<Vec<LinkedProductProperty>, sqlx::Error> {
        let query = format!(
            "SELECT l.product_id, {PREFIXED_COLUMNS} \
             FROM product_properties pp \
             JOIN product_property_links l ON l.product_property_id = pp.id \
             WHERE l.product_id = ANY($1) \
             ORDER BY l.product_id, pp.id"
        );
        sqlx::query_as::<_, LinkedProductProperty>(&query)
            .bind(product_ids)
            .fetch_all(pool)
            .await
    }

    /// Link a property to a product (idempotent).
    pub async fn link(
        pool: &PgPool,
        product_id: DbId,
        product_property_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO product_property_links (product_id, product_property_id) \
             VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(product_id)
        .bind(product_property_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Remove a property from a product.
    ///
    /// Returns `true` if the link existed.
    pub async fn unlink(
        pool: &PgPool,
        product_id: DbId,
        product_property_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM product_property_links \
             WHERE product_id = $1 AND product_property_id = $2",
        )
        .bind(product_id)
        .bind(product_property_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
