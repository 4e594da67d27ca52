//! Repository for the `child_properties` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::child_property::{ChildProperty, CreateChildProperty};

/// Column list for the `child_properties` table.
const COLUMNS: &str = "id, name, value, eng_name, created_at, updated_at";

/// Provides CRUD operations for child properties.
pub struct ChildPropertyRepo;

impl ChildPropertyRepo {
    /// Insert a new child property.
    pub async fn create(
        pool: &PgPool,
        input: &CreateChildProperty,
    ) -> Result<ChildProperty, sqlx::Error> {
        let query = format!(
            "INSERT INTO child_properties (name, value, eng_name) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ChildProperty>(&query)
            .bind(&input.name)
            .bind(&input.value)
            .bind(&input.eng_name)
            .fetch_one(pool)
            .await
    }

    /// List all child properties in insertion (id) order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ChildProperty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM child_properties ORDER BY id");
        sqlx::query_as::<_, ChildProperty>(&query)
            .fetch_all(pool)
            .await
    }

    /// Fetch every child property whose ID is in `ids`.
    pub async fn find_by_ids(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<ChildProperty>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM child_properties WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, ChildProperty>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Delete a child property. Children using it are removed too.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM child_properties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
