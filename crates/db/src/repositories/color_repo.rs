//! Repository for the `colors` table.

use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::color::{Color, CreateColor};

/// Column list for the `colors` table.
const COLUMNS: &str = "id, name, code, created_at, updated_at";

/// Same columns, qualified for JOIN queries.
const PREFIXED_COLUMNS: &str = "c.id, c.name, c.code, c.created_at, c.updated_at";

/// Provides CRUD operations for colors.
pub struct ColorRepo;

impl ColorRepo {
    /// Insert a new color.
    pub async fn create(pool: &PgPool, input: &CreateColor) -> Result<Color, sqlx::Error> {
        let query = format!("INSERT INTO colors (name, code) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Color>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .fetch_one(pool)
            .await
    }

    /// Find a color by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Color>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colors WHERE id = $1");
        sqlx::query_as::<_, Color>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every color whose ID is in `ids`.
    pub async fn find_by_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<Color>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM colors WHERE id = ANY($1) ORDER BY id");
        sqlx::query_as::<_, Color>(&query)
            .bind(ids)
            .fetch_all(pool)
            .await
    }

    /// Colors referenced by at least one frame molding, ordered by id.
    pub async fn list_in_use(pool: &PgPool) -> Result<Vec<Color>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFIXED_COLUMNS} FROM colors c \
             WHERE EXISTS (SELECT 1 FROM frame_moldings fm WHERE fm.color_id = c.id) \
             ORDER BY c.id"
        );
        sqlx::query_as::<_, Color>(&query).fetch_all(pool).await
    }

    /// Delete a color. Its frame moldings are removed too.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM colors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
