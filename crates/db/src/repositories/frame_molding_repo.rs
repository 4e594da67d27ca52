//! Repository for the `frame_moldings` table.

use std::collections::HashMap;

use catalog_core::listing::{clamp_limit, clamp_offset, MoldingSortKey, Page, Sort, MAX_LIST_LIMIT};
use catalog_core::types::DbId;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::color::Color;
use crate::models::frame_molding::{
    CreateFrameMolding, FrameMolding, MoldingListParams, MoldingWithColor,
};
use crate::repositories::ColorRepo;

/// Column list for the `frame_moldings` table.
const COLUMNS: &str = "id, color_id, name, price, width, material, images, description, \
    created_at, updated_at";

/// Same columns, qualified for aliased queries.
const PREFIXED_COLUMNS: &str = "fm.id, fm.color_id, fm.name, fm.price, fm.width, fm.material, \
    fm.images, fm.description, fm.created_at, fm.updated_at";

/// Provides read and seeding operations for frame moldings.
pub struct FrameMoldingRepo;

impl FrameMoldingRepo {
    /// Insert a new frame molding.
    pub async fn create(
        pool: &PgPool,
        input: &CreateFrameMolding,
    ) -> Result<FrameMolding, sqlx::Error> {
        let query = format!(
            "INSERT INTO frame_moldings \
                (color_id, name, price, width, material, images, description) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FrameMolding>(&query)
            .bind(input.color_id)
            .bind(&input.name)
            .bind(input.price)
            .bind(input.width)
            .bind(&input.material)
            .bind(&input.images)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a frame molding by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<FrameMolding>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM frame_moldings WHERE id = $1");
        sqlx::query_as::<_, FrameMolding>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a frame molding by ID together with its color.
    pub async fn find_by_id_with_color(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<MoldingWithColor>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(molding) => Ok(Self::attach_colors(pool, vec![molding]).await?.pop()),
            None => Ok(None),
        }
    }

    /// List frame moldings matching `params`, plus the total match count.
    ///
    /// Without an explicit limit every matching row is returned.
    pub async fn list(
        pool: &PgPool,
        params: &MoldingListParams,
    ) -> Result<Page<MoldingWithColor>, sqlx::Error> {
        // LIMIT NULL is LIMIT ALL in PostgreSQL.
        let limit: Option<i64> = params
            .limit
            .map(|l| clamp_limit(Some(l), l, MAX_LIST_LIMIT));
        let offset = clamp_offset(params.offset);
        let pattern = params.title_pattern();

        let (where_clause, bind_idx) = match pattern {
            Some(_) => ("WHERE fm.name ILIKE $1 ESCAPE '\\'", 2),
            None => ("", 1),
        };

        let count_query = format!("SELECT COUNT(*) FROM frame_moldings fm {where_clause}");
        let mut count_q = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(ref pattern) = pattern {
            count_q = count_q.bind(pattern);
        }
        let count = count_q.fetch_one(pool).await?;

        let page_query = format!(
            "SELECT {PREFIXED_COLUMNS} FROM frame_moldings fm {where_clause} \
             ORDER BY {order} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            order = order_clause(params.sort),
            next_idx = bind_idx + 1,
        );
        let mut page_q = sqlx::query_as::<_, FrameMolding>(&page_query);
        if let Some(ref pattern) = pattern {
            page_q = page_q.bind(pattern);
        }
        let moldings = page_q.bind(limit).bind(offset).fetch_all(pool).await?;

        let rows = Self::attach_colors(pool, moldings).await?;
        Ok(Page { rows, count })
    }

    /// Delete a frame molding by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM frame_moldings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Distinct values for facets
    // -----------------------------------------------------------------------

    /// Distinct materials in use, alphabetical.
    pub async fn distinct_materials(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT material FROM frame_moldings ORDER BY material",
        )
        .fetch_all(pool)
        .await
    }

    /// Distinct widths in use, ascending.
    pub async fn distinct_widths(pool: &PgPool) -> Result<Vec<i32>, sqlx::Error> {
        sqlx::query_scalar::<_, i32>("SELECT DISTINCT width FROM frame_moldings ORDER BY width")
            .fetch_all(pool)
            .await
    }

    /// Distinct prices in use, ascending.
    pub async fn distinct_prices(pool: &PgPool) -> Result<Vec<Decimal>, sqlx::Error> {
        sqlx::query_scalar::<_, Decimal>("SELECT DISTINCT price FROM frame_moldings ORDER BY price")
            .fetch_all(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Pair each molding with its color, preserving input order.
    async fn attach_colors(
        pool: &PgPool,
        moldings: Vec<FrameMolding>,
    ) -> Result<Vec<MoldingWithColor>, sqlx::Error> {
        if moldings.is_empty() {
            return Ok(Vec::new());
        }

        let mut color_ids: Vec<DbId> = moldings.iter().map(|m| m.color_id).collect();
        color_ids.sort_unstable();
        color_ids.dedup();

        let colors: HashMap<DbId, Color> = ColorRepo::find_by_ids(pool, &color_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(moldings
            .into_iter()
            .filter_map(|molding| {
                let color = colors.get(&molding.color_id)?.clone();
                Some(MoldingWithColor { molding, color })
            })
            .collect())
    }
}

/// ORDER BY clause for a frame molding sort. Ties fall back to `fm.id`.
fn order_clause(sort: Sort<MoldingSortKey>) -> String {
    let dir = sort.order.as_sql();
    let column = match sort.key {
        MoldingSortKey::Id => return format!("fm.id {dir}"),
        MoldingSortKey::Name => "fm.name",
        MoldingSortKey::Price => "fm.price",
        MoldingSortKey::Width => "fm.width",
        MoldingSortKey::Material => "fm.material",
    };
    format!("{column} {dir}, fm.id {dir}")
}
