//! Repository for the `products` table and its nested read model.
//!
//! Listing and lookup both return [`ProductWithDetails`]: the product plus its
//! info row, linked properties and price-ordered children. Associations are
//! loaded in batches (one query per association for the whole page).

use std::collections::HashMap;

use catalog_core::listing::{
    clamp_limit, clamp_offset, Page, ProductSortKey, Sort, DEFAULT_PRODUCT_LIMIT, MAX_LIST_LIMIT,
};
use catalog_core::types::DbId;
use sqlx::PgPool;

use crate::models::child_property::ChildProperty;
use crate::models::product::{CreateProduct, Product, ProductListParams, ProductWithDetails};
use crate::models::product_child::ProductChildWithProperty;
use crate::models::product_info::ProductInfo;
use crate::models::product_property::ProductProperty;
use crate::repositories::{
    ChildPropertyRepo, ProductChildRepo, ProductInfoRepo, ProductPropertyRepo,
};

/// Column list for the `products` table.
const COLUMNS: &str = "id, product_info_id, images, created_at, updated_at";

/// Same columns, qualified for JOIN queries.
const PREFIXED_COLUMNS: &str = "p.id, p.product_info_id, p.images, p.created_at, p.updated_at";

/// FROM clause shared by the count and page queries.
const LIST_FROM: &str = "FROM products p JOIN product_infos pi ON pi.id = p.product_info_id";

/// Provides read and seeding operations for composite products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product and link its properties in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO products (product_info_id, images) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&insert_query)
            .bind(input.product_info_id)
            .bind(&input.images)
            .fetch_one(&mut *tx)
            .await?;

        for &property_id in &input.property_ids {
            sqlx::query(
                "INSERT INTO product_property_links (product_id, product_property_id) \
                 VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(product.id)
            .bind(property_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(product)
    }

    /// Find a bare product row by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a product by ID with info, properties and children.
    pub async fn find_by_id_with_details(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProductWithDetails>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(product) => Ok(Self::attach_details(pool, vec![product]).await?.pop()),
            None => Ok(None),
        }
    }

    /// List one page of products matching `params`, plus the total match count.
    ///
    /// The title filter matches `product_infos.name` case-insensitively.
    pub async fn list(
        pool: &PgPool,
        params: &ProductListParams,
    ) -> Result<Page<ProductWithDetails>, sqlx::Error> {
        let limit = clamp_limit(params.limit, DEFAULT_PRODUCT_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(params.offset);
        let pattern = params.title_pattern();

        let (where_clause, bind_idx) = match pattern {
            Some(_) => ("WHERE pi.name ILIKE $1 ESCAPE '\\'", 2),
            None => ("", 1),
        };

        let count_query = format!("SELECT COUNT(*) {LIST_FROM} {where_clause}");
        let mut count_q = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(ref pattern) = pattern {
            count_q = count_q.bind(pattern);
        }
        let count = count_q.fetch_one(pool).await?;

        let page_query = format!(
            "SELECT {PREFIXED_COLUMNS} {LIST_FROM} {where_clause} \
             ORDER BY {order} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            order = order_clause(params.sort),
            next_idx = bind_idx + 1,
        );
        let mut page_q = sqlx::query_as::<_, Product>(&page_query);
        if let Some(ref pattern) = pattern {
            page_q = page_q.bind(pattern);
        }
        let products = page_q.bind(limit).bind(offset).fetch_all(pool).await?;

        let rows = Self::attach_details(pool, products).await?;
        Ok(Page { rows, count })
    }

    /// Delete a product. Children and property links cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Load the associations of `products` and assemble the nested model.
    ///
    /// Input order is preserved. A product whose info row vanished between
    /// queries is dropped.
    async fn attach_details(
        pool: &PgPool,
        products: Vec<Product>,
    ) -> Result<Vec<ProductWithDetails>, sqlx::Error> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let product_ids: Vec<DbId> = products.iter().map(|p| p.id).collect();
        let info_ids = unique_ids(products.iter().map(|p| p.product_info_id));

        let infos: HashMap<DbId, ProductInfo> = ProductInfoRepo::find_by_ids(pool, &info_ids)
            .await?
            .into_iter()
            .map(|info| (info.id, info))
            .collect();

        let mut properties: HashMap<DbId, Vec<ProductProperty>> = HashMap::new();
        for linked in ProductPropertyRepo::list_for_products(pool, &product_ids).await? {
            properties
                .entry(linked.product_id)
                .or_default()
                .push(linked.property);
        }

        let children = ProductChildRepo::list_for_products(pool, &product_ids).await?;
        let child_property_ids = unique_ids(children.iter().map(|c| c.child_property_id));
        let child_properties: HashMap<DbId, ChildProperty> =
            ChildPropertyRepo::find_by_ids(pool, &child_property_ids)
                .await?
                .into_iter()
                .map(|cp| (cp.id, cp))
                .collect();

        let mut children_by_product: HashMap<DbId, Vec<ProductChildWithProperty>> = HashMap::new();
        for child in children {
            let Some(child_property) = child_properties.get(&child.child_property_id) else {
                continue;
            };
            children_by_product
                .entry(child.product_id)
                .or_default()
                .push(ProductChildWithProperty {
                    id: child.id,
                    price: child.price,
                    count: child.count,
                    child_property: child_property.clone(),
                });
        }

        Ok(products
            .into_iter()
            .filter_map(|product| {
                let product_info = infos.get(&product.product_info_id)?.clone();
                Some(ProductWithDetails {
                    product_properties: properties.remove(&product.id).unwrap_or_default(),
                    product_children: children_by_product.remove(&product.id).unwrap_or_default(),
                    product_info,
                    product,
                })
            })
            .collect())
    }
}

/// ORDER BY clause for a product sort. Ties fall back to `p.id` in the same direction.
fn order_clause(sort: Sort<ProductSortKey>) -> String {
    let dir = sort.order.as_sql();
    match sort.key {
        ProductSortKey::Id => format!("p.id {dir}"),
        ProductSortKey::Name => format!("pi.name {dir}, p.id {dir}"),
        ProductSortKey::Price => format!(
            "(SELECT MIN(pc.price) FROM product_children pc WHERE pc.product_id = p.id) \
             {dir} NULLS LAST, p.id {dir}"
        ),
    }
}

/// Sorted, de-duplicated copy of `ids`.
fn unique_ids(ids: impl Iterator<Item = DbId>) -> Vec<DbId> {
    let mut ids: Vec<DbId> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

#[cfg(test)]
mod tests {
    use catalog_core::listing::SortOrder;

    use super::*;

    #[test]
    fn default_order_is_newest_first() {
        assert_eq!(order_clause(Sort::default()), "p.id DESC");
    }

    #[test]
    fn name_order_breaks_ties_by_id() {
        let sort = Sort {
            key: ProductSortKey::Name,
            order: SortOrder::Asc,
        };
        assert_eq!(order_clause(sort), "pi.name ASC, p.id ASC");
    }

    #[test]
    fn price_order_uses_cheapest_child_and_puts_childless_last() {
        let sort = Sort {
            key: ProductSortKey::Price,
            order: SortOrder::Desc,
        };
        let clause = order_clause(sort);
        assert!(clause.starts_with("(SELECT MIN(pc.price)"));
        assert!(clause.contains("DESC NULLS LAST"));
        assert!(clause.ends_with("p.id DESC"));
    }

    #[test]
    fn unique_ids_sorts_and_dedups() {
        assert_eq!(unique_ids([3, 1, 3, 2, 1].into_iter()), vec![1, 2, 3]);
    }
}
