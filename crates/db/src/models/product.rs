//! Composite product entity model and DTOs.
//!
//! A product owns an ordered image list and points at a shared
//! `product_infos` row. Its child variants live in `product_children` and its
//! filterable properties are linked through `product_property_links`.

use catalog_core::listing::{ListParams, ProductSortKey};
use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::product_child::ProductChildWithProperty;
use super::product_info::ProductInfo;
use super::product_property::ProductProperty;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub product_info_id: DbId,
    pub images: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A product with its info, linked properties and children.
///
/// Children are ordered by price ascending, properties by id.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithDetails {
    #[serde(flatten)]
    pub product: Product,
    pub product_info: ProductInfo,
    pub product_properties: Vec<ProductProperty>,
    pub product_children: Vec<ProductChildWithProperty>,
}

/// DTO for creating a product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub product_info_id: DbId,
    #[serde(default)]
    pub images: Vec<String>,
    /// Properties to link to the new product.
    #[serde(default)]
    pub property_ids: Vec<DbId>,
}

/// List parameters for composite products.
pub type ProductListParams = ListParams<ProductSortKey>;
