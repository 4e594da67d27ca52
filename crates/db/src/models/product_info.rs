//! Descriptive metadata shared by one or more products.

use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `product_infos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductInfo {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub product_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating product info.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductInfo {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub product_type: String,
}
