//! Purchasable child variants of a product, each priced separately.

use catalog_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::child_property::ChildProperty;

/// A row from the `product_children` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductChild {
    pub id: DbId,
    pub product_id: DbId,
    pub child_property_id: DbId,
    /// Units in stock.
    pub count: i32,
    pub price: Decimal,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A child as shown inside a product: id, price, count and its property.
#[derive(Debug, Clone, Serialize)]
pub struct ProductChildWithProperty {
    pub id: DbId,
    pub price: Decimal,
    pub count: i32,
    pub child_property: ChildProperty,
}

/// DTO for creating a product child.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductChild {
    pub product_id: DbId,
    pub child_property_id: DbId,
    pub count: Option<i32>,
    pub price: Decimal,
}
