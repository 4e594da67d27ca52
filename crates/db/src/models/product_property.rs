//! Filterable properties linked to products through `product_property_links`.

use catalog_core::facets::FacetSource;
use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `product_properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductProperty {
    pub id: DbId,
    /// Storefront label, e.g. "Цвет".
    pub name: String,
    pub value: String,
    pub eng_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A property joined through the link table, tagged with its product.
#[derive(Debug, Clone, FromRow)]
pub struct LinkedProductProperty {
    pub product_id: DbId,
    #[sqlx(flatten)]
    pub property: ProductProperty,
}

/// DTO for creating a product property.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductProperty {
    pub name: String,
    pub value: String,
    pub eng_name: String,
}

impl FacetSource for ProductProperty {
    fn facet_id(&self) -> DbId {
        self.id
    }

    fn facet_name(&self) -> &str {
        &self.name
    }

    fn facet_eng_name(&self) -> &str {
        &self.eng_name
    }

    fn facet_value(&self) -> &str {
        &self.value
    }
}
