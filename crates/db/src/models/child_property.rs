//! Properties that distinguish the child variants of a product (e.g. size).

use catalog_core::facets::FacetSource;
use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `child_properties` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChildProperty {
    pub id: DbId,
    pub name: String,
    pub value: String,
    pub eng_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a child property.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChildProperty {
    pub name: String,
    pub value: String,
    pub eng_name: String,
}

impl FacetSource for ChildProperty {
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
