//! Filter menus returned by the `filters` operations.

use catalog_core::facets::{Facet, MoldingFacetKind};
use rust_decimal::Decimal;
use serde::Serialize;

use super::color::Color;

/// Facets for composite products, split by where the property lives.
#[derive(Debug, Clone, Serialize)]
pub struct ProductFilters {
    /// Grouped from `product_properties`.
    pub product: Vec<Facet>,
    /// Grouped from `child_properties`.
    pub child: Vec<Facet>,
}

/// Distinct values of one frame molding facet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MoldingFacetValues {
    Materials(Vec<String>),
    Widths(Vec<i32>),
    Prices(Vec<Decimal>),
    Colors(Vec<Color>),
}

impl MoldingFacetValues {
    pub fn len(&self) -> usize {
        match self {
            Self::Materials(v) => v.len(),
            Self::Widths(v) => v.len(),
            Self::Prices(v) => v.len(),
            Self::Colors(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One frame molding facet: `{ name, eng_name, filters }`.
#[derive(Debug, Clone, Serialize)]
pub struct MoldingFacet {
    pub name: &'static str,
    pub eng_name: &'static str,
    pub filters: MoldingFacetValues,
}

impl MoldingFacet {
    pub fn new(kind: MoldingFacetKind, filters: MoldingFacetValues) -> Self {
        Self {
            name: kind.name(),
            eng_name: kind.eng_name(),
            filters,
        }
    }
}
