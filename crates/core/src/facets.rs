//! Filter facets for the catalog storefront.
//!
//! A facet is a named filterable attribute together with the values a shopper
//! can pick. Composite products derive their facets by grouping property rows
//! by display name ([`group_facets`]); frame moldings use a fixed set of
//! column-backed facets ([`MoldingFacetKind`]).

use std::collections::HashMap;

use serde::Serialize;

use crate::types::DbId;

// ---------------------------------------------------------------------------
// Grouped facets
// ---------------------------------------------------------------------------

/// A row that can contribute one option to a facet.
///
/// Implemented by the property models in the repository layer.
pub trait FacetSource {
    fn facet_id(&self) -> DbId;
    /// Display name, also the grouping key.
    fn facet_name(&self) -> &str;
    fn facet_eng_name(&self) -> &str;
    fn facet_value(&self) -> &str;
}

/// One selectable value inside a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub id: DbId,
    pub value: String,
}

/// A facet with all of its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Facet {
    pub name: String,
    pub eng_name: String,
    pub filters: Vec<FacetOption>,
}

/// Group rows into facets keyed by display name.
///
/// Facets appear in first-occurrence order of their name and options keep the
/// input order, so feeding rows ordered by id gives a stable menu. The
/// `eng_name` of a facet is taken from its first row.
pub fn group_facets<'a, T, I>(rows: I) -> Vec<Facet>
where
    T: FacetSource + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut facets: Vec<Facet> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for row in rows {
        let option = FacetOption {
            id: row.facet_id(),
            value: row.facet_value().to_string(),
        };

        match index.get(row.facet_name()) {
            Some(&i) => facets[i].filters.push(option),
            None => {
                index.insert(row.facet_name(), facets.len());
                facets.push(Facet {
                    name: row.facet_name().to_string(),
                    eng_name: row.facet_eng_name().to_string(),
                    filters: vec![option],
                });
            }
        }
    }

    facets
}

// ---------------------------------------------------------------------------
// Frame molding facets
// ---------------------------------------------------------------------------

/// The fixed facets offered for frame moldings, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoldingFacetKind {
    Material,
    Width,
    Price,
    Color,
}

impl MoldingFacetKind {
    pub const ALL: [MoldingFacetKind; 4] = [
        MoldingFacetKind::Material,
        MoldingFacetKind::Width,
        MoldingFacetKind::Price,
        MoldingFacetKind::Color,
    ];

    /// Storefront (Russian) label.
    pub fn name(self) -> &'static str {
        match self {
            Self::Material => "материал",
            Self::Width => "размер",
            Self::Price => "цена",
            Self::Color => "цвет",
        }
    }

    /// Machine name; matches the column (or association) it is built from.
    pub fn eng_name(self) -> &'static str {
        match self {
            Self::Material => "material",
            Self::Width => "width",
            Self::Price => "price",
            Self::Color => "color",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
