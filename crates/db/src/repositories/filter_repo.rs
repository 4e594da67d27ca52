//! Builds the storefront filter menus for both catalog variants.

use catalog_core::facets::{group_facets, MoldingFacetKind};
use sqlx::PgPool;

use crate::models::filters::{MoldingFacet, MoldingFacetValues, ProductFilters};
use crate::repositories::{ChildPropertyRepo, ColorRepo, FrameMoldingRepo, ProductPropertyRepo};

/// Read-only facet queries.
pub struct FilterRepo;

impl FilterRepo {
    /// Group every product and child property by display name.
    ///
    /// Buckets appear in the order their name is first seen by id.
    pub async fn product_filters(pool: &PgPool) -> Result<ProductFilters, sqlx::Error> {
        let (product_properties, child_properties) = tokio::try_join!(
            ProductPropertyRepo::list(pool),
            ChildPropertyRepo::list(pool),
        )?;

        Ok(ProductFilters {
            product: group_facets(&product_properties),
            child: group_facets(&child_properties),
        })
    }

    /// The four fixed frame molding facets, in menu order.
    ///
    /// The color facet lists only colors that some molding uses.
    pub async fn molding_filters(pool: &PgPool) -> Result<Vec<MoldingFacet>, sqlx::Error> {
        let (materials, widths, prices, colors) = tokio::try_join!(
            FrameMoldingRepo::distinct_materials(pool),
            FrameMoldingRepo::distinct_widths(pool),
            FrameMoldingRepo::distinct_prices(pool),
            ColorRepo::list_in_use(pool),
        )?;

        Ok(vec![
            MoldingFacet::new(
                MoldingFacetKind::Material,
                MoldingFacetValues::Materials(materials),
            ),
            MoldingFacet::new(MoldingFacetKind::Width, MoldingFacetValues::Widths(widths)),
            MoldingFacet::new(MoldingFacetKind::Price, MoldingFacetValues::Prices(prices)),
            MoldingFacet::new(MoldingFacetKind::Color, MoldingFacetValues::Colors(colors)),
        ])
    }
}
