//! Dispatch of CLI commands onto the catalog context.

use catalog_core::error::CoreError;
use catalog_core::listing::{ListParams, ListQuery};
use catalog_db::{Catalog, CatalogVariant};
use serde_json::{json, Value};

use crate::cli::Command;

/// Run one command against the configured catalog variant.
pub async fn run(
    catalog: &Catalog,
    variant: CatalogVariant,
    command: Command,
) -> anyhow::Result<Value> {
    let output = match command {
        Command::Migrate => json!({ "status": "schema synchronized" }),

        Command::Products(args) => {
            let query = ListQuery::from(args);
            match variant {
                CatalogVariant::Composite => {
                    let params = ListParams::from_query(&query)?;
                    serde_json::to_value(catalog.products(&params).await?)?
                }
                CatalogVariant::FrameMolding => {
                    let params = ListParams::from_query(&query)?;
                    serde_json::to_value(catalog.moldings(&params).await?)?
                }
            }
        }

        Command::Product { id } => match variant {
            CatalogVariant::Composite => {
                let product = catalog
                    .product_by_id(id)
                    .await?
                    .ok_or(CoreError::NotFound { entity: "product", id })?;
                serde_json::to_value(product)?
            }
            CatalogVariant::FrameMolding => {
                let molding = catalog
                    .molding_by_id(id)
                    .await?
                    .ok_or(CoreError::NotFound {
                        entity: "frame molding",
                        id,
                    })?;
                serde_json::to_value(molding)?
            }
        },

        Command::Filters => match variant {
            CatalogVariant::Composite => serde_json::to_value(catalog.filters().await?)?,
            CatalogVariant::FrameMolding => serde_json::to_value(catalog.molding_filters().await?)?,
        },
    };

    Ok(output)
}
