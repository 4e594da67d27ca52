use catalog_core::listing::ListQuery;
use catalog_db::CatalogVariant;
use clap::{Args, Parser, Subcommand};

/// Query the product catalog and print the result as JSON.
#[derive(Debug, Parser)]
#[command(name = "catalog", version)]
pub struct Cli {
    /// Catalog schema to query.
    #[arg(long, env = "CATALOG_VARIANT", global = true)]
    pub variant: Option<CatalogVariant>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply pending schema migrations and exit.
    Migrate,
    /// List products (or frame moldings) with optional filtering and sorting.
    Products(ListArgs),
    /// Show one product (or frame molding) by id.
    Product {
        id: i64,
    },
    /// Show the available filter facets.
    Filters,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring of the product name.
    #[arg(long)]
    pub title: Option<String>,
    /// Field to sort by; needs --order too.
    #[arg(long)]
    pub sort_by: Option<String>,
    /// `asc` or `desc`; needs --sort-by too.
    #[arg(long = "order")]
    pub order_by: Option<String>,
    #[arg(long)]
    pub limit: Option<i64>,
    #[arg(long)]
    pub offset: Option<i64>,
}

impl From<ListArgs> for ListQuery {
    fn from(args: ListArgs) -> Self {
        Self {
            sort_by: args.sort_by,
            order_by: args.order_by,
            title: args.title,
            limit: args.limit,
            offset: args.offset,
        }
    }
}
