//! Catalog domain primitives shared by the repository layer and the CLI.
//!
//! This crate has no database dependency: it holds the id/time aliases, the
//! domain error type, list/sort parameter parsing and the facet grouping
//! used to build filter menus.

pub mod error;
pub mod facets;
pub mod listing;
pub mod types;
