//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - Where the read path nests associations, an enriched `*With*` struct

pub mod child_property;
pub mod color;
pub mod filters;
pub mod frame_molding;
pub mod product;
pub mod product_child;
pub mod product_info;
pub mod product_property;
