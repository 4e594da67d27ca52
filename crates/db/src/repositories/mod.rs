//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument.

pub mod child_property_repo;
pub mod color_repo;
pub mod filter_repo;
pub mod frame_molding_repo;
pub mod product_child_repo;
pub mod product_info_repo;
pub mod product_property_repo;
pub mod product_repo;

pub use child_property_repo::ChildPropertyRepo;
pub use color_repo::ColorRepo;
pub use filter_repo::FilterRepo;
pub use frame_molding_repo::FrameMoldingRepo;
pub use product_child_repo::ProductChildRepo;
pub use product_info_repo::ProductInfoRepo;
pub use product_property_repo::ProductPropertyRepo;
pub use product_repo::ProductRepo;
