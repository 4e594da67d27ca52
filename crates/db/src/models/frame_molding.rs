//! Frame molding entity model and DTOs.

use catalog_core::listing::{ListParams, MoldingSortKey};
use catalog_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::color::Color;

/// A row from the `frame_moldings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FrameMolding {
    pub id: DbId,
    pub color_id: DbId,
    pub name: String,
    pub price: Decimal,
    /// Profile width in millimetres.
    pub width: i32,
    pub material: String,
    pub images: Option<Vec<String>>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A frame molding together with its color.
#[derive(Debug, Clone, Serialize)]
pub struct MoldingWithColor {
    #[serde(flatten)]
    pub molding: FrameMolding,
    pub color: Color,
}

/// DTO for creating a frame molding.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFrameMolding {
    pub color_id: DbId,
    pub name: String,
    pub price: Decimal,
    pub width: i32,
    pub material: String,
    pub images: Option<Vec<String>>,
    pub description: Option<String>,
}

/// List parameters for frame moldings.
pub type MoldingListParams = ListParams<MoldingSortKey>;
