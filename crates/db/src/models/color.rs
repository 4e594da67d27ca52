use catalog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `colors` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Color {
    pub id: DbId,
    pub name: String,
    /// Hex codes making up the color (several for multi-tone finishes).
    pub code: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a color.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateColor {
    pub name: String,
    pub code: Vec<String>,
}
