//! Asset entity model and DTOs.

use rentline_core::domain::AssetStatus;
use rentline_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An asset row from the `assets` table: one physical, serially
/// numbered unit of a serialized product.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Asset {
    pub id: DbId,
    pub product_id: DbId,
    /// Natural key; unique across assets.
    pub serial_number: String,
    pub status: AssetStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new asset under a serialized product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAsset {
    pub serial_number: String,
    /// Defaults to `available` if omitted.
    pub status: Option<AssetStatus>,
    pub notes: Option<String>,
}

/// DTO for updating an existing asset. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAsset {
    pub serial_number: Option<String>,
    pub status: Option<AssetStatus>,
    pub notes: Option<String>,
}

/// An asset joined with its product, for the maintenance view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssetWithProduct {
    pub id: DbId,
    pub product_id: DbId,
    pub product_name: String,
    pub replacement_value: Decimal,
    pub serial_number: String,
    pub status: AssetStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
