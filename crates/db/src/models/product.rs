//! Product entity model and DTOs.

use rentline_core::domain::{AssetStatus, TrackingType};
use rentline_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A product row from the `products` table.
///
/// For `TrackingType::Bulk` products `stock_quantity` is the live
/// counter; for `Serialized` products the effective quantity is the
/// count of associated assets with status `available` and the counter
/// is ignored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub category_id: DbId,
    pub name: String,
    /// Natural key; unique across products.
    pub sku: String,
    pub description: Option<String>,
    pub tracking_type: TrackingType,
    pub stock_quantity: i32,
    pub replacement_value: Decimal,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub category_id: DbId,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub tracking_type: TrackingType,
    /// Defaults to 0 if omitted. Ignored for serialized products.
    pub stock_quantity: Option<i32>,
    pub replacement_value: Decimal,
    /// Defaults to true if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing product. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub category_id: Option<DbId>,
    pub name: Option<String>,
    pub sku: Option<String>,
    pub description: Option<String>,
    pub tracking_type: Option<TrackingType>,
    pub stock_quantity: Option<i32>,
    pub replacement_value: Option<Decimal>,
    pub is_active: Option<bool>,
}

/// A product joined with its category name, for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProductWithCategory {
    pub id: DbId,
    pub category_id: DbId,
    pub category_name: String,
    pub name: String,
    pub sku: String,
    pub description: Option<String>,
    pub tracking_type: TrackingType,
    pub stock_quantity: i32,
    pub replacement_value: Decimal,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// One available asset under a product, for the rental form payload.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AvailableAsset {
    pub id: DbId,
    pub product_id: DbId,
    pub serial_number: String,
    pub status: AssetStatus,
}

/// An active product with its currently available assets, as served
/// by the rental form-data endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RentableProduct {
    #[serde(flatten)]
    pub product: Product,
    /// Empty for bulk products.
    pub available_assets: Vec<AvailableAsset>,
}
