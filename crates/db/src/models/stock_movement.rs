//! Stock movement ledger model.

use rentline_core::domain::MovementType;
use rentline_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row in the append-only `stock_movements` ledger.
///
/// `quantity_change` is negative for outbound movements. For
/// serialized products each movement represents a single unit and
/// `stock_after_change` is the remaining count of available assets.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StockMovement {
    pub id: DbId,
    pub product_id: DbId,
    pub rental_id: Option<DbId>,
    pub movement_type: MovementType,
    pub quantity_change: i32,
    pub stock_after_change: i32,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}
