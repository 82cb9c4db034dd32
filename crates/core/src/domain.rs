//! Enumerated domain values, backed by PostgreSQL enum types.
//!
//! Each enum maps to a database enum of the same snake_case name, so
//! values round-trip through sqlx binds and `query_as` without lookup
//! tables. Every site that branches on one of these must match
//! exhaustively; there is deliberately no catch-all variant.

use serde::{Deserialize, Serialize};

/// How a product's inventory is counted.
///
/// `Bulk` products track a single integer counter; `Serialized`
/// products derive their quantity from the set of associated assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "tracking_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TrackingType {
    Bulk,
    Serialized,
}

/// Status of one physical, serially-numbered unit.
///
/// A finite value set, not a state machine: any status may be set to
/// any other via the maintenance endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "asset_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    Available,
    Rented,
    UnderMaintenance,
    Lost,
}

/// Status of a rental transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "rental_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RentalStatus {
    Rented,
    Returned,
}

/// Kind of entry in the append-only stock movement ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "movement_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    RentalOut,
    RentalReturn,
    Adjustment,
}
