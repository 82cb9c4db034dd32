//! Rental and rental-item models and DTOs.

use chrono::NaiveDate;
use rentline_core::domain::RentalStatus;
use rentline_core::error::CoreError;
use rentline_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A rental row from the `rentals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rental {
    pub id: DbId,
    pub client_id: DbId,
    pub rental_date: NaiveDate,
    pub expected_return_date: NaiveDate,
    pub actual_return_date: Option<NaiveDate>,
    pub status: RentalStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A rental joined with the owning client's business name, for listings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RentalWithClient {
    pub id: DbId,
    pub client_id: DbId,
    pub client_business_name: String,
    pub rental_date: NaiveDate,
    pub expected_return_date: NaiveDate,
    pub actual_return_date: Option<NaiveDate>,
    pub status: RentalStatus,
    pub notes: Option<String>,
    pub created_at: Timestamp,
}

/// A rental-item row from the `rental_items` table.
///
/// Exactly one of `quantity_rented` (bulk lines) and `asset_id`
/// (serialized lines) is set; the schema enforces the shape.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RentalItem {
    pub id: DbId,
    pub rental_id: DbId,
    pub product_id: DbId,
    pub asset_id: Option<DbId>,
    pub quantity_rented: Option<i32>,
    pub quantity_returned: i32,
    pub quantity_damaged: i32,
    pub quantity_lost: i32,
    pub created_at: Timestamp,
}

/// A rental plus its lines, as served by the rental detail endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RentalDetail {
    #[serde(flatten)]
    pub rental: Rental,
    pub items: Vec<RentalItem>,
}

/// One cart line in a rental submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CartLine {
    pub product_id: DbId,
    /// Required for bulk products; must be positive.
    pub quantity: Option<i32>,
    /// Required for serialized products.
    pub asset_id: Option<DbId>,
}

/// DTO for the transactional rental creation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRental {
    pub client_id: DbId,
    pub rental_date: NaiveDate,
    pub expected_return_date: NaiveDate,
    pub notes: Option<String>,
    pub items: Vec<CartLine>,
}

impl CreateRental {
    /// Shape-level validation, performed before any write.
    ///
    /// Checks date ordering, a non-empty cart, and that each line
    /// carries exactly one of quantity / asset_id with a positive
    /// quantity where present. Whether the line matches the product's
    /// tracking type is checked inside the transaction, where the
    /// product row is loaded.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.expected_return_date < self.rental_date {
            return Err(CoreError::Validation(
                "expected_return_date must be on or after rental_date".to_string(),
            ));
        }
        if self.items.is_empty() {
            return Err(CoreError::Validation(
                "items must contain at least one line".to_string(),
            ));
        }
        for (idx, line) in self.items.iter().enumerate() {
            match (line.quantity, line.asset_id) {
                (Some(_), Some(_)) => {
                    return Err(CoreError::Validation(format!(
                        "items[{idx}]: quantity and asset_id are mutually exclusive"
                    )));
                }
                (None, None) => {
                    return Err(CoreError::Validation(format!(
                        "items[{idx}]: either quantity or asset_id is required"
                    )));
                }
                (Some(qty), None) if qty <= 0 => {
                    return Err(CoreError::Validation(format!(
                        "items[{idx}]: quantity must be positive"
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}
