//! Repository for the append-only `stock_movements` ledger.

use rentline_core::domain::MovementType;
use rentline_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::stock_movement::StockMovement;

const COLUMNS: &str = "id, product_id, rental_id, movement_type, quantity_change, \
     stock_after_change, notes, created_at";

/// Writes and reads the stock movement audit trail. Writes only happen
/// inside the rental transaction, on the same connection.
pub struct StockMovementRepo;

impl StockMovementRepo {
    /// Append a ledger row within an open transaction.
    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        product_id: DbId,
        rental_id: Option<DbId>,
        movement_type: MovementType,
        quantity_change: i32,
        stock_after_change: i32,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO stock_movements
                (product_id, rental_id, movement_type, quantity_change, stock_after_change)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(product_id)
        .bind(rental_id)
        .bind(movement_type)
        .bind(quantity_change)
        .bind(stock_after_change)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// List ledger rows for a product, newest first.
    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StockMovement>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM stock_movements
             WHERE product_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, StockMovement>(&query)
            .bind(product_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Ledger row count for a product, for pagination metadata.
    pub async fn count_by_product(pool: &PgPool, product_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM stock_movements WHERE product_id = $1")
            .bind(product_id)
            .fetch_one(pool)
            .await
    }
}
