//! Repository for the `rentals` and `rental_items` tables, including
//! the transactional rental creation flow.

use rentline_core::domain::{AssetStatus, MovementType, TrackingType};
use rentline_core::error::CoreError;
use rentline_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::product::Product;
use crate::models::rental::{CreateRental, Rental, RentalDetail, RentalItem, RentalWithClient};
use crate::repositories::StockMovementRepo;

const RENTAL_COLUMNS: &str = "id, client_id, rental_date, expected_return_date, \
     actual_return_date, status, notes, created_at, updated_at";

const ITEM_COLUMNS: &str = "id, rental_id, product_id, asset_id, quantity_rented, \
     quantity_returned, quantity_damaged, quantity_lost, created_at";

/// Error from the rental creation transaction.
///
/// Distinguishes domain rejections (validation, missing entities,
/// stock conflicts) from infrastructure failures so the API layer can
/// map each to the right status code.
#[derive(Debug, thiserror::Error)]
pub enum RentalTxError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// Provides rental listings and the transactional creation flow.
pub struct RentalRepo;

impl RentalRepo {
    /// Create a rental with its cart lines and inventory side effects,
    /// all-or-nothing.
    ///
    /// Inside a single transaction, in input order:
    /// 1. insert the rental row with status `rented`;
    /// 2. per line, match on the product's tracking type:
    ///    bulk lines conditionally decrement `stock_quantity` (rejected
    ///    with a conflict when stock is insufficient), serialized lines
    ///    conditionally flip the asset from `available` to `rented`
    ///    (rejected when the asset is not available);
    /// 3. insert the rental_item row;
    /// 4. append a `stock_movements` ledger row recording the change.
    ///
    /// The conditional UPDATEs double as the race guard: two
    /// submissions competing for the same stock serialize on the row
    /// lock and the loser's transaction rolls back with a conflict.
    pub async fn create_with_items(
        pool: &PgPool,
        input: &CreateRental,
    ) -> Result<Rental, RentalTxError> {
        input.validate()?;

        let mut tx = pool.begin().await?;

        let client_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM clients WHERE id = $1)")
                .bind(input.client_id)
                .fetch_one(&mut *tx)
                .await?;
        if !client_exists {
            return Err(CoreError::NotFound {
                entity: "Client",
                id: input.client_id,
            }
            .into());
        }

        let insert_rental = format!(
            "INSERT INTO rentals (client_id, rental_date, expected_return_date, status, notes)
             VALUES ($1, $2, $3, 'rented', $4)
             RETURNING {RENTAL_COLUMNS}"
        );
        let rental = sqlx::query_as::<_, Rental>(&insert_rental)
            .bind(input.client_id)
            .bind(input.rental_date)
            .bind(input.expected_return_date)
            .bind(&input.notes)
            .fetch_one(&mut *tx)
            .await?;

        for (idx, line) in input.items.iter().enumerate() {
            let product = sqlx::query_as::<_, Product>(
                "SELECT id, category_id, name, sku, description, tracking_type, stock_quantity,
                        replacement_value, is_active, created_at, updated_at
                 FROM products WHERE id = $1",
            )
            .bind(line.product_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Product",
                id: line.product_id,
            })?;

            match product.tracking_type {
                TrackingType::Bulk => {
                    let quantity = line.quantity.ok_or_else(|| {
                        CoreError::Validation(format!(
                            "items[{idx}]: quantity is required for bulk product {}",
                            product.sku
                        ))
                    })?;

                    Self::claim_bulk_stock(&mut tx, &rental, &product, quantity).await?;
                }
                TrackingType::Serialized => {
                    let asset_id = line.asset_id.ok_or_else(|| {
                        CoreError::Validation(format!(
                            "items[{idx}]: asset_id is required for serialized product {}",
                            product.sku
                        ))
                    })?;

                    Self::claim_asset(&mut tx, &rental, &product, asset_id).await?;
                }
            }
        }

        tx.commit().await?;

        tracing::info!(
            rental_id = rental.id,
            client_id = rental.client_id,
            lines = input.items.len(),
            "Rental transaction committed"
        );
        Ok(rental)
    }

    /// Conditionally decrement bulk stock, insert the line, and record
    /// the ledger entry. Zero rows updated means insufficient stock.
    async fn claim_bulk_stock(
        tx: &mut Transaction<'_, Postgres>,
        rental: &Rental,
        product: &Product,
        quantity: i32,
    ) -> Result<(), RentalTxError> {
        let stock_after: Option<i32> = sqlx::query_scalar(
            "UPDATE products
             SET stock_quantity = stock_quantity - $2, updated_at = NOW()
             WHERE id = $1 AND stock_quantity >= $2
             RETURNING stock_quantity",
        )
        .bind(product.id)
        .bind(quantity)
        .fetch_optional(&mut **tx)
        .await?;

        let stock_after = stock_after.ok_or_else(|| {
            CoreError::Conflict(format!(
                "insufficient stock for product {}: requested {quantity}",
                product.sku
            ))
        })?;

        sqlx::query(
            "INSERT INTO rental_items (rental_id, product_id, quantity_rented)
             VALUES ($1, $2, $3)",
        )
        .bind(rental.id)
        .bind(product.id)
        .bind(quantity)
        .execute(&mut **tx)
        .await?;

        StockMovementRepo::insert(
            tx,
            product.id,
            Some(rental.id),
            MovementType::RentalOut,
            -quantity,
            stock_after,
        )
        .await?;

        Ok(())
    }

    /// Conditionally flip an asset from `available` to `rented`,
    /// insert the line, and record a one-unit ledger entry. Zero rows
    /// updated means the asset is not available under this product,
    /// which also closes the double-booking race.
    async fn claim_asset(
        tx: &mut Transaction<'_, Postgres>,
        rental: &Rental,
        product: &Product,
        asset_id: DbId,
    ) -> Result<(), RentalTxError> {
        let claimed = sqlx::query(
            "UPDATE assets
             SET status = $3, updated_at = NOW()
             WHERE id = $1 AND product_id = $2 AND status = $4",
        )
        .bind(asset_id)
        .bind(product.id)
        .bind(AssetStatus::Rented)
        .bind(AssetStatus::Available)
        .execute(&mut **tx)
        .await?
        .rows_affected();

        if claimed == 0 {
            return Err(CoreError::Conflict(format!(
                "asset {asset_id} is not available for product {}",
                product.sku
            ))
            .into());
        }

        sqlx::query(
            "INSERT INTO rental_items (rental_id, product_id, asset_id)
             VALUES ($1, $2, $3)",
        )
        .bind(rental.id)
        .bind(product.id)
        .bind(asset_id)
        .execute(&mut **tx)
        .await?;

        // Remaining available units of this serialized product, so the
        // ledger's stock_after_change stays meaningful for both kinds.
        let available: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM assets WHERE product_id = $1 AND status = $2",
        )
        .bind(product.id)
        .bind(AssetStatus::Available)
        .fetch_one(&mut **tx)
        .await?;

        StockMovementRepo::insert(
            tx,
            product.id,
            Some(rental.id),
            MovementType::RentalOut,
            -1,
            available as i32,
        )
        .await?;

        Ok(())
    }

    /// Find a rental by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Rental>, sqlx::Error> {
        let query = format!("SELECT {RENTAL_COLUMNS} FROM rentals WHERE id = $1");
        sqlx::query_as::<_, Rental>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a rental with its lines. Returns `None` if the rental does
    /// not exist.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<RentalDetail>, sqlx::Error> {
        let Some(rental) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };

        let items_query = format!(
            "SELECT {ITEM_COLUMNS} FROM rental_items
             WHERE rental_id = $1
             ORDER BY id ASC"
        );
        let items = sqlx::query_as::<_, RentalItem>(&items_query)
            .bind(id)
            .fetch_all(pool)
            .await?;

        Ok(Some(RentalDetail { rental, items }))
    }

    /// List rentals with their client's business name, newest first.
    pub async fn list_with_client(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<RentalWithClient>, sqlx::Error> {
        sqlx::query_as::<_, RentalWithClient>(
            "SELECT r.id, r.client_id, c.business_name AS client_business_name,
                    r.rental_date, r.expected_return_date, r.actual_return_date,
                    r.status, r.notes, r.created_at
             FROM rentals r
             JOIN clients c ON c.id = r.client_id
             ORDER BY r.created_at DESC, r.id DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Total rental count, for pagination metadata.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM rentals")
            .fetch_one(pool)
            .await
    }
}
