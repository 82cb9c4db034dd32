//! Repository for the `assets` table.

use rentline_core::domain::AssetStatus;
use rentline_core::types::DbId;
use sqlx::PgPool;

use crate::models::asset::{Asset, AssetWithProduct, CreateAsset, UpdateAsset};

const COLUMNS: &str = "id, product_id, serial_number, status, notes, created_at, updated_at";

/// Provides CRUD operations for assets plus the maintenance listing.
pub struct AssetRepo;

impl AssetRepo {
    /// Insert a new asset under a product, returning the created row.
    ///
    /// If `status` is `None`, defaults to `available`.
    pub async fn create(
        pool: &PgPool,
        product_id: DbId,
        input: &CreateAsset,
    ) -> Result<Asset, sqlx::Error> {
        let query = format!(
            "INSERT INTO assets (product_id, serial_number, status, notes)
             VALUES ($1, $2, COALESCE($3, 'available'::asset_status), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(product_id)
            .bind(&input.serial_number)
            .bind(input.status)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an asset by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assets WHERE id = $1");
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List assets for a given product, newest first.
    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Asset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM assets
             WHERE product_id = $1
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(product_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Asset count for a given product, for pagination metadata.
    pub async fn count_by_product(pool: &PgPool, product_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM assets WHERE product_id = $1")
            .bind(product_id)
            .fetch_one(pool)
            .await
    }

    /// Update an asset. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAsset,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET
                serial_number = COALESCE($2, serial_number),
                status = COALESCE($3, status),
                notes = COALESCE($4, notes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(&input.serial_number)
            .bind(input.status)
            .bind(&input.notes)
            .fetch_optional(pool)
            .await
    }

    /// Set an asset's status. No transition table is enforced: any
    /// status may be set from any other.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: AssetStatus,
    ) -> Result<Option<Asset>, sqlx::Error> {
        let query = format!(
            "UPDATE assets SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Asset>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an asset by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM assets WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List assets under maintenance or lost, joined with their
    /// product's name and replacement value, newest first.
    pub async fn list_maintenance(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<AssetWithProduct>, sqlx::Error> {
        sqlx::query_as::<_, AssetWithProduct>(
            "SELECT a.id, a.product_id, p.name AS product_name, p.replacement_value,
                    a.serial_number, a.status, a.notes, a.created_at, a.updated_at
             FROM assets a
             JOIN products p ON p.id = a.product_id
             WHERE a.status IN ('under_maintenance', 'lost')
             ORDER BY a.updated_at DESC, a.id DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Count of assets under maintenance or lost.
    pub async fn count_maintenance(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM assets WHERE status IN ('under_maintenance', 'lost')",
        )
        .fetch_one(pool)
        .await
    }
}
