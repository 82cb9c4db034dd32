//! Repository for the `products` table.

use rentline_core::domain::AssetStatus;
use rentline_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{
    AvailableAsset, CreateProduct, Product, ProductWithCategory, RentableProduct, UpdateProduct,
};

const COLUMNS: &str = "id, category_id, name, sku, description, tracking_type, stock_quantity, \
     replacement_value, is_active, created_at, updated_at";

/// Provides CRUD operations for products plus the rental-form listing.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    ///
    /// If `stock_quantity` is `None`, defaults to 0.
    /// If `is_active` is `None`, defaults to true.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (category_id, name, sku, description, tracking_type, stock_quantity,
                 replacement_value, is_active)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), $7, COALESCE($8, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.sku)
            .bind(&input.description)
            .bind(input.tracking_type)
            .bind(input.stock_quantity)
            .bind(input.replacement_value)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a product by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List products with their category name, newest first.
    pub async fn list_with_category(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProductWithCategory>, sqlx::Error> {
        sqlx::query_as::<_, ProductWithCategory>(
            "SELECT p.id, p.category_id, c.name AS category_name, p.name, p.sku,
                    p.description, p.tracking_type, p.stock_quantity, p.replacement_value,
                    p.is_active, p.created_at, p.updated_at
             FROM products p
             JOIN categories c ON c.id = p.category_id
             ORDER BY p.created_at DESC, p.id DESC
             LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
    }

    /// Total product count, for pagination metadata.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!(
            "UPDATE products SET
                category_id = COALESCE($2, category_id),
                name = COALESCE($3, name),
                sku = COALESCE($4, sku),
                description = COALESCE($5, description),
                tracking_type = COALESCE($6, tracking_type),
                stock_quantity = COALESCE($7, stock_quantity),
                replacement_value = COALESCE($8, replacement_value),
                is_active = COALESCE($9, is_active),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(input.category_id)
            .bind(&input.name)
            .bind(&input.sku)
            .bind(&input.description)
            .bind(input.tracking_type)
            .bind(input.stock_quantity)
            .bind(input.replacement_value)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List active products with their currently available assets,
    /// ordered by product name. Serves the rental form-data endpoint.
    ///
    /// Bulk products are returned with an empty asset list.
    pub async fn list_rentable(pool: &PgPool) -> Result<Vec<RentableProduct>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM products
             WHERE is_active = TRUE
             ORDER BY name ASC"
        );
        let products = sqlx::query_as::<_, Product>(&query).fetch_all(pool).await?;

        let assets = sqlx::query_as::<_, AvailableAsset>(
            "SELECT a.id, a.product_id, a.serial_number, a.status
             FROM assets a
             JOIN products p ON p.id = a.product_id
             WHERE p.is_active = TRUE AND a.status = $1
             ORDER BY a.serial_number ASC",
        )
        .bind(AssetStatus::Available)
        .fetch_all(pool)
        .await?;

        let mut rentable: Vec<RentableProduct> = products
            .into_iter()
            .map(|product| RentableProduct {
                product,
                available_assets: Vec::new(),
            })
            .collect();

        for asset in assets {
            if let Some(entry) = rentable
                .iter_mut()
                .find(|r| r.product.id == asset.product_id)
            {
                entry.available_assets.push(asset);
            }
        }

        Ok(rentable)
    }
}
