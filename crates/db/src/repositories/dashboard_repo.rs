//! Aggregation queries for the dashboard view.

use sqlx::PgPool;

use crate::models::dashboard::DashboardStats;
use crate::models::rental::RentalWithClient;

/// Computes the dashboard counters and the recent-rentals list. All
/// figures are computed on each call; nothing is cached.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Compute the headline counters.
    ///
    /// "Items rented" sums quantity_rented over bulk lines of rentals
    /// still out, plus the count of assets currently in status
    /// `rented`. "Late rentals" are rentals still out past their
    /// expected return date.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        let total_clients: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(pool)
            .await?;

        let active_products: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE is_active = TRUE")
                .fetch_one(pool)
                .await?;

        let rented_bulk: i64 = sqlx::query_scalar(
            "SELECT COALESCE(SUM(ri.quantity_rented), 0)
             FROM rental_items ri
             JOIN rentals r ON r.id = ri.rental_id
             JOIN products p ON p.id = ri.product_id
             WHERE r.status = 'rented' AND p.tracking_type = 'bulk'",
        )
        .fetch_one(pool)
        .await?;

        let rented_serialized: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM assets WHERE status = 'rented'")
                .fetch_one(pool)
                .await?;

        let late_rentals: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM rentals
             WHERE status = 'rented' AND expected_return_date < CURRENT_DATE",
        )
        .fetch_one(pool)
        .await?;

        Ok(DashboardStats {
            total_clients,
            active_products,
            items_rented: rented_bulk + rented_serialized,
            late_rentals,
        })
    }

    /// The most recently created rentals, with client business names.
    pub async fn latest_rentals(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<RentalWithClient>, sqlx::Error> {
        sqlx::query_as::<_, RentalWithClient>(
            "SELECT r.id, r.client_id, c.business_name AS client_business_name,
                    r.rental_date, r.expected_return_date, r.actual_return_date,
                    r.status, r.notes, r.created_at
             FROM rentals r
             JOIN clients c ON c.id = r.client_id
             ORDER BY r.created_at DESC, r.id DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
