//! Dashboard aggregation payloads.

use serde::Serialize;

/// Headline counters for the dashboard view.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    /// Total client count.
    pub total_clients: i64,
    /// Count of active products.
    pub active_products: i64,
    /// Sum of rented bulk quantities plus count of rented serialized
    /// assets, across rentals still in status `rented`.
    pub items_rented: i64,
    /// Rentals still out past their expected return date.
    pub late_rentals: i64,
}
