//! Handler for the dashboard aggregation endpoint.

use axum::extract::State;
use axum::Json;
use rentline_db::models::dashboard::DashboardStats;
use rentline_db::models::rental::RentalWithClient;
use rentline_db::repositories::DashboardRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Number of recent rentals shown on the dashboard.
const LATEST_RENTALS_LIMIT: i64 = 5;

/// Full dashboard payload: headline counters plus the most recent
/// rentals.
#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub stats: DashboardStats,
    pub latest_rentals: Vec<RentalWithClient>,
}

/// GET /api/v1/dashboard
///
/// Everything is computed on each request; there is no caching.
pub async fn get(State(state): State<AppState>) -> AppResult<Json<DashboardData>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    let latest_rentals = DashboardRepo::latest_rentals(&state.pool, LATEST_RENTALS_LIMIT).await?;
    Ok(Json(DashboardData {
        stats,
        latest_rentals,
    }))
}
