//! Handlers for the asset-maintenance view: assets under maintenance
//! or lost, and the direct status-update endpoint.

use axum::extract::{Path, Query, State};
use axum::Json;
use rentline_core::domain::AssetStatus;
use rentline_core::error::CoreError;
use rentline_core::types::DbId;
use rentline_db::models::asset::{Asset, AssetWithProduct};
use rentline_db::repositories::AssetRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::{PageQuery, Paginated};
use crate::state::AppState;

/// Request body for the status-update endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateAssetStatus {
    pub status: AssetStatus,
}

/// GET /api/v1/maintenance/assets
///
/// Assets with status in {under_maintenance, lost}, joined with their
/// product's name and replacement value.
pub async fn list_assets(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<Paginated<AssetWithProduct>>> {
    let assets = AssetRepo::list_maintenance(&state.pool, page.limit(), page.offset()).await?;
    let total = AssetRepo::count_maintenance(&state.pool).await?;
    Ok(Json(Paginated {
        data: assets,
        page: page.page(),
        per_page: page.per_page(),
        total,
    }))
}

/// PUT /api/v1/maintenance/assets/{id}/status
///
/// Sets the asset's status. Any status may be set from any other;
/// there is no enforced transition table.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAssetStatus>,
) -> AppResult<Json<Asset>> {
    let asset = AssetRepo::update_status(&state.pool, id, input.status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;
    Ok(Json(asset))
}
