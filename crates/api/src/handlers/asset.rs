//! Handlers for the asset sub-resource:
//! `/products/{product_id}/assets[/{id}]`.
//!
//! Assets only exist under serialized products; every route answers
//! 404 when the parent product is missing or bulk-tracked.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rentline_core::domain::TrackingType;
use rentline_core::error::CoreError;
use rentline_core::types::DbId;
use rentline_db::models::asset::{Asset, CreateAsset, UpdateAsset};
use rentline_db::models::product::Product;
use rentline_db::repositories::{AssetRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::response::{PageQuery, Paginated};
use crate::state::AppState;

/// Load the parent product and reject with 404 unless it is serialized.
async fn load_serialized_product(state: &AppState, product_id: DbId) -> AppResult<Product> {
    let product = ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;

    match product.tracking_type {
        TrackingType::Serialized => Ok(product),
        TrackingType::Bulk => Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        })),
    }
}

/// POST /api/v1/products/{product_id}/assets
pub async fn create(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(input): Json<CreateAsset>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    let product = load_serialized_product(&state, product_id).await?;
    require_non_empty("serial_number", &input.serial_number)?;

    let asset = AssetRepo::create(&state.pool, product.id, &input).await?;
    Ok((StatusCode::CREATED, Json(asset)))
}

/// GET /api/v1/products/{product_id}/assets
pub async fn list_by_product(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<Paginated<Asset>>> {
    let product = load_serialized_product(&state, product_id).await?;

    let assets =
        AssetRepo::list_by_product(&state.pool, product.id, page.limit(), page.offset()).await?;
    let total = AssetRepo::count_by_product(&state.pool, product.id).await?;
    Ok(Json(Paginated {
        data: assets,
        page: page.page(),
        per_page: page.per_page(),
        total,
    }))
}

/// GET /api/v1/products/{product_id}/assets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(DbId, DbId)>,
) -> AppResult<Json<Asset>> {
    let product = load_serialized_product(&state, product_id).await?;
    let asset = find_under_product(&state, &product, id).await?;
    Ok(Json(asset))
}

/// PUT /api/v1/products/{product_id}/assets/{id}
pub async fn update(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(DbId, DbId)>,
    Json(input): Json<UpdateAsset>,
) -> AppResult<Json<Asset>> {
    let product = load_serialized_product(&state, product_id).await?;
    find_under_product(&state, &product, id).await?;

    let asset = AssetRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;
    Ok(Json(asset))
}

/// DELETE /api/v1/products/{product_id}/assets/{id}
///
/// No in-use guard: an asset may be deleted regardless of status,
/// matching the current business rules.
pub async fn delete(
    State(state): State<AppState>,
    Path((product_id, id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let product = load_serialized_product(&state, product_id).await?;
    find_under_product(&state, &product, id).await?;

    let deleted = AssetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Asset", id }))
    }
}

/// Find an asset and confirm it belongs to the given product.
async fn find_under_product(state: &AppState, product: &Product, id: DbId) -> AppResult<Asset> {
    let asset = AssetRepo::find_by_id(&state.pool, id)
        .await?
        .filter(|a| a.product_id == product.id)
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Asset", id }))?;
    Ok(asset)
}
