//! Handlers for the `/products` resource and its stock-movement ledger.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rentline_core::error::CoreError;
use rentline_core::types::DbId;
use rentline_db::models::product::{CreateProduct, Product, ProductWithCategory, UpdateProduct};
use rentline_db::models::stock_movement::StockMovement;
use rentline_db::repositories::{ProductRepo, StockMovementRepo};
use rust_decimal::Decimal;

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::response::{PageQuery, Paginated};
use crate::state::AppState;

fn validate_quantities(
    stock_quantity: Option<i32>,
    replacement_value: Option<Decimal>,
) -> Result<(), CoreError> {
    if let Some(qty) = stock_quantity {
        if qty < 0 {
            return Err(CoreError::Validation(
                "stock_quantity must not be negative".to_string(),
            ));
        }
    }
    if let Some(value) = replacement_value {
        if value < Decimal::ZERO {
            return Err(CoreError::Validation(
                "replacement_value must not be negative".to_string(),
            ));
        }
    }
    Ok(())
}

/// POST /api/v1/products
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    require_non_empty("name", &input.name)?;
    require_non_empty("sku", &input.sku)?;
    validate_quantities(input.stock_quantity, Some(input.replacement_value))?;

    let product = ProductRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// GET /api/v1/products
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<Paginated<ProductWithCategory>>> {
    let products = ProductRepo::list_with_category(&state.pool, page.limit(), page.offset()).await?;
    let total = ProductRepo::count(&state.pool).await?;
    Ok(Json(Paginated {
        data: products,
        page: page.page(),
        per_page: page.per_page(),
        total,
    }))
}

/// GET /api/v1/products/{product_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;
    Ok(Json(product))
}

/// PUT /api/v1/products/{product_id}
pub async fn update(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<Product>> {
    validate_quantities(input.stock_quantity, input.replacement_value)?;

    let product = ProductRepo::update(&state.pool, product_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;
    Ok(Json(product))
}

/// DELETE /api/v1/products/{product_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = ProductRepo::delete(&state.pool, product_id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))
    }
}

/// GET /api/v1/products/{product_id}/stock-movements
///
/// Read-only view of the audit ledger written by rental transactions.
pub async fn stock_movements(
    State(state): State<AppState>,
    Path(product_id): Path<DbId>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<Paginated<StockMovement>>> {
    // 404 for an unknown product rather than an empty ledger.
    ProductRepo::find_by_id(&state.pool, product_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Product",
            id: product_id,
        }))?;

    let movements =
        StockMovementRepo::list_by_product(&state.pool, product_id, page.limit(), page.offset())
            .await?;
    let total = StockMovementRepo::count_by_product(&state.pool, product_id).await?;
    Ok(Json(Paginated {
        data: movements,
        page: page.page(),
        per_page: page.per_page(),
        total,
    }))
}
