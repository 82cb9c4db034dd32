//! Handlers for the `/categories` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rentline_core::error::CoreError;
use rentline_core::types::DbId;
use rentline_db::models::category::{Category, CreateCategory, UpdateCategory};
use rentline_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::response::{PageQuery, Paginated};
use crate::state::AppState;

/// POST /api/v1/categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<Category>)> {
    require_non_empty("name", &input.name)?;
    require_non_empty("slug", &input.slug)?;

    let category = CategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/v1/categories
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<Paginated<Category>>> {
    let categories = CategoryRepo::list(&state.pool, page.limit(), page.offset()).await?;
    let total = CategoryRepo::count(&state.pool).await?;
    Ok(Json(Paginated {
        data: categories,
        page: page.page(),
        per_page: page.per_page(),
        total,
    }))
}

/// GET /api/v1/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// PUT /api/v1/categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<Category>> {
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(category))
}

/// DELETE /api/v1/categories/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))
    }
}
