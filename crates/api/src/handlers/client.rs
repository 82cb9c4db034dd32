//! Handlers for the `/clients` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rentline_core::error::CoreError;
use rentline_core::types::DbId;
use rentline_db::models::client::{Client, CreateClient, UpdateClient};
use rentline_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::response::{PageQuery, Paginated};
use crate::state::AppState;

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    require_non_empty("name", &input.name)?;
    require_non_empty("tax_id", &input.tax_id)?;
    require_non_empty("business_name", &input.business_name)?;

    let client = ClientRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// GET /api/v1/clients
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<Paginated<Client>>> {
    let clients = ClientRepo::list(&state.pool, page.limit(), page.offset()).await?;
    let total = ClientRepo::count(&state.pool).await?;
    Ok(Json(Paginated {
        data: clients,
        page: page.page(),
        per_page: page.per_page(),
        total,
    }))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// PUT /api/v1/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))?;
    Ok(Json(client))
}

/// DELETE /api/v1/clients/{id}
///
/// Refused with 409 when the client owns any rental; the rental
/// history must stay attributable.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let rentals = ClientRepo::rental_count(&state.pool, id).await?;
    if rentals > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "client {id} has {rentals} rental(s) and cannot be deleted"
        ))));
    }

    let deleted = ClientRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Client",
            id,
        }))
    }
}
