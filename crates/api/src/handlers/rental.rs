//! Handlers for the `/rentals` resource, including the transactional
//! creation endpoint.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use rentline_core::error::CoreError;
use rentline_core::types::DbId;
use rentline_db::models::client::Client;
use rentline_db::models::product::RentableProduct;
use rentline_db::models::rental::{CreateRental, Rental, RentalDetail, RentalWithClient};
use rentline_db::repositories::{ClientRepo, ProductRepo, RentalRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::response::{PageQuery, Paginated};
use crate::state::AppState;

/// Payload for the rental creation form: every client plus every
/// active product with its currently available assets.
#[derive(Debug, Serialize)]
pub struct RentalFormData {
    pub clients: Vec<Client>,
    pub products: Vec<RentableProduct>,
}

/// GET /api/v1/rentals
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> AppResult<Json<Paginated<RentalWithClient>>> {
    let rentals = RentalRepo::list_with_client(&state.pool, page.limit(), page.offset()).await?;
    let total = RentalRepo::count(&state.pool).await?;
    Ok(Json(Paginated {
        data: rentals,
        page: page.page(),
        per_page: page.per_page(),
        total,
    }))
}

/// GET /api/v1/rentals/form-data
///
/// The JSON equivalent of the rental creation form payload.
pub async fn form_data(State(state): State<AppState>) -> AppResult<Json<RentalFormData>> {
    // The form lists all clients; the client list is small enough that
    // pagination would only complicate the picker.
    let clients = ClientRepo::list(&state.pool, i64::from(i32::MAX), 0).await?;
    let products = ProductRepo::list_rentable(&state.pool).await?;
    Ok(Json(RentalFormData { clients, products }))
}

/// POST /api/v1/rentals
///
/// The transactional creation endpoint: rental + lines + inventory
/// side effects commit together or not at all.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateRental>,
) -> AppResult<(StatusCode, Json<Rental>)> {
    let rental = RentalRepo::create_with_items(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(rental)))
}

/// GET /api/v1/rentals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<RentalDetail>> {
    let detail = RentalRepo::find_detail(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Rental",
            id,
        }))?;
    Ok(Json(detail))
}
