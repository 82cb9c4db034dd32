//! Route definitions, one module per resource.

pub mod categories;
pub mod clients;
pub mod dashboard;
pub mod health;
pub mod maintenance;
pub mod products;
pub mod rentals;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /clients                              list, create
/// /clients/{id}                         get, update, delete (guarded)
///
/// /categories                           list, create
/// /categories/{id}                      get, update, delete
///
/// /products                             list, create
/// /products/{product_id}                get, update, delete
/// /products/{product_id}/assets         list, create (serialized only)
/// /products/{product_id}/assets/{id}    get, update, delete
/// /products/{product_id}/stock-movements  ledger (read-only)
///
/// /rentals                              list, create (transactional)
/// /rentals/form-data                    creation form payload
/// /rentals/{id}                         detail with lines
///
/// /maintenance/assets                   under-maintenance + lost listing
/// /maintenance/assets/{id}/status       set status
///
/// /dashboard                            aggregate counters + recent rentals
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/clients", clients::router())
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/rentals", rentals::router())
        .nest("/maintenance", maintenance::router())
        .nest("/dashboard", dashboard::router())
}
