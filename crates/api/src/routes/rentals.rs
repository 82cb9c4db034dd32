//! Routes mounted at `/rentals`.

use axum::routing::get;
use axum::Router;

use crate::handlers::rental;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(rental::list).post(rental::create))
        .route("/form-data", get(rental::form_data))
        .route("/{id}", get(rental::get_by_id))
}
