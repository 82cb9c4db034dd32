//! Routes mounted at `/maintenance`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::maintenance;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assets", get(maintenance::list_assets))
        .route("/assets/{id}/status", put(maintenance::update_status))
}
