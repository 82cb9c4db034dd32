//! Routes mounted at `/clients`.

use axum::routing::get;
use axum::Router;

use crate::handlers::client;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(client::list).post(client::create))
        .route(
            "/{id}",
            get(client::get_by_id)
                .put(client::update)
                .delete(client::delete),
        )
}
