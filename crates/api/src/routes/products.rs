//! Routes mounted at `/products`, including the asset sub-resource
//! and the stock-movement ledger.

use axum::routing::get;
use axum::Router;

use crate::handlers::{asset, product};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    let asset_routes = Router::new()
        .route("/", get(asset::list_by_product).post(asset::create))
        .route(
            "/{id}",
            get(asset::get_by_id)
                .put(asset::update)
                .delete(asset::delete),
        );

    Router::new()
        .route("/", get(product::list).post(product::create))
        .route(
            "/{product_id}",
            get(product::get_by_id)
                .put(product::update)
                .delete(product::delete),
        )
        .route(
            "/{product_id}/stock-movements",
            get(product::stock_movements),
        )
        .nest("/{product_id}/assets", asset_routes)
}
