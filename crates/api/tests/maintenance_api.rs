//! Integration tests for the maintenance view and the asset
//! status-update endpoint.

mod common;

use axum::http::StatusCode;
use common::{expect_status, get, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn listing_shows_only_maintenance_and_lost_assets(pool: PgPool) {
    let category_id = common::seed_category(&pool, "audio").await;
    let product_id = common::seed_serialized_product(&pool, category_id, "MIXER-01").await;
    common::seed_asset(&pool, product_id, "SN-1", "available").await;
    common::seed_asset(&pool, product_id, "SN-2", "rented").await;
    common::seed_asset(&pool, product_id, "SN-3", "under_maintenance").await;
    common::seed_asset(&pool, product_id, "SN-4", "lost").await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/maintenance/assets").await;
    let json = expect_status(response, StatusCode::OK).await;

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(json["total"], 2);
    for asset in data {
        assert!(matches!(
            asset["status"].as_str(),
            Some("under_maintenance" | "lost")
        ));
        // Joined product columns are present.
        assert_eq!(asset["product_name"], "Product MIXER-01");
        assert!(asset["replacement_value"].is_string());
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn status_can_move_between_any_two_values(pool: PgPool) {
    let category_id = common::seed_category(&pool, "audio").await;
    let product_id = common::seed_serialized_product(&pool, category_id, "MIXER-01").await;
    let asset_id = common::seed_asset(&pool, product_id, "SN-1", "lost").await;
    let app = common::build_test_app(pool.clone());

    // No transition table: lost straight back to available is allowed.
    let response = put_json(
        app,
        &format!("/api/v1/maintenance/assets/{asset_id}/status"),
        json!({ "status": "available" }),
    )
    .await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["status"], "available");
    assert_eq!(common::asset_status(&pool, asset_id).await, "available");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_status_value_is_rejected(pool: PgPool) {
    let category_id = common::seed_category(&pool, "audio").await;
    let product_id = common::seed_serialized_product(&pool, category_id, "MIXER-01").await;
    let asset_id = common::seed_asset(&pool, product_id, "SN-1", "available").await;
    let app = common::build_test_app(pool.clone());

    let response = put_json(
        app,
        &format!("/api/v1/maintenance/assets/{asset_id}/status"),
        json!({ "status": "broken" }),
    )
    .await;
    // Rejected at deserialization before touching the database.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(common::asset_status(&pool, asset_id).await, "available");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn updating_missing_asset_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = put_json(
        app,
        "/api/v1/maintenance/assets/9999/status",
        json!({ "status": "lost" }),
    )
    .await;
    let json = expect_status(response, StatusCode::NOT_FOUND).await;
    assert_eq!(json["code"], "NOT_FOUND");
}
