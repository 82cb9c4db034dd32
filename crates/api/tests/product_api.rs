//! Integration tests for `/categories` and `/products`.

mod common;

use axum::http::StatusCode;
use common::{delete, expect_status, get, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn category_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/categories",
        json!({ "name": "Sound", "slug": "sound" }),
    )
    .await;
    let created = expect_status(response, StatusCode::CREATED).await;
    let id = created["id"].as_i64().unwrap();

    let response = put_json(
        app.clone(),
        &format!("/api/v1/categories/{id}"),
        json!({ "name": "Sound & Light" }),
    )
    .await;
    let updated = expect_status(response, StatusCode::OK).await;
    assert_eq!(updated["name"], "Sound & Light");
    assert_eq!(updated["slug"], "sound");

    let response = delete(app.clone(), &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/categories/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_category_slug_conflicts(pool: PgPool) {
    common::seed_category(&pool, "tents").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/categories",
        json!({ "name": "Tents", "slug": "tents" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_bulk_product(pool: PgPool) {
    let category_id = common::seed_category(&pool, "chairs").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/products",
        json!({
            "category_id": category_id,
            "name": "Folding Chair",
            "sku": "CHAIR-01",
            "tracking_type": "bulk",
            "stock_quantity": 150,
            "replacement_value": "12.50"
        }),
    )
    .await;
    let created = expect_status(response, StatusCode::CREATED).await;
    assert_eq!(created["tracking_type"], "bulk");
    assert_eq!(created["stock_quantity"], 150);
    assert_eq!(created["is_active"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_product_rejects_negative_stock(pool: PgPool) {
    let category_id = common::seed_category(&pool, "chairs").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/products",
        json!({
            "category_id": category_id,
            "name": "Folding Chair",
            "sku": "CHAIR-01",
            "tracking_type": "bulk",
            "stock_quantity": -5,
            "replacement_value": "12.50"
        }),
    )
    .await;
    let json = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_product_rejects_unknown_category(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/products",
        json!({
            "category_id": 424242,
            "name": "Folding Chair",
            "sku": "CHAIR-01",
            "tracking_type": "bulk",
            "stock_quantity": 1,
            "replacement_value": "12.50"
        }),
    )
    .await;
    // Foreign-key violation surfaces as a validation error.
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn product_listing_includes_category_name(pool: PgPool) {
    let category_id = common::seed_category(&pool, "lights").await;
    common::seed_bulk_product(&pool, category_id, "LIGHT-01", 10).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/products").await;
    let json = expect_status(response, StatusCode::OK).await;

    let first = &json["data"][0];
    assert_eq!(first["sku"], "LIGHT-01");
    assert_eq!(first["category_name"], "Category lights");
    assert_eq!(json["total"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_sku_conflicts(pool: PgPool) {
    let category_id = common::seed_category(&pool, "lights").await;
    common::seed_bulk_product(&pool, category_id, "LIGHT-01", 10).await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/products",
        json!({
            "category_id": category_id,
            "name": "Par Light",
            "sku": "LIGHT-01",
            "tracking_type": "bulk",
            "stock_quantity": 4,
            "replacement_value": "80.00"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn update_can_deactivate_product(pool: PgPool) {
    let category_id = common::seed_category(&pool, "lights").await;
    let product_id = common::seed_bulk_product(&pool, category_id, "LIGHT-01", 10).await;
    let app = common::build_test_app(pool);

    let response = put_json(
        app,
        &format!("/api/v1/products/{product_id}"),
        json!({ "is_active": false }),
    )
    .await;
    let json = expect_status(response, StatusCode::OK).await;
    assert_eq!(json["is_active"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_product_removes_row(pool: PgPool) {
    let category_id = common::seed_category(&pool, "lights").await;
    let product_id = common::seed_bulk_product(&pool, category_id, "LIGHT-01", 10).await;
    let app = common::build_test_app(pool.clone());

    let response = delete(app, &format!("/api/v1/products/{product_id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(common::count_rows(&pool, "products").await, 0);
}
