//! Shared helpers for API integration tests.
//!
//! Builds the full application router (same middleware stack as
//! production) and provides request/fixture helpers. Each test file is
//! its own binary and uses only a subset of these.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use rentline_api::config::ServerConfig;
use rentline_api::router::build_app_router;
use rentline_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool. Mirrors `main.rs`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert status and return the body JSON in one step.
pub async fn expect_status(response: Response, status: StatusCode) -> serde_json::Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Fixtures (inserted directly, bypassing the API)
// ---------------------------------------------------------------------------

pub async fn seed_client(pool: &PgPool, tax_id: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO clients (name, tax_id, business_name)
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(format!("Contact {tax_id}"))
    .bind(tax_id)
    .bind(format!("Business {tax_id}"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_category(pool: &PgPool, slug: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO categories (name, slug) VALUES ($1, $2) RETURNING id")
        .bind(format!("Category {slug}"))
        .bind(slug)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn seed_bulk_product(pool: &PgPool, category_id: i64, sku: &str, stock: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO products
            (category_id, name, sku, tracking_type, stock_quantity, replacement_value)
         VALUES ($1, $2, $3, 'bulk', $4, 25.00) RETURNING id",
    )
    .bind(category_id)
    .bind(format!("Product {sku}"))
    .bind(sku)
    .bind(stock)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_serialized_product(pool: &PgPool, category_id: i64, sku: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO products
            (category_id, name, sku, tracking_type, replacement_value)
         VALUES ($1, $2, $3, 'serialized', 150.00) RETURNING id",
    )
    .bind(category_id)
    .bind(format!("Product {sku}"))
    .bind(sku)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn seed_asset(pool: &PgPool, product_id: i64, serial: &str, status: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO assets (product_id, serial_number, status)
         VALUES ($1, $2, $3::asset_status) RETURNING id",
    )
    .bind(product_id)
    .bind(serial)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Direct row lookups for post-condition assertions
// ---------------------------------------------------------------------------

pub async fn product_stock(pool: &PgPool, product_id: i64) -> i32 {
    sqlx::query_scalar("SELECT stock_quantity FROM products WHERE id = $1")
        .bind(product_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn asset_status(pool: &PgPool, asset_id: i64) -> String {
    sqlx::query_scalar("SELECT status::text FROM assets WHERE id = $1")
        .bind(asset_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
