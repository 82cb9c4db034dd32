//! Integration tests for the dashboard aggregation endpoint.

mod common;

use axum::http::StatusCode;
use common::{expect_status, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_database_yields_zero_counters(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/dashboard").await;
    let json = expect_status(response, StatusCode::OK).await;

    assert_eq!(json["stats"]["total_clients"], 0);
    assert_eq!(json["stats"]["active_products"], 0);
    assert_eq!(json["stats"]["items_rented"], 0);
    assert_eq!(json["stats"]["late_rentals"], 0);
    assert!(json["latest_rentals"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn counters_reflect_seeded_rows(pool: PgPool) {
    let client_id = common::seed_client(&pool, "123456789").await;
    let category_id = common::seed_category(&pool, "audio").await;
    let bulk_id = common::seed_bulk_product(&pool, category_id, "CHAIR-01", 100).await;
    let serialized_id = common::seed_serialized_product(&pool, category_id, "MIXER-01").await;
    let asset_id = common::seed_asset(&pool, serialized_id, "SN-1", "rented").await;

    // One late rental still out: 6 bulk units plus the rented asset.
    let rental_id: i64 = sqlx::query_scalar(
        "INSERT INTO rentals (client_id, rental_date, expected_return_date)
         VALUES ($1, CURRENT_DATE - 14, CURRENT_DATE - 7) RETURNING id",
    )
    .bind(client_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO rental_items (rental_id, product_id, quantity_rented)
         VALUES ($1, $2, 6)",
    )
    .bind(rental_id)
    .bind(bulk_id)
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO rental_items (rental_id, product_id, asset_id)
         VALUES ($1, $2, $3)",
    )
    .bind(rental_id)
    .bind(serialized_id)
    .bind(asset_id)
    .execute(&pool)
    .await
    .unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/dashboard").await;
    let json = expect_status(response, StatusCode::OK).await;

    assert_eq!(json["stats"]["total_clients"], 1);
    assert_eq!(json["stats"]["active_products"], 2);
    assert_eq!(json["stats"]["items_rented"], 7);
    assert_eq!(json["stats"]["late_rentals"], 1);

    let latest = json["latest_rentals"].as_array().unwrap();
    assert_eq!(latest.len(), 1);
    assert_eq!(latest[0]["client_business_name"], "Business 123456789");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn latest_rentals_are_capped_at_five(pool: PgPool) {
    let client_id = common::seed_client(&pool, "123456789").await;
    for _ in 0..7 {
        sqlx::query(
            "INSERT INTO rentals (client_id, rental_date, expected_return_date)
             VALUES ($1, CURRENT_DATE, CURRENT_DATE + 7)",
        )
        .bind(client_id)
        .execute(&pool)
        .await
        .unwrap();
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/dashboard").await;
    let json = expect_status(response, StatusCode::OK).await;

    assert_eq!(json["latest_rentals"].as_array().unwrap().len(), 5);
}
