mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_trip(pool: PgPool) {
    let from = common::create_test_city(&pool, "Tashkent").await;
    let to = common::create_test_city(&pool, "Samarkand").await;
    let driver = common::create_test_driver(&pool, from, to).await;
    let server = common::make_server(pool);

    let response = server
        .post("/trip")
        .json(&json!({
            "trip_number_id": "TSH-SKD-100",
            "from_city_id": from,
            "to_city_id": to,
            "driver_id": driver,
            "price": 150000.0
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["data"]["trip_number_id"], "TSH-SKD-100");
    assert_eq!(json["data"]["price"], 150000.0);
    assert_eq!(json["data"]["from_city_data"]["name"], "Tashkent");
    assert_eq!(json["data"]["driver_data"]["id"], json!(driver));
}

#[sqlx::test]
async fn test_create_trip_negative_price(pool: PgPool) {
    let fixture = common::create_trip_fixture(&pool).await;
    let server = common::make_server(pool);

    let response = server
        .post("/trip")
        .json(&json!({
            "trip_number_id": "TSH-SKD-101",
            "from_city_id": fixture.from_city_id,
            "to_city_id": fixture.to_city_id,
            "driver_id": fixture.driver_id,
            "price": -5.0
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_book_customer_on_trip(pool: PgPool) {
    let fixture = common::create_trip_fixture(&pool).await;
    let customer = common::create_test_customer(&pool, "Nodira Alieva").await;
    let server = common::make_server(pool);

    let response = server
        .post("/trip_customer")
        .json(&json!({ "trip_id": fixture.trip_id, "customer_id": customer }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["data"]["customer_data"]["full_name"], "Nodira Alieva");

    let list = server.get("/trip_customer").await;
    list.assert_status_ok();
    let json = list.json::<Value>();
    assert_eq!(json["data"]["count"], 1);
    assert_eq!(json["data"]["trip_customers"].as_array().unwrap().len(), 1);
}

#[sqlx::test]
async fn test_delete_trip_with_bookings_is_conflict(pool: PgPool) {
    let fixture = common::create_trip_fixture(&pool).await;
    let customer = common::create_test_customer(&pool, "Nodira Alieva").await;
    let server = common::make_server(pool);
    server
        .post("/trip_customer")
        .json(&json!({ "trip_id": fixture.trip_id, "customer_id": customer }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .delete(&format!("/trip?id={}", fixture.trip_id))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}
