mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_customer(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/customer")
        .json(&json!({
            "full_name": "Dilnoza Rashidova",
            "phone": "+998901112233",
            "email": "dilnoza@example.com"
        }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<Value>();
    assert_eq!(json["data"]["full_name"], "Dilnoza Rashidova");
    assert_eq!(json["data"]["email"], "dilnoza@example.com");
}

#[sqlx::test]
async fn test_create_customer_invalid_email(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/customer")
        .json(&json!({
            "full_name": "Dilnoza Rashidova",
            "phone": "+998901112233",
            "email": "nope"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert!(json["data"].as_str().unwrap().contains("email"));
}

#[sqlx::test]
async fn test_create_customer_email_longer_than_column(pool: PgPool) {
    let server = common::make_server(pool.clone());
    let email = format!(
        "{}@{}.{}.{}.{}.com",
        "a".repeat(64),
        "b".repeat(63),
        "c".repeat(63),
        "d".repeat(63),
        "e".repeat(40)
    );

    let response = server
        .post("/customer")
        .json(&json!({
            "full_name": "Dilnoza Rashidova",
            "phone": "+998901112233",
            "email": email
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert_eq!(json["status_code"], 400);
    assert!(json["data"].as_str().unwrap().contains("email"));
    assert_eq!(common::count_rows(&pool, "customers").await, 0);
}

#[sqlx::test]
async fn test_create_customer_missing_field(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/customer")
        .json(&json!({ "full_name": "Dilnoza Rashidova" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[sqlx::test]
async fn test_list_customers_second_page(pool: PgPool) {
    for i in 0..15 {
        common::create_test_customer(&pool, &format!("Customer {i}")).await;
    }
    let server = common::make_server(pool);

    let response = server.get("/customer?page=2&limit=10").await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["data"]["customers"].as_array().unwrap().len(), 5);
    assert_eq!(json["data"]["count"], 15);
}
