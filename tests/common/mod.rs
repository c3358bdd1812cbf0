#![allow(dead_code)]

use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use city2city::routes::router;
use city2city::state::AppState;

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

pub async fn create_test_city(pool: &PgPool, name: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO cities (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await
        .unwrap();
    id
}

pub async fn create_test_customer(pool: &PgPool, full_name: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO customers (id, full_name, phone, email) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(full_name)
        .bind("+998901234567")
        .bind("customer@example.com")
        .execute(pool)
        .await
        .unwrap();
    id
}

pub async fn create_test_driver(pool: &PgPool, from_city_id: Uuid, to_city_id: Uuid) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO drivers (id, full_name, phone, from_city_id, to_city_id) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind("Aziz Karimov")
    .bind("+998907654321")
    .bind(from_city_id)
    .bind(to_city_id)
    .execute(pool)
    .await
    .unwrap();
    id
}

pub async fn create_test_car(pool: &PgPool, driver_id: Option<Uuid>) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO cars (id, model, brand, number, driver_id) VALUES ($1, $2, $3, $4, $5)")
        .bind(id)
        .bind("Cobalt")
        .bind("Chevrolet")
        .bind("01A123BC")
        .bind(driver_id)
        .execute(pool)
        .await
        .unwrap();
    id
}

pub async fn create_test_trip(
    pool: &PgPool,
    from_city_id: Uuid,
    to_city_id: Uuid,
    driver_id: Uuid,
) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO trips (id, trip_number_id, from_city_id, to_city_id, driver_id, price) VALUES ($1, $2, $3, $4, $5, $6)",
    )
    .bind(id)
    .bind("TSH-SKD-001")
    .bind(from_city_id)
    .bind(to_city_id)
    .bind(driver_id)
    .bind(120_000.0_f64)
    .execute(pool)
    .await
    .unwrap();
    id
}

/// Cities, a driver between them, and a trip by that driver.
pub struct TripFixture {
    pub from_city_id: Uuid,
    pub to_city_id: Uuid,
    pub driver_id: Uuid,
    pub trip_id: Uuid,
}

pub async fn create_trip_fixture(pool: &PgPool) -> TripFixture {
    let from_city_id = create_test_city(pool, "Tashkent").await;
    let to_city_id = create_test_city(pool, "Samarkand").await;
    let driver_id = create_test_driver(pool, from_city_id, to_city_id).await;
    let trip_id = create_test_trip(pool, from_city_id, to_city_id, driver_id).await;

    TripFixture {
        from_city_id,
        to_city_id,
        driver_id,
        trip_id,
    }
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
