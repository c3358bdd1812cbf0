//! Resource route configuration.

use axum::Router;
use axum::routing::{MethodRouter, get};
use std::sync::Arc;

use crate::api::dto::resource::ApiResource;
use crate::api::handlers::{
    create_handler, delete_handler, read_handler, update_car_handler, update_handler,
};
use crate::application::services::ResourceService;
use crate::domain::entities::Car;
use crate::domain::repositories::{CarRepository, ResourceRepository};
use crate::state::AppState;

/// Method router serving one resource path with its own service as state.
pub fn resource_routes<R, Repo, S>(service: Arc<ResourceService<R, Repo>>) -> MethodRouter<S>
where
    R: ApiResource,
    Repo: ResourceRepository<R> + 'static,
    S: Clone + Send + Sync + 'static,
{
    get(read_handler::<R, Repo>)
        .post(create_handler::<R, Repo>)
        .put(update_handler::<R, Repo>)
        .delete(delete_handler::<R, Repo>)
        .with_state(service)
}

/// Like [`resource_routes`], with `PUT` also accepting `?route` and `?status`.
pub fn car_routes<Repo, S>(service: Arc<ResourceService<Car, Repo>>) -> MethodRouter<S>
where
    Repo: ResourceRepository<Car> + CarRepository + 'static,
    S: Clone + Send + Sync + 'static,
{
    get(read_handler::<Car, Repo>)
        .post(create_handler::<Car, Repo>)
        .put(update_car_handler::<Repo>)
        .delete(delete_handler::<Car, Repo>)
        .with_state(service)
}

/// All resource routes.
///
/// # Endpoints
///
/// - `/city`          - cities
/// - `/customer`      - customers
/// - `/driver`        - drivers, with their from/to cities
/// - `/car`           - cars, with their driver; `PUT ?route` / `PUT ?status`
/// - `/trip`          - trips, with cities and driver
/// - `/trip_customer` - trip bookings, with the customer
pub fn resource_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/city", resource_routes(state.cities.clone()))
        .route("/customer", resource_routes(state.customers.clone()))
        .route("/driver", resource_routes(state.drivers.clone()))
        .route("/car", car_routes(state.cars.clone()))
        .route("/trip", resource_routes(state.trips.clone()))
        .route("/trip_customer", resource_routes(state.trip_customers.clone()))
}
