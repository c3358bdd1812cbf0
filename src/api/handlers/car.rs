//! `PUT /car` with its route and status variants.

use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

use crate::api::dto::car::{CarItem, CarRequest, CarRouteRequest, CarStatusRequest};
use crate::api::dto::envelope::Envelope;
use crate::api::dto::resource::UpdateRequest;
use crate::application::services::ResourceService;
use crate::domain::entities::Car;
use crate::domain::repositories::{CarRepository, ResourceRepository};
use crate::error::AppError;

/// Flags selecting the car update variant. Only presence matters, so
/// `?route` and `?route=1` are equivalent.
#[derive(Debug, Default, Deserialize)]
pub struct CarUpdateMode {
    pub route: Option<String>,
    pub status: Option<String>,
}

/// Updates a car.
///
/// # Endpoint
///
/// - `PUT /car?route`  - body `{ "car_id", "from_city_id", "to_city_id" }`
/// - `PUT /car?status` - body `{ "id", "status" }`
/// - `PUT /car`        - whole-record update, body `{ "id", "model", "brand", "number", "driver_id" }`
///
/// `route` wins when both flags are present.
///
/// # Errors
///
/// Returns 400 if the body is malformed, fails validation, or names the same
/// city at both ends of a route.
/// Returns 404 if the car does not exist.
/// Returns 409 if a referenced city or driver does not exist.
pub async fn update_car_handler<Repo>(
    State(service): State<Arc<ResourceService<Car, Repo>>>,
    mode: Result<Query<CarUpdateMode>, QueryRejection>,
    body: Bytes,
) -> Result<Envelope<CarItem>, AppError>
where
    Repo: ResourceRepository<Car> + CarRepository + 'static,
{
    let Query(mode) = mode?;

    let car = if mode.route.is_some() {
        let Json(req) = Json::<CarRouteRequest>::from_bytes(&body)?;
        service.update_route(req.car_id, req.route()).await?
    } else if mode.status.is_some() {
        let Json(req) = Json::<CarStatusRequest>::from_bytes(&body)?;
        service.update_status(req.id, req.status).await?
    } else {
        let Json(UpdateRequest { id, fields }) =
            Json::<UpdateRequest<CarRequest>>::from_bytes(&body)?;
        fields.validate()?;
        service.update(id, fields.into()).await?
    };

    Ok(Envelope::ok(car.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CarRoute, CarStatus, NewCar};
    use crate::domain::pagination::{ListPage, PageRequest};
    use async_trait::async_trait;
    use axum::{Router, http::StatusCode, routing::put};
    use axum_test::TestServer;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;
    use serde_json::{Value, json};
    use uuid::Uuid;

    mock! {
        Cars {}

        #[async_trait]
        impl ResourceRepository<Car> for Cars {
            async fn create(&self, new_record: NewCar) -> Result<Uuid, AppError>;
            async fn get(&self, id: Uuid) -> Result<Car, AppError>;
            async fn get_list(&self, page: PageRequest) -> Result<ListPage<Car>, AppError>;
            async fn update(&self, id: Uuid, fields: NewCar) -> Result<Uuid, AppError>;
            async fn delete(&self, id: Uuid) -> Result<(), AppError>;
        }

        #[async_trait]
        impl CarRepository for Cars {
            async fn update_route(&self, id: Uuid, route: CarRoute) -> Result<(), AppError>;
            async fn update_status(&self, id: Uuid, status: CarStatus) -> Result<(), AppError>;
        }
    }

    fn server(repo: MockCars) -> TestServer {
        let service = Arc::new(ResourceService::new(Arc::new(repo)));
        let app = Router::new().route(
            "/car",
            put(update_car_handler::<MockCars>).with_state(service),
        );

        TestServer::new(app).unwrap()
    }

    fn car(id: Uuid) -> Car {
        Car {
            id,
            model: "Spark".to_string(),
            brand: "Chevrolet".to_string(),
            number: "01A777AA".to_string(),
            status: CarStatus::Free,
            from_city_id: None,
            to_city_id: None,
            driver_id: None,
            driver_data: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_status_variant() {
        let id = Uuid::new_v4();
        let mut repo = MockCars::new();
        repo.expect_update_status()
            .with(eq(id), eq(CarStatus::InTrip))
            .times(1)
            .returning(|_, _| Ok(()));
        repo.expect_get().returning(move |_| {
            Ok(Car {
                status: CarStatus::InTrip,
                ..car(id)
            })
        });

        let response = server(repo)
            .put("/car?status")
            .json(&json!({ "id": id, "status": "in_trip" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "in_trip");
    }

    #[tokio::test]
    async fn test_route_variant() {
        let id = Uuid::new_v4();
        let from = Uuid::new_v4();
        let to = Uuid::new_v4();
        let mut repo = MockCars::new();
        repo.expect_update_route()
            .with(
                eq(id),
                eq(CarRoute {
                    from_city_id: from,
                    to_city_id: to,
                }),
            )
            .times(1)
            .returning(|_, _| Ok(()));
        repo.expect_get().returning(move |_| {
            Ok(Car {
                from_city_id: Some(from),
                to_city_id: Some(to),
                ..car(id)
            })
        });

        let response = server(repo)
            .put("/car?route")
            .json(&json!({ "car_id": id, "from_city_id": from, "to_city_id": to }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["from_city_id"], json!(from));
        assert_eq!(body["data"]["to_city_id"], json!(to));
    }

    #[tokio::test]
    async fn test_whole_record_variant() {
        let id = Uuid::new_v4();
        let mut repo = MockCars::new();
        repo.expect_update()
            .withf(move |target, fields| *target == id && fields.model == "Malibu")
            .times(1)
            .returning(|id, _| Ok(id));
        repo.expect_update_status().never();
        repo.expect_update_route().never();
        repo.expect_get().returning(move |_| {
            Ok(Car {
                model: "Malibu".to_string(),
                ..car(id)
            })
        });

        let response = server(repo)
            .put("/car")
            .json(&json!({ "id": id, "model": "Malibu", "brand": "Chevrolet", "number": "01A777AA" }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["model"], "Malibu");
    }

    #[tokio::test]
    async fn test_unknown_status_is_400() {
        let mut repo = MockCars::new();
        repo.expect_update_status().never();

        let response = server(repo)
            .put("/car?status")
            .json(&json!({ "id": Uuid::new_v4(), "status": "flying" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_car_is_404() {
        let mut repo = MockCars::new();
        repo.expect_update_status()
            .returning(|_, _| Err(AppError::not_found("car not found")));

        let response = server(repo)
            .put("/car?status")
            .json(&json!({ "id": Uuid::new_v4(), "status": "free" }))
            .await;

        response.assert_status_not_found();
    }
}
