//! DTOs for the `/car` resource and its route/status sub-operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use uuid::Uuid;
use validator::Validate;

use super::driver::DriverDataItem;
use super::resource::ApiResource;
use crate::domain::entities::{Car, CarRoute, CarStatus, NewCar};

/// Create/update body. `status` and the route are not writable here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CarRequest {
    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 1, max = 100))]
    pub brand: String,

    #[validate(length(min = 1, max = 20))]
    pub number: String,

    #[serde(default)]
    pub driver_id: Option<Uuid>,
}

impl From<CarRequest> for NewCar {
    fn from(req: CarRequest) -> Self {
        NewCar {
            model: req.model,
            brand: req.brand,
            number: req.number,
            driver_id: req.driver_id,
        }
    }
}

/// Body of `PUT /car?route`.
#[derive(Debug, Clone, Deserialize)]
pub struct CarRouteRequest {
    pub car_id: Uuid,
    pub from_city_id: Uuid,
    pub to_city_id: Uuid,
}

impl CarRouteRequest {
    pub fn route(&self) -> CarRoute {
        CarRoute {
            from_city_id: self.from_city_id,
            to_city_id: self.to_city_id,
        }
    }
}

/// Body of `PUT /car?status`. `status` is one of `free`, `in_trip`, `inactive`.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct CarStatusRequest {
    pub id: Uuid,
    #[serde_as(as = "DisplayFromStr")]
    pub status: CarStatus,
}

#[serde_as]
#[derive(Debug, Clone, Serialize)]
pub struct CarItem {
    pub id: Uuid,
    pub model: String,
    pub brand: String,
    pub number: String,
    #[serde_as(as = "DisplayFromStr")]
    pub status: CarStatus,
    pub from_city_id: Option<Uuid>,
    pub to_city_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub driver_data: Option<DriverDataItem>,
    pub created_at: DateTime<Utc>,
}

impl From<Car> for CarItem {
    fn from(car: Car) -> Self {
        CarItem {
            id: car.id,
            model: car.model,
            brand: car.brand,
            number: car.number,
            status: car.status,
            from_city_id: car.from_city_id,
            to_city_id: car.to_city_id,
            driver_id: car.driver_id,
            driver_data: car.driver_data.map(DriverDataItem::from),
            created_at: car.created_at,
        }
    }
}

impl ApiResource for Car {
    type Request = CarRequest;
    type Response = CarItem;

    const COLLECTION: &'static str = "cars";
}
