//! DTOs for the `/trip` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::city::CityItem;
use super::driver::DriverDataItem;
use super::resource::ApiResource;
use crate::domain::entities::{NewTrip, Trip};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TripRequest {
    #[validate(length(min = 1, max = 50))]
    pub trip_number_id: String,

    pub from_city_id: Uuid,
    pub to_city_id: Uuid,
    pub driver_id: Uuid,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
}

impl From<TripRequest> for NewTrip {
    fn from(req: TripRequest) -> Self {
        NewTrip {
            trip_number_id: req.trip_number_id,
            from_city_id: req.from_city_id,
            to_city_id: req.to_city_id,
            driver_id: req.driver_id,
            price: req.price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TripItem {
    pub id: Uuid,
    pub trip_number_id: String,
    pub from_city_id: Uuid,
    pub from_city_data: Option<CityItem>,
    pub to_city_id: Uuid,
    pub to_city_data: Option<CityItem>,
    pub driver_id: Uuid,
    pub driver_data: Option<DriverDataItem>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl From<Trip> for TripItem {
    fn from(t: Trip) -> Self {
        TripItem {
            id: t.id,
            trip_number_id: t.trip_number_id,
            from_city_id: t.from_city_id,
            from_city_data: t.from_city_data.map(CityItem::from),
            to_city_id: t.to_city_id,
            to_city_data: t.to_city_data.map(CityItem::from),
            driver_id: t.driver_id,
            driver_data: t.driver_data.map(DriverDataItem::from),
            price: t.price,
            created_at: t.created_at,
        }
    }
}

impl ApiResource for Trip {
    type Request = TripRequest;
    type Response = TripItem;

    const COLLECTION: &'static str = "trips";
}
