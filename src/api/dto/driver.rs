//! DTOs for the `/driver` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::PHONE_REGEX;
use super::city::CityItem;
use super::resource::ApiResource;
use crate::domain::entities::{Driver, DriverData, NewDriver};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DriverRequest {
    #[validate(length(min = 1, max = 200))]
    pub full_name: String,

    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,

    pub from_city_id: Uuid,
    pub to_city_id: Uuid,
}

impl From<DriverRequest> for NewDriver {
    fn from(req: DriverRequest) -> Self {
        NewDriver {
            full_name: req.full_name,
            phone: req.phone,
            from_city_id: req.from_city_id,
            to_city_id: req.to_city_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DriverItem {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub from_city_id: Uuid,
    pub from_city_data: Option<CityItem>,
    pub to_city_id: Uuid,
    pub to_city_data: Option<CityItem>,
    pub created_at: DateTime<Utc>,
}

impl From<Driver> for DriverItem {
    fn from(d: Driver) -> Self {
        DriverItem {
            id: d.id,
            full_name: d.full_name,
            phone: d.phone,
            from_city_id: d.from_city_id,
            from_city_data: d.from_city_data.map(CityItem::from),
            to_city_id: d.to_city_id,
            to_city_data: d.to_city_data.map(CityItem::from),
            created_at: d.created_at,
        }
    }
}

/// Driver embedded in car and trip responses.
#[derive(Debug, Clone, Serialize)]
pub struct DriverDataItem {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub from_city_id: Uuid,
    pub to_city_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<DriverData> for DriverDataItem {
    fn from(d: DriverData) -> Self {
        DriverDataItem {
            id: d.id,
            full_name: d.full_name,
            phone: d.phone,
            from_city_id: d.from_city_id,
            to_city_id: d.to_city_id,
            created_at: d.created_at,
        }
    }
}

impl ApiResource for Driver {
    type Request = DriverRequest;
    type Response = DriverItem;

    const COLLECTION: &'static str = "drivers";
}
