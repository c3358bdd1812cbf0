//! DTOs for the `/city` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::resource::ApiResource;
use crate::domain::entities::{City, NewCity};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CityRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
}

impl From<CityRequest> for NewCity {
    fn from(req: CityRequest) -> Self {
        NewCity { name: req.name }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CityItem {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<City> for CityItem {
    fn from(city: City) -> Self {
        CityItem {
            id: city.id,
            name: city.name,
            created_at: city.created_at,
        }
    }
}

impl ApiResource for City {
    type Request = CityRequest;
    type Response = CityItem;

    const COLLECTION: &'static str = "cities";
}
