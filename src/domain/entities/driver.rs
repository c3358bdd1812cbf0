//! Driver entity and the driver summary embedded in other records.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::City;
use crate::domain::record::Record;

/// A driver serving a route between two cities.
///
/// `from_city_data` and `to_city_data` are filled on reads from the joined
/// `cities` rows; they are `None` when the referenced city is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub from_city_id: Uuid,
    pub from_city_data: Option<City>,
    pub to_city_id: Uuid,
    pub to_city_data: Option<City>,
    pub created_at: DateTime<Utc>,
}

impl Driver {
    /// Strips the enrichment, leaving the plain driver row.
    pub fn summary(&self) -> DriverData {
        DriverData {
            id: self.id,
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            from_city_id: self.from_city_id,
            to_city_id: self.to_city_id,
            created_at: self.created_at,
        }
    }
}

/// Writable attributes of a driver.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDriver {
    pub full_name: String,
    pub phone: String,
    pub from_city_id: Uuid,
    pub to_city_id: Uuid,
}

/// Driver row as embedded in cars and trips (one hop, no nested cities).
#[derive(Debug, Clone, PartialEq)]
pub struct DriverData {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub from_city_id: Uuid,
    pub to_city_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Record for Driver {
    type New = NewDriver;

    const NAME: &'static str = "driver";

    fn id(&self) -> Uuid {
        self.id
    }
}
