//! Trip entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{City, DriverData};
use crate::domain::record::Record;

/// A scheduled trip between two cities, served by one driver.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: Uuid,
    /// Human-facing trip number, e.g. `"TK-0042"`.
    pub trip_number_id: String,
    pub from_city_id: Uuid,
    pub from_city_data: Option<City>,
    pub to_city_id: Uuid,
    pub to_city_data: Option<City>,
    pub driver_id: Uuid,
    pub driver_data: Option<DriverData>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Writable attributes of a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub trip_number_id: String,
    pub from_city_id: Uuid,
    pub to_city_id: Uuid,
    pub driver_id: Uuid,
    pub price: f64,
}

impl Record for Trip {
    type New = NewTrip;

    const NAME: &'static str = "trip";

    fn id(&self) -> Uuid {
        self.id
    }
}
