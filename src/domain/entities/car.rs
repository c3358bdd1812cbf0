//! Car entity with its status and current route.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::entities::DriverData;
use crate::domain::record::Record;

/// Operational state of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CarStatus {
    /// Available for a new trip.
    #[default]
    Free,
    InTrip,
    /// Out of service.
    Inactive,
}

impl CarStatus {
    /// Value stored in the `cars.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            CarStatus::Free => "free",
            CarStatus::InTrip => "in_trip",
            CarStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(CarStatus::Free),
            "in_trip" => Ok(CarStatus::InTrip),
            "inactive" => Ok(CarStatus::Inactive),
            other => Err(format!("unknown car status '{other}'")),
        }
    }
}

/// Cities a car is currently travelling between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarRoute {
    pub from_city_id: Uuid,
    pub to_city_id: Uuid,
}

/// A car, optionally assigned to a driver.
///
/// `status` and the route fields are changed only through the dedicated
/// partial updates, never by a whole-record update.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: Uuid,
    pub model: String,
    pub brand: String,
    pub number: String,
    pub status: CarStatus,
    pub from_city_id: Option<Uuid>,
    pub to_city_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub driver_data: Option<DriverData>,
    pub created_at: DateTime<Utc>,
}

impl Car {
    /// Current route, if both ends are set.
    pub fn route(&self) -> Option<CarRoute> {
        Some(CarRoute {
            from_city_id: self.from_city_id?,
            to_city_id: self.to_city_id?,
        })
    }
}

/// Writable attributes of a car.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
    pub model: String,
    pub brand: String,
    pub number: String,
    pub driver_id: Option<Uuid>,
}

impl Record for Car {
    type New = NewCar;

    const NAME: &'static str = "car";

    fn id(&self) -> Uuid {
        self.id
    }
}
