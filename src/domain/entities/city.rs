//! City entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::record::Record;

/// A city that trips and drivers run between.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Writable attributes of a city.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCity {
    pub name: String,
}

impl Record for City {
    type New = NewCity;

    const NAME: &'static str = "city";

    fn id(&self) -> Uuid {
        self.id
    }
}
