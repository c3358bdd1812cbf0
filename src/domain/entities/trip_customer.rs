//! Association between a trip and a booked customer.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::Customer;
use crate::domain::record::Record;

/// A customer's seat on a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct TripCustomer {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub customer_id: Uuid,
    pub customer_data: Option<Customer>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewTripCustomer {
    pub trip_id: Uuid,
    pub customer_id: Uuid,
}

impl Record for TripCustomer {
    type New = NewTripCustomer;

    const NAME: &'static str = "trip customer";

    fn id(&self) -> Uuid {
        self.id
    }
}
