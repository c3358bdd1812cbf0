//! Customer entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::record::Record;

/// A passenger who books seats on trips.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: Uuid,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Writable attributes of a customer.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub full_name: String,
    pub phone: String,
    pub email: String,
}

impl Record for Customer {
    type New = NewCustomer;

    const NAME: &'static str = "customer";

    fn id(&self) -> Uuid {
        self.id
    }
}
