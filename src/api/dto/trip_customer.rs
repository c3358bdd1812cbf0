//! DTOs for the `/trip_customer` resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::customer::CustomerItem;
use super::resource::ApiResource;
use crate::domain::entities::{NewTripCustomer, TripCustomer};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TripCustomerRequest {
    pub trip_id: Uuid,
    pub customer_id: Uuid,
}

impl From<TripCustomerRequest> for NewTripCustomer {
    fn from(req: TripCustomerRequest) -> Self {
        NewTripCustomer {
            trip_id: req.trip_id,
            customer_id: req.customer_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TripCustomerItem {
    pub id: Uuid,
    pub trip_id: Uuid,
    pub customer_id: Uuid,
    pub customer_data: Option<CustomerItem>,
    pub created_at: DateTime<Utc>,
}

impl From<TripCustomer> for TripCustomerItem {
    fn from(tc: TripCustomer) -> Self {
        TripCustomerItem {
            id: tc.id,
            trip_id: tc.trip_id,
            customer_id: tc.customer_id,
            customer_data: tc.customer_data.map(CustomerItem::from),
            created_at: tc.created_at,
        }
    }
}

impl ApiResource for TripCustomer {
    type Request = TripCustomerRequest;
    type Response = TripCustomerItem;

    const COLLECTION: &'static str = "trip_customers";
}
