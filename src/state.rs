//! Shared application state.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::ResourceService;
use crate::domain::entities::{Car, City, Customer, Driver, Trip, TripCustomer};
use crate::infrastructure::persistence::{PgRecord, PgResourceRepository};

pub type CityService = ResourceService<City, PgResourceRepository<City>>;
pub type CustomerService = ResourceService<Customer, PgResourceRepository<Customer>>;
pub type DriverService = ResourceService<Driver, PgResourceRepository<Driver>>;
pub type CarService = ResourceService<Car, PgResourceRepository<Car>>;
pub type TripService = ResourceService<Trip, PgResourceRepository<Trip>>;
pub type TripCustomerService = ResourceService<TripCustomer, PgResourceRepository<TripCustomer>>;

/// Pool plus one service per resource, all sharing the same pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub cities: Arc<CityService>,
    pub customers: Arc<CustomerService>,
    pub drivers: Arc<DriverService>,
    pub cars: Arc<CarService>,
    pub trips: Arc<TripService>,
    pub trip_customers: Arc<TripCustomerService>,
}

fn service<R>(pool: &Arc<PgPool>) -> Arc<ResourceService<R, PgResourceRepository<R>>>
where
    R: PgRecord,
{
    Arc::new(ResourceService::new(Arc::new(PgResourceRepository::new(
        pool.clone(),
    ))))
}

impl AppState {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self {
            cities: service(&pool),
            customers: service(&pool),
            drivers: service(&pool),
            cars: service(&pool),
            trips: service(&pool),
            trip_customers: service(&pool),
            pool,
        }
    }
}
