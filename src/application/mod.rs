//! Application layer services.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI one entry point per operation.
//!
//! # Available Services
//!
//! - [`services::resource_service::ResourceService`] - Create, get, list, update and delete for any record type
//! - `services::car_service` - Route and status updates on `ResourceService<Car, _>`

pub mod services;
