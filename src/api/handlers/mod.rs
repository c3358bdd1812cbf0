//! HTTP request handlers for API endpoints.
//!
//! [`resource`] serves every entity path generically; [`car`] adds the car
//! route and status updates.

pub mod car;
pub mod health;
pub mod resource;

pub use car::update_car_handler;
pub use health::health_handler;
pub use resource::{create_handler, delete_handler, read_handler, update_handler};
