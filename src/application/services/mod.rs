//! Business logic services for the application layer.

pub mod car_service;
pub mod resource_service;

pub use resource_service::ResourceService;
