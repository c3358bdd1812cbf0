//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and
//! are implemented in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`ResourceRepository`] - Create, get, list, update and delete for any [`crate::domain::record::Record`]
//! - [`CarRepository`] - Route and status updates for cars
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod car_repository;
pub mod resource_repository;

pub use car_repository::CarRepository;
pub use resource_repository::ResourceRepository;

#[cfg(test)]
pub use resource_repository::MockResourceRepository;
