//! PostgreSQL repository implementations.
//!
//! One generic repository serves every resource; each resource only
//! describes its table in [`records`].
//!
//! # Modules
//!
//! - [`schema`] - Table descriptors and SQL rendering
//! - [`records`] - Per-resource layouts and row mapping
//! - [`PgResourceRepository`] - Create, get, list, update and delete
//! - `pg_car_repository` - Car route and status updates

pub mod pg_car_repository;
pub mod pg_resource_repository;
pub mod records;
pub mod schema;

pub use pg_resource_repository::PgResourceRepository;
pub use schema::{PgRecord, Schema};
