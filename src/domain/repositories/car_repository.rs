//! Car-only partial updates.

use crate::domain::entities::{CarRoute, CarStatus};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Partial updates that only cars support, on top of
/// [`super::ResourceRepository`].
#[async_trait]
pub trait CarRepository: Send + Sync {
    /// Sets the cities the car is currently travelling between.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the car does not exist.
    /// Returns [`AppError::Conflict`] if either city does not exist.
    async fn update_route(&self, id: Uuid, route: CarRoute) -> Result<(), AppError>;

    /// Sets the car's operational status.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the car does not exist.
    async fn update_status(&self, id: Uuid, status: CarStatus) -> Result<(), AppError>;
}
