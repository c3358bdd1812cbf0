//! Car-only operations on top of the generic resource service.

use uuid::Uuid;

use super::ResourceService;
use crate::domain::entities::{Car, CarRoute, CarStatus};
use crate::domain::repositories::{CarRepository, ResourceRepository};
use crate::error::AppError;

impl<Repo> ResourceService<Car, Repo>
where
    Repo: ResourceRepository<Car> + CarRepository,
{
    /// Sets the car's current route and returns the updated car.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if both ends are the same city.
    /// Returns [`AppError::NotFound`] if the car does not exist.
    /// Returns [`AppError::Conflict`] if either city does not exist.
    pub async fn update_route(&self, id: Uuid, route: CarRoute) -> Result<Car, AppError> {
        if route.from_city_id == route.to_city_id {
            return Err(AppError::bad_request(
                "Route must connect two different cities",
            ));
        }

        self.repository.update_route(id, route).await?;
        tracing::info!(%id, from = %route.from_city_id, to = %route.to_city_id, "Car route updated");

        self.repository.get(id).await
    }

    /// Sets the car's status and returns the updated car.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the car does not exist.
    pub async fn update_status(&self, id: Uuid, status: CarStatus) -> Result<Car, AppError> {
        self.repository.update_status(id, status).await?;
        tracing::info!(%id, %status, "Car status updated");

        self.repository.get(id).await
    }
}
