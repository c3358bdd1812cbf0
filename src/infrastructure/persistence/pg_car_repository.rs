//! Car route and status updates.

use async_trait::async_trait;
use uuid::Uuid;

use super::PgResourceRepository;
use crate::domain::entities::{Car, CarRoute, CarStatus};
use crate::domain::repositories::CarRepository;
use crate::error::AppError;

#[async_trait]
impl CarRepository for PgResourceRepository<Car> {
    async fn update_route(&self, id: Uuid, route: CarRoute) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE cars
            SET from_city_id = $2, to_city_id = $3
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(route.from_city_id)
        .bind(route.to_city_id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("car not found"));
        }

        Ok(())
    }

    async fn update_status(&self, id: Uuid, status: CarStatus) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE cars SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("car not found"));
        }

        tracing::debug!(%id, %status, "Car status updated");
        Ok(())
    }
}
