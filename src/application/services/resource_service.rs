//! Generic create/read/update/delete service.

use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::pagination::{ListPage, PageRequest};
use crate::domain::record::Record;
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;

/// Service exposing the five resource operations for one record type.
///
/// Create and update return the stored record by reading it back after the
/// write; the write and the read are separate round-trips.
pub struct ResourceService<R: Record, Repo: ResourceRepository<R>> {
    pub(super) repository: Arc<Repo>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record, Repo: ResourceRepository<R>> ResourceService<R, Repo> {
    /// Creates a new resource service.
    pub fn new(repository: Arc<Repo>) -> Self {
        Self {
            repository,
            _record: PhantomData,
        }
    }

    /// Stores a new record and returns it as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a referenced record does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, new_record: R::New) -> Result<R, AppError> {
        let id = self.repository.create(new_record).await?;
        let record = self.repository.get(id).await?;
        tracing::info!(resource = R::NAME, id = %record.id(), "Created");

        Ok(record)
    }

    /// Retrieves a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    pub async fn get(&self, id: Uuid) -> Result<R, AppError> {
        self.repository.get(id).await
    }

    /// Lists one page of records with the total row count.
    pub async fn list(&self, page: PageRequest) -> Result<ListPage<R>, AppError> {
        self.repository.get_list(page).await
    }

    /// Replaces the writable attributes of a record and returns it as persisted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    pub async fn update(&self, id: Uuid, fields: R::New) -> Result<R, AppError> {
        let id = self.repository.update(id, fields).await?;
        tracing::info!(resource = R::NAME, %id, "Updated");

        self.repository.get(id).await
    }

    /// Permanently deletes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await?;
        tracing::info!(resource = R::NAME, %id, "Deleted");

        Ok(())
    }
}
