//! Repository contract implemented for every resource type.

use crate::domain::pagination::{ListPage, PageRequest};
use crate::domain::record::Record;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for one resource type `R`.
///
/// Each call is a single, non-transactional statement (or, for
/// [`get_list`](Self::get_list), two independent ones).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgResourceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_*.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceRepository<R: Record>: Send + Sync {
    /// Stores a new record under a freshly generated identifier.
    ///
    /// # Returns
    ///
    /// The identifier assigned to the record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a referenced record does not exist.
    /// Returns [`AppError::Internal`] on database errors or if nothing was written.
    async fn create(&self, new_record: R::New) -> Result<Uuid, AppError>;

    /// Fetches one record, including its joined sub-records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this identifier.
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self, id: Uuid) -> Result<R, AppError>;

    /// Lists one page of records, newest first, with the table's total count.
    ///
    /// The count covers the whole table and is read independently of the page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get_list(&self, page: PageRequest) -> Result<ListPage<R>, AppError>;

    /// Overwrites the writable attributes of an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Conflict`] if a referenced record does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: Uuid, fields: R::New) -> Result<Uuid, AppError>;

    /// Permanently removes a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Conflict`] if other records still reference it.
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;
}
