//! PostgreSQL implementation of the resource repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

use super::schema::{PgRecord, Statements};
use crate::domain::pagination::{ListPage, PageRequest};
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;
use crate::utils::id_generator::{IdGenerator, UuidV4Generator};

/// PostgreSQL repository for any [`PgRecord`].
///
/// All SQL is rendered from `R::SCHEMA` when the repository is built.
/// Statements run individually against the pool, without a transaction.
pub struct PgResourceRepository<R> {
    pool: Arc<PgPool>,
    ids: Arc<dyn IdGenerator>,
    statements: Statements,
    _record: PhantomData<fn() -> R>,
}

impl<R: PgRecord> PgResourceRepository<R> {
    /// Creates a repository that assigns random v4 UUIDs.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_id_generator(pool, Arc::new(UuidV4Generator))
    }

    pub fn with_id_generator(pool: Arc<PgPool>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            pool,
            ids,
            statements: Statements::from(&R::SCHEMA),
            _record: PhantomData,
        }
    }
}

impl<R> PgResourceRepository<R> {
    pub(super) fn pool(&self) -> &PgPool {
        self.pool.as_ref()
    }
}

#[async_trait]
impl<R: PgRecord> ResourceRepository<R> for PgResourceRepository<R> {
    async fn create(&self, new_record: R::New) -> Result<Uuid, AppError> {
        let id = self.ids.next_id();

        let query = sqlx::query(&self.statements.insert).bind(id);
        let result = R::bind_fields(new_record, query)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            tracing::error!(resource = R::NAME, %id, "Insert affected no rows");
            return Err(AppError::internal(format!("Failed to create {}", R::NAME)));
        }

        tracing::debug!(resource = R::NAME, %id, "Record created");
        Ok(id)
    }

    async fn get(&self, id: Uuid) -> Result<R, AppError> {
        let row = sqlx::query(&self.statements.get)
            .bind(id)
            .fetch_optional(self.pool())
            .await?
            .ok_or_else(|| AppError::not_found(format!("{} not found", R::NAME)))?;

        Ok(R::from_row(&row)?)
    }

    async fn get_list(&self, page: PageRequest) -> Result<ListPage<R>, AppError> {
        let rows = sqlx::query(&self.statements.list)
            .bind(i64::from(page.limit()))
            .bind(page.offset())
            .fetch_all(self.pool());

        let count = sqlx::query_scalar::<_, i64>(&self.statements.count).fetch_one(self.pool());

        // Independent statements: the count may see a different snapshot than the page.
        let (rows, count) = tokio::try_join!(rows, count)?;

        let items = rows
            .iter()
            .map(R::from_row)
            .collect::<sqlx::Result<Vec<R>>>()?;

        Ok(ListPage::new(items, count))
    }

    async fn update(&self, id: Uuid, fields: R::New) -> Result<Uuid, AppError> {
        let query = sqlx::query(&self.statements.update).bind(id);
        let result = R::bind_fields(fields, query).execute(self.pool()).await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("{} not found", R::NAME)));
        }

        Ok(id)
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query(&self.statements.delete)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("{} not found", R::NAME)));
        }

        tracing::debug!(resource = R::NAME, %id, "Record deleted");
        Ok(())
    }
}
