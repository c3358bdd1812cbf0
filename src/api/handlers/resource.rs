//! Generic handlers behind every resource path.
//!
//! Each resource answers on a single path and dispatches on method and
//! query parameters:
//!
//! - `POST`              - create, `201` with the stored record
//! - `GET`               - list (`?page=&limit=`)
//! - `GET ?id=<uuid>`    - get one record
//! - `PUT`               - whole-record update, body `{ "id", ...fields }`
//! - `DELETE ?id=<uuid>` - delete
//!
//! Every response is wrapped in [`Envelope`].

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use validator::Validate;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::pagination::ResourceQuery;
use crate::api::dto::resource::{ApiResource, ListResponse, UpdateRequest};
use crate::application::services::ResourceService;
use crate::domain::repositories::ResourceRepository;
use crate::error::AppError;

pub const DELETED_MESSAGE: &str = "data successfully deleted";

/// Shared state of one resource route.
pub type ServiceState<R, Repo> = State<Arc<ResourceService<R, Repo>>>;

/// Creates a record from the JSON body.
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
/// Returns 409 if a referenced record does not exist.
pub async fn create_handler<R, Repo>(
    State(service): ServiceState<R, Repo>,
    payload: Result<Json<R::Request>, JsonRejection>,
) -> Result<Envelope<R::Response>, AppError>
where
    R: ApiResource,
    Repo: ResourceRepository<R> + 'static,
{
    let Json(payload) = payload?;
    payload.validate()?;

    let record = service.create(payload.into()).await?;

    Ok(Envelope::created(record.into()))
}

/// Lists a page of records, or fetches one when `id` is present.
///
/// # Errors
///
/// Returns 400 if `id` is present but not a UUID.
/// Returns 404 if no record has that id.
pub async fn read_handler<R, Repo>(
    State(service): ServiceState<R, Repo>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> Result<Response, AppError>
where
    R: ApiResource,
    Repo: ResourceRepository<R> + 'static,
{
    let Query(query) = query?;

    if query.id.is_none() {
        let page = service.list(query.page_request()).await?;
        let body: ListResponse<R::Response> = ListResponse::from_page(page);

        return Ok(Envelope::ok(body).into_response());
    }

    let record = service.get(query.require_id()?).await?;

    Ok(Envelope::ok(R::Response::from(record)).into_response())
}

/// Replaces every writable attribute of the record named by the body's `id`.
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
/// Returns 404 if no record has that id.
pub async fn update_handler<R, Repo>(
    State(service): ServiceState<R, Repo>,
    payload: Result<Json<UpdateRequest<R::Request>>, JsonRejection>,
) -> Result<Envelope<R::Response>, AppError>
where
    R: ApiResource,
    Repo: ResourceRepository<R> + 'static,
{
    let Json(UpdateRequest { id, fields }) = payload?;
    fields.validate()?;

    let record = service.update(id, fields.into()).await?;

    Ok(Envelope::ok(record.into()))
}

/// Deletes the record named by `?id=`.
///
/// # Errors
///
/// Returns 400 if `id` is missing or not a UUID.
/// Returns 404 if no record has that id.
pub async fn delete_handler<R, Repo>(
    State(service): ServiceState<R, Repo>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> Result<Envelope<&'static str>, AppError>
where
    R: ApiResource,
    Repo: ResourceRepository<R> + 'static,
{
    let Query(query) = query?;

    service.delete(query.require_id()?).await?;

    Ok(Envelope::ok(DELETED_MESSAGE))
}
