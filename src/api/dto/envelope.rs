//! Uniform response wrapper used by every resource endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// A response body of the form
/// `{ "status_code": 200, "description": "succes", "data": ... }`.
#[derive(Debug)]
pub struct Envelope<T> {
    pub status: StatusCode,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self { status, data }
    }

    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, data)
    }

    pub fn created(data: T) -> Self {
        Self::new(StatusCode::CREATED, data)
    }
}

#[derive(Serialize)]
struct EnvelopeBody<'a, T> {
    status_code: u16,
    description: &'static str,
    data: &'a T,
}

/// Envelope `description` for a status code.
///
/// `"succes"` is the established wire value; clients match on it.
pub fn description(status: StatusCode) -> &'static str {
    match status.as_u16() {
        0..400 => "succes",
        400..500 => "bad request",
        _ => "internal server error",
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        let body = EnvelopeBody {
            status_code: self.status.as_u16(),
            description: description(self.status),
            data: &self.data,
        };

        (self.status, Json(body)).into_response()
    }
}
