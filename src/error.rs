use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::dto::envelope::Envelope;

/// Error returned by repositories, services and handlers.
///
/// Every variant maps to one HTTP status; the message becomes the `data`
/// field of the response envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed input other than the JSON body.
    #[error("{message}")]
    Validation { message: String },
    /// Request body is not valid JSON for the expected shape.
    #[error("{message}")]
    Decode { message: String },
    #[error("{message}")]
    NotFound { message: String },
    /// Constraint violation reported by the database.
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Decode { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // The cause of a 5xx is logged where it is raised.
        tracing::debug!(status = status.as_u16(), error = %self, "Request failed");

        let message = match self {
            AppError::Validation { message }
            | AppError::Decode { message }
            | AppError::NotFound { message }
            | AppError::Conflict { message }
            | AppError::Internal { message } => message,
        };

        Envelope::new(status, message).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = e {
            return AppError::not_found("Record not found");
        }

        if let Some(db) = e.as_database_error() {
            let constraint = db.constraint().unwrap_or("unknown");

            if db.is_unique_violation() {
                return AppError::conflict(format!("Unique constraint violation: {constraint}"));
            }
            if db.is_foreign_key_violation() {
                return AppError::conflict(format!(
                    "Foreign key constraint violation: {constraint}"
                ));
            }
            if db.is_check_violation() {
                return AppError::bad_request(format!("Check constraint violation: {constraint}"));
            }
        }

        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error")
    }
}

impl From<ValidationErrors> for AppError {
    fn from(e: ValidationErrors) -> Self {
        AppError::bad_request(format!("Validation failed: {e}"))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::decode(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}
