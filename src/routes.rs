//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`        - Database connectivity check
//! - `/city`, `/customer`, `/driver`, `/car`, `/trip`, `/trip_customer` -
//!   resource endpoints, see [`crate::api::routes::resource_router`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - `/city/` is served as `/city`

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::api::routes::resource_router;
use crate::state::AppState;

/// All routes with request tracing, without path normalization.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(resource_router(&state))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
