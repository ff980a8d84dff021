//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public routes. No authentication is applied.
///
/// # Endpoints
///
/// - `GET /packages/{python_version}/{project_l}/{project_name}/{filename}` - Legacy mirror redirect
/// - `GET /health` - Liveness check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/packages/{python_version}/{project_l}/{project_name}/{filename}",
            get(redirect_handler),
        )
        .route("/health", get(health_handler))
}
