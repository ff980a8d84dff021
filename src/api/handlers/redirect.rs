//! Handler for legacy mirror file redirects.

use axum::extract::{Path, State};
use tracing::debug;

use crate::api::dto::package_path::PackagePath;
use crate::domain::ResolutionOutcome;
use crate::domain::entities::RedirectRequest;
use crate::state::AppState;

/// Redirects a legacy mirror file path to the file on the package index.
///
/// # Endpoint
///
/// `GET /packages/{python_version}/{project_l}/{project_name}/{filename}`
///
/// A `filename` ending in `.asc` asks for the file's PGP signature.
///
/// # Response Codes
///
/// - **302 Found**: `Location` points at the file (or its signature),
///   with `Cache-Control: max-age=604800, public`
/// - **404 Not Found**: Letter bucket mismatch, no matching file, or no signature
/// - **4xx**: Passed through from the index
/// - **502 Bad Gateway**: Index answered with an unexpected status
/// - **503 Service Unavailable**: Index failed or sent an unusable body
///
/// No response body is sent.
pub async fn redirect_handler(
    Path(path): Path<PackagePath>,
    State(state): State<AppState>,
) -> ResolutionOutcome {
    let request = RedirectRequest::from(path);

    let outcome = state.redirect_service.resolve(&request).await;
    debug!(status = %outcome.status(), "Resolved {}", request.filename());

    outcome
}
