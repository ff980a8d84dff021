//! HTTP rendering of resolution outcomes.

use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::domain::ResolutionOutcome;

impl IntoResponse for ResolutionOutcome {
    fn into_response(self) -> Response {
        match self {
            ResolutionOutcome::Redirect {
                location,
                cache_control,
            } => match HeaderValue::try_from(location) {
                Ok(location) => (
                    StatusCode::FOUND,
                    [
                        (header::LOCATION, location),
                        (header::CACHE_CONTROL, HeaderValue::from_static(cache_control)),
                    ],
                )
                    .into_response(),
                Err(e) => {
                    error!(error = %e, "Index file URL is not a valid header value");
                    ResolutionOutcome::ServerError.into_response()
                }
            },
            outcome => outcome.status().into_response(),
        }
    }
}
