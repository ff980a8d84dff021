//! Legacy mirror redirect resolution.

use std::sync::Arc;

use axum::http::StatusCode;
use tracing::{debug, error, warn};

use crate::domain::ResolutionOutcome;
use crate::domain::entities::RedirectRequest;
use crate::domain::repositories::{IndexError, IndexRepository};

/// Service mapping legacy mirror file paths onto package index file URLs.
///
/// Each call to [`Self::resolve`] is independent: no state is kept between
/// requests and at most one index lookup is made per request.
pub struct RedirectService<I: IndexRepository> {
    index_repository: Arc<I>,
}

impl<I: IndexRepository> RedirectService<I> {
    /// Creates a new redirect service.
    pub fn new(index_repository: Arc<I>) -> Self {
        Self { index_repository }
    }

    /// Resolves a request to a redirect or a bare status.
    ///
    /// # Request Flow
    ///
    /// 1. Reject a letter bucket that does not match the project name (404, no lookup)
    /// 2. Fetch the project metadata from the index
    /// 3. Find the first file matching filename and Python version exactly
    /// 4. Redirect to the file, or to its `.asc` signature when one was
    ///    requested and the index publishes it
    ///
    /// # Index Failures
    ///
    /// - **4xx**: Passed through unchanged
    /// - **5xx, bad body, transport failure**: 503
    /// - **Any other status**: 502, see [`ResolutionOutcome::ProtocolViolation`]
    pub async fn resolve(&self, request: &RedirectRequest) -> ResolutionOutcome {
        if !request.letter_matches() {
            debug!(
                letter = request.project_letter(),
                project = request.project_name(),
                "Letter bucket does not match project"
            );
            return ResolutionOutcome::NotFound;
        }

        let metadata = match self
            .index_repository
            .fetch_project(request.project_name())
            .await
        {
            Ok(metadata) => metadata,
            Err(e) => return outcome_for_index_error(request.project_name(), e),
        };

        let Some(file) = metadata.find_file(request.filename(), request.python_version()) else {
            debug!(
                project = request.project_name(),
                filename = request.filename(),
                python_version = request.python_version(),
                "No matching file"
            );
            return ResolutionOutcome::NotFound;
        };

        if !request.wants_signature() {
            return ResolutionOutcome::redirect(file.url.as_str());
        }

        if file.has_signature {
            ResolutionOutcome::redirect(format!("{}.asc", file.url))
        } else {
            debug!(filename = request.filename(), "Signature requested but not published");
            ResolutionOutcome::NotFound
        }
    }
}

fn outcome_for_index_error(project: &str, e: IndexError) -> ResolutionOutcome {
    match e {
        IndexError::ClientStatus(code) => match StatusCode::from_u16(code) {
            Ok(status) => ResolutionOutcome::ClientError { status },
            Err(_) => {
                error!(project, code, "Index returned an invalid status code");
                ResolutionOutcome::ServerError
            }
        },
        IndexError::UnexpectedStatus(code) => {
            error!(project, code, "Index answered outside 200/4xx/5xx");
            match StatusCode::from_u16(code) {
                Ok(status) => ResolutionOutcome::ProtocolViolation { status },
                Err(_) => ResolutionOutcome::ServerError,
            }
        }
        e => {
            warn!(project, error = %e, "Index lookup failed");
            ResolutionOutcome::ServerError
        }
    }
}
