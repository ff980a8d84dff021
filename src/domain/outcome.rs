//! Terminal result of resolving a redirect request.

use axum::http::StatusCode;

/// Cache directive attached to every successful redirect (one week, shared caches allowed).
pub const REDIRECT_CACHE_CONTROL: &str = "max-age=604800, public";

/// What the service answers for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    /// A matching file was found; send the client to `location`.
    Redirect {
        location: String,
        cache_control: &'static str,
    },
    /// The route was malformed or no matching file exists.
    NotFound,
    /// The index rejected the lookup with a 4xx status, passed through as is.
    ClientError { status: StatusCode },
    /// The index failed or returned an unusable body.
    ServerError,
    /// The index answered with a status outside 200/4xx/5xx.
    ProtocolViolation { status: StatusCode },
}

impl ResolutionOutcome {
    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect {
            location: location.into(),
            cache_control: REDIRECT_CACHE_CONTROL,
        }
    }

    /// HTTP status sent to the client for this outcome.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Redirect { .. } => StatusCode::FOUND,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::ClientError { status } => *status,
            Self::ServerError => StatusCode::SERVICE_UNAVAILABLE,
            Self::ProtocolViolation { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_statuses() {
        assert_eq!(ResolutionOutcome::redirect("https://x").status(), StatusCode::FOUND);
        assert_eq!(ResolutionOutcome::NotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ResolutionOutcome::ClientError {
                status: StatusCode::IM_A_TEAPOT
            }
            .status(),
            StatusCode::IM_A_TEAPOT
        );
        assert_eq!(
            ResolutionOutcome::ServerError.status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ResolutionOutcome::ProtocolViolation {
                status: StatusCode::MOVED_PERMANENTLY
            }
            .status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn test_redirect_carries_cache_directive() {
        let outcome = ResolutionOutcome::redirect("https://files.example/pkg.whl");

        assert_eq!(
            outcome,
            ResolutionOutcome::Redirect {
                location: "https://files.example/pkg.whl".to_string(),
                cache_control: "max-age=604800, public",
            }
        );
    }
}
