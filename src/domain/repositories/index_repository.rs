//! Repository trait for package index metadata lookups.

use crate::domain::entities::ReleaseMetadata;
use async_trait::async_trait;
use thiserror::Error;

/// Why project metadata could not be obtained from the index.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("index rejected the lookup with status {0}")]
    ClientStatus(u16),

    #[error("index failed with status {0}")]
    ServerStatus(u16),

    #[error("index answered with unexpected status {0}")]
    UnexpectedStatus(u16),

    #[error("invalid metadata body: {0}")]
    InvalidBody(String),

    #[error("request to index failed: {0}")]
    Transport(String),

    #[error("cannot build metadata URL: {0}")]
    InvalidUrl(String),
}

/// Source of project release metadata.
///
/// # Implementations
///
/// - [`crate::infrastructure::index::HttpIndexRepository`] - JSON API over HTTP
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IndexRepository: Send + Sync {
    /// Fetches the release metadata of a project.
    ///
    /// Issues exactly one upstream request per call.
    ///
    /// # Errors
    ///
    /// - [`IndexError::ClientStatus`] for a 4xx answer
    /// - [`IndexError::ServerStatus`] for a 5xx answer
    /// - [`IndexError::UnexpectedStatus`] for any other non-200 answer
    /// - [`IndexError::InvalidBody`] if a 200 body does not match the schema
    /// - [`IndexError::Transport`] / [`IndexError::InvalidUrl`] if no answer was obtained
    async fn fetch_project(&self, project_name: &str) -> Result<ReleaseMetadata, IndexError>;
}
