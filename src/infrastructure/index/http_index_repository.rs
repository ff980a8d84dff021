//! Package index repository backed by the JSON API over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, redirect};
use tracing::debug;
use url::Url;

use crate::domain::entities::ReleaseMetadata;
use crate::domain::repositories::{IndexError, IndexRepository};

/// Builds the HTTP client used for index lookups.
///
/// Redirects are not followed: the index is expected to answer metadata
/// requests directly, and any 3xx is reported as an unexpected status.
///
/// # Errors
///
/// Returns an error if the TLS backend cannot be initialised.
pub fn build_client(timeout: Duration, user_agent: &str) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .redirect(redirect::Policy::none())
        .build()
}

/// Fetches `/pypi/{project}/json` from a configured index endpoint.
///
/// The client is shared: connection pooling, TLS and timeouts are its concern.
#[derive(Clone)]
pub struct HttpIndexRepository {
    client: Client,
    endpoint: Url,
}

impl HttpIndexRepository {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    /// Joins the metadata path onto the endpoint.
    ///
    /// The path is absolute, so it replaces any path the endpoint carries.
    /// The project name is inserted verbatim.
    pub fn project_url(&self, project_name: &str) -> Result<Url, IndexError> {
        self.endpoint
            .join(&format!("/pypi/{}/json", project_name))
            .map_err(|e| IndexError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl IndexRepository for HttpIndexRepository {
    async fn fetch_project(&self, project_name: &str) -> Result<ReleaseMetadata, IndexError> {
        let url = self.project_url(project_name)?;
        debug!(%url, "Fetching project metadata");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| IndexError::Transport(e.to_string()))?;

        match response.status().as_u16() {
            200 => {}
            code @ 400..=499 => return Err(IndexError::ClientStatus(code)),
            code @ 500..=599 => return Err(IndexError::ServerStatus(code)),
            code => return Err(IndexError::UnexpectedStatus(code)),
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| IndexError::Transport(e.to_string()))?;

        ReleaseMetadata::from_json(&body).map_err(|e| IndexError::InvalidBody(e.to_string()))
    }
}
