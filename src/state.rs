//! Shared state injected into request handlers.

use std::sync::Arc;

use url::Url;

use crate::application::services::RedirectService;
use crate::infrastructure::index::HttpIndexRepository;

/// Application state shared by all handlers.
///
/// Holds no per-request data; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub redirect_service: Arc<RedirectService<HttpIndexRepository>>,
    pub index_endpoint: Url,
}

impl AppState {
    /// Wires the redirect service onto an index repository.
    pub fn new(index_repository: HttpIndexRepository, index_endpoint: Url) -> Self {
        Self {
            redirect_service: Arc::new(RedirectService::new(Arc::new(index_repository))),
            index_endpoint,
        }
    }
}
