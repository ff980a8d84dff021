//! # Conveyor
//!
//! Redirects legacy static-mirror package URLs to the files served by a
//! Python package index.
//!
//! A request for `/packages/{python_version}/{project_l}/{project_name}/{filename}`
//! is answered with a `302` pointing at the matching file listed by the
//! index's `/pypi/{project}/json` API, or with a bare error status.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Request/metadata entities, outcomes and the index repository trait
//! - **Application Layer** ([`application`]) - Redirect resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Package index HTTP client
//! - **API Layer** ([`api`]) - Handlers, DTOs and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export INDEX_ENDPOINT="https://pypi.org/"  # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::RedirectService;
    pub use crate::domain::ResolutionOutcome;
    pub use crate::domain::entities::{FileRecord, RedirectRequest, ReleaseMetadata};
    pub use crate::domain::repositories::{IndexError, IndexRepository};
    pub use crate::state::AppState;
}
