//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::redirect_service::RedirectService`] - Legacy mirror path to index file URL resolution

pub mod services;
