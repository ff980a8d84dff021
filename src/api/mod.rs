//! HTTP layer translating requests into redirect resolutions.
//!
//! # Modules
//!
//! - [`dto`] - Path parameters and JSON response bodies
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`routes`] - Route configuration
//! - [`response`] - Rendering of resolution outcomes

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
