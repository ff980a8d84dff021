//! Request-scoped entities of the redirect service.
//!
//! - [`RedirectRequest`] - A legacy mirror file request
//! - [`ReleaseMetadata`] / [`FileRecord`] - Project metadata from the package index
//!
//! Nothing here outlives a single request.

pub mod redirect_request;
pub mod release_metadata;

pub use redirect_request::RedirectRequest;
pub use release_metadata::{FileRecord, ReleaseMetadata};
