//! Package index access.

mod http_index_repository;

pub use http_index_repository::{HttpIndexRepository, build_client};
