//! Path parameters of the legacy mirror file route.

use serde::Deserialize;

use crate::domain::entities::RedirectRequest;

/// Segments of `/packages/{python_version}/{project_l}/{project_name}/{filename}`.
#[derive(Debug, Deserialize)]
pub struct PackagePath {
    pub python_version: String,
    pub project_l: String,
    pub project_name: String,
    pub filename: String,
}

impl From<PackagePath> for RedirectRequest {
    fn from(path: PackagePath) -> Self {
        RedirectRequest::new(
            path.python_version,
            path.project_l,
            path.project_name,
            path.filename,
        )
    }
}
