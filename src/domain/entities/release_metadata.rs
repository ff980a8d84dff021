//! Release metadata returned by the package index JSON API.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

/// Project metadata as served by `/pypi/{project}/json`.
///
/// Only the `releases` table is read. Releases keep the order in which the
/// index listed them, so lookups walk the document in its natural order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseMetadata {
    #[serde(default)]
    pub releases: IndexMap<String, Vec<FileRecord>>,
}

/// A single distribution file of a release.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileRecord {
    pub filename: String,
    pub python_version: String,
    pub url: String,
    /// Whether a detached `.asc` signature is published next to the file.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default, rename = "has_sig")]
    pub has_signature: bool,
}

impl ReleaseMetadata {
    /// Parses the JSON body of a project metadata response.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Returns the first file whose filename and Python version both match
    /// exactly.
    ///
    /// Releases are searched in document order, then files within each
    /// release in list order.
    pub fn find_file(&self, filename: &str, python_version: &str) -> Option<&FileRecord> {
        self.releases
            .values()
            .flatten()
            .find(|file| file.filename == filename && file.python_version == python_version)
    }
}
