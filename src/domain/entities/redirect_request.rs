//! Redirect request entity built from the legacy mirror path.

/// Suffix marking a request for the detached PGP signature of a file.
const SIGNATURE_SUFFIX: &str = ".asc";

/// A request for a file on the legacy static mirror.
///
/// Mirrors the `/packages/{python_version}/{project_l}/{project_name}/{filename}`
/// path layout. Path segments are taken verbatim; the routing layer has
/// already percent-decoded them.
///
/// When the requested filename ends with `.asc`, the request is for the
/// signature of the file named by the remaining prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRequest {
    python_version: String,
    project_letter: String,
    project_name: String,
    filename: String,
    wants_signature: bool,
}

impl RedirectRequest {
    /// Creates a request, splitting a trailing `.asc` off the filename.
    pub fn new(
        python_version: impl Into<String>,
        project_letter: impl Into<String>,
        project_name: impl Into<String>,
        requested_filename: impl Into<String>,
    ) -> Self {
        let mut filename: String = requested_filename.into();

        let wants_signature = filename.ends_with(SIGNATURE_SUFFIX);
        if wants_signature {
            filename.truncate(filename.len() - SIGNATURE_SUFFIX.len());
        }

        Self {
            python_version: python_version.into(),
            project_letter: project_letter.into(),
            project_name: project_name.into(),
            filename,
            wants_signature,
        }
    }

    pub fn python_version(&self) -> &str {
        &self.python_version
    }

    pub fn project_letter(&self) -> &str {
        &self.project_letter
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// The real filename, with any `.asc` suffix removed.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns true if the signature of the file was requested.
    pub fn wants_signature(&self) -> bool {
        self.wants_signature
    }

    /// Returns true if the letter bucket is exactly the first character of
    /// the project name.
    ///
    /// Comparison is case-sensitive. An empty project name never matches.
    pub fn letter_matches(&self) -> bool {
        let Some(first) = self.project_name.chars().next() else {
            return false;
        };

        let mut letter = self.project_letter.chars();
        letter.next() == Some(first) && letter.next().is_none()
    }
}
