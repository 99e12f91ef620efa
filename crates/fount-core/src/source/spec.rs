//! Path specification types.

use serde::{Deserialize, Serialize};

/// Prefixes marking a path as remote.
const REMOTE_PREFIXES: [&str; 2] = ["http://", "https://"];

/// A normalized data source path specification.
///
/// `file` names either a local filesystem path or a remote URL. When
/// `extract` is set, `file` is a zip archive and `extract` the member to
/// pull out of it. Specs are immutable after normalization, which is also
/// where the one-time anchoring rewrite of relative local paths happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSpec {
    /// Local path or remote URL
    pub file: String,
    /// Archive member to extract, if `file` is an archive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extract: Option<String>,
}

impl PathSpec {
    /// Create a spec for a plain local or remote file.
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            extract: None,
        }
    }

    /// Create a spec for a member inside an archive.
    pub fn archive(file: impl Into<String>, extract: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            extract: Some(extract.into()),
        }
    }

    /// Check if this spec points at a remote resource.
    ///
    /// Only `http://` and `https://` prefixes count, case-insensitive.
    pub fn is_remote(&self) -> bool {
        let lower = self.file.to_ascii_lowercase();
        REMOTE_PREFIXES.iter().any(|prefix| lower.starts_with(prefix))
    }

    /// Check if this spec names a member inside an archive.
    pub fn is_archive(&self) -> bool {
        self.extract.is_some()
    }
}
