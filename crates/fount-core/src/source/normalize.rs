//! Normalization of raw path-specification shapes.
//!
//! The sources configuration accepts three shapes for a `paths` value: a
//! bare string, a `{file, extract}` mapping, or a list mixing both. All
//! downstream code operates only on ordered [`PathSpec`] sequences
//! produced here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::spec::PathSpec;

/// One raw path entry: a bare string or a structured mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPathEntry {
    /// `"ors_FR.csv"`
    Plain(String),
    /// `{file: "dataset.zip", extract: "dataset.csv"}`
    Detailed {
        file: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        extract: Option<String>,
    },
}

impl RawPathEntry {
    fn into_spec(self) -> PathSpec {
        match self {
            Self::Plain(file) => PathSpec::new(file),
            Self::Detailed { file, extract } => PathSpec { file, extract },
        }
    }
}

/// The `paths` value as found in configuration: one entry or a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPaths {
    One(RawPathEntry),
    Many(Vec<RawPathEntry>),
}

/// Convert raw configuration paths into an ordered sequence of [`PathSpec`].
///
/// Absence is preserved: `None` in, `None` out. Input order is kept; the
/// first entry is the primary source and later entries are failovers.
///
/// When `should_anchor` is true, every non-remote entry is rewritten to an
/// absolute path under `anchor_dir` (canonicalized when possible, taken
/// as given otherwise). Remote entries are never rewritten, and an entry
/// that is already absolute stays where it points.
pub fn normalize(
    raw: Option<RawPaths>,
    anchor_dir: &Path,
    should_anchor: bool,
) -> Option<Vec<PathSpec>> {
    let entries = match raw? {
        RawPaths::One(entry) => vec![entry],
        RawPaths::Many(entries) => entries,
    };

    let anchor = anchor_dir
        .canonicalize()
        .unwrap_or_else(|_| anchor_dir.to_path_buf());

    let specs = entries
        .into_iter()
        .map(RawPathEntry::into_spec)
        .map(|mut spec| {
            if should_anchor && !spec.is_remote() {
                spec.file = anchor.join(&spec.file).to_string_lossy().into_owned();
            }
            spec
        })
        .collect();

    Some(specs)
}
