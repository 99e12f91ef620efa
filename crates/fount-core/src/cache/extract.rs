//! Lazy extraction of single members out of zip archives.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;
use zip::ZipArchive;
use zip::result::ZipError;

use super::freshness;

/// Failure of a [`CacheExtractor::extract`] call.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The archive file could not be opened.
    #[error("failed to open archive {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The archive is not a readable zip container.
    #[error("corrupt or unsupported archive")]
    Archive(#[from] ZipError),
    /// The requested member does not exist in the archive.
    #[error("member \"{member}\" not found in archive")]
    MemberNotFound { member: String },
    /// The extracted member could not be written to the cache.
    #[error("failed to write extracted member to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Extracts archive members at most once, re-extracting only when the
/// archive is newer than the cached copy.
///
/// The cache is keyed by member name: extracting `a/b.csv` lands at
/// `cache_dir/a/b.csv`, with the member's internal subdirectories
/// recreated under the cache directory.
#[derive(Debug)]
pub struct CacheExtractor {
    cache_dir: PathBuf,
    verbose: bool,
}

impl CacheExtractor {
    /// Create an extractor caching into `cache_dir`.
    ///
    /// `verbose` turns on per-call cache hit/miss reporting.
    pub fn new(cache_dir: PathBuf, verbose: bool) -> Self {
        Self { cache_dir, verbose }
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Deterministic cache path for `member`.
    pub fn target_path(&self, member: &str) -> PathBuf {
        self.cache_dir.join(member)
    }

    /// Return a local copy of `member` from `archive`, extracting only
    /// when the cached copy is absent or stale.
    ///
    /// The cached copy is fresh iff it exists and the archive is strictly
    /// older than it. A tie in timestamps counts as stale, so ties
    /// re-extract (overwriting the cached copy).
    pub fn extract(&self, archive: &Path, member: &str) -> Result<PathBuf, ExtractError> {
        let target = self.target_path(member);

        if target.is_file() {
            if freshness::is_older(archive, &target) {
                if self.verbose {
                    info!(member, path = %target.display(), "using cached extraction");
                }
                return Ok(target);
            }
            if self.verbose {
                info!(
                    member,
                    archive = %archive.display(),
                    "cached extraction is stale, re-extracting"
                );
            }
        } else if self.verbose {
            info!(member, archive = %archive.display(), "extracting into cache");
        }

        let file = File::open(archive).map_err(|source| ExtractError::Open {
            path: archive.to_path_buf(),
            source,
        })?;
        let mut zip = ZipArchive::new(file)?;
        let mut entry = match zip.by_name(member) {
            Ok(entry) => entry,
            Err(ZipError::FileNotFound) => {
                return Err(ExtractError::MemberNotFound {
                    member: member.to_string(),
                });
            }
            Err(err) => return Err(ExtractError::Archive(err)),
        };

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| ExtractError::Write {
                path: target.clone(),
                source,
            })?;
        }
        let mut out = File::create(&target).map_err(|source| ExtractError::Write {
            path: target.clone(),
            source,
        })?;
        io::copy(&mut entry, &mut out).map_err(|source| ExtractError::Write {
            path: target.clone(),
            source,
        })?;

        Ok(target)
    }
}
