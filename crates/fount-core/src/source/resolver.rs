//! Path resolver implementation.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::cache::{CacheExtractor, CacheFetcher, ExtractError, FetchError};

use super::spec::PathSpec;

/// Failure of a single path resolution.
///
/// The pipeline halts at the first failing stage: a failed fetch is
/// reported as [`ResolveError::Fetch`] and extraction is never attempted.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The remote fetch stage failed.
    #[error("failed to fetch \"{resource}\"")]
    Fetch {
        resource: String,
        #[source]
        source: FetchError,
    },
    /// The archive extraction stage failed.
    #[error("failed to extract \"{member}\" from \"{}\"", archive.display())]
    Extract {
        member: String,
        archive: PathBuf,
        #[source]
        source: ExtractError,
    },
}

/// Resolves path specifications into concrete local file paths.
///
/// Orchestration only: all filesystem and network side effects happen
/// inside [`CacheFetcher`] and [`CacheExtractor`].
#[derive(Debug)]
pub struct PathResolver {
    fetcher: CacheFetcher,
    extractor: CacheExtractor,
}

impl PathResolver {
    /// Create a resolver caching into `cache_dir`.
    ///
    /// `verbose` turns on cache hit/miss reporting in both stages.
    pub fn new(cache_dir: PathBuf, verbose: bool) -> Self {
        Self {
            fetcher: CacheFetcher::new(cache_dir.clone(), verbose),
            extractor: CacheExtractor::new(cache_dir, verbose),
        }
    }

    /// Cache directory shared by both pipeline stages.
    pub fn cache_dir(&self) -> &Path {
        self.fetcher.cache_dir()
    }

    /// Resolve a single specification.
    ///
    /// Local non-archive specs come back untouched. Remote specs go
    /// through the download cache first; archive specs then have their
    /// member pulled out through the extraction cache.
    pub fn resolve(&self, spec: &PathSpec) -> Result<PathBuf, ResolveError> {
        let file = if spec.is_remote() {
            self.fetcher
                .fetch(&spec.file)
                .map_err(|source| ResolveError::Fetch {
                    resource: spec.file.clone(),
                    source,
                })?
        } else {
            PathBuf::from(&spec.file)
        };

        match &spec.extract {
            None => Ok(file),
            Some(member) => self
                .extractor
                .extract(&file, member)
                .map_err(|source| ResolveError::Extract {
                    member: member.clone(),
                    archive: file.clone(),
                    source,
                }),
        }
    }

    /// Resolve the first specification in `specs` that succeeds.
    ///
    /// `specs` is ordered: the first entry is the primary source and the
    /// rest are failovers. Failing entries are reported and skipped.
    pub fn resolve_any(&self, specs: &[PathSpec]) -> Option<PathBuf> {
        for spec in specs {
            match self.resolve(spec) {
                Ok(path) => return Some(path),
                Err(err) => {
                    warn!(file = %spec.file, error = %err, "source path failed, trying next");
                }
            }
        }
        None
    }
}
