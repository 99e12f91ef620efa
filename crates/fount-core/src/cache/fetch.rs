//! Lazy downloading of remote resources into a cache directory.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tracing::info;

/// Failure of a [`CacheFetcher::fetch`] call.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP request could not be completed.
    #[error("request failed")]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server answered HTTP {status}")]
    Status { status: reqwest::StatusCode },
    /// The response body could not be written to the cache.
    #[error("failed to write cached copy to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Downloads remote resources at most once per cache directory.
///
/// The cache is keyed by URL basename: a file already present at
/// `cache_dir/basename(url)` is authoritative and short-circuits the
/// network entirely. There is no revalidation, conditional GET, or hash
/// check, and no cleanup of a partially written file on failure.
#[derive(Debug)]
pub struct CacheFetcher {
    cache_dir: PathBuf,
    verbose: bool,
}

impl CacheFetcher {
    /// Create a fetcher caching into `cache_dir`.
    ///
    /// `verbose` turns on per-call cache hit/miss reporting.
    pub fn new(cache_dir: PathBuf, verbose: bool) -> Self {
        Self { cache_dir, verbose }
    }

    /// Get the cache directory.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Deterministic cache path for `resource`.
    pub fn target_path(&self, resource: &str) -> PathBuf {
        self.cache_dir.join(basename(resource))
    }

    /// Return a local copy of `resource`, downloading only on cache miss.
    pub fn fetch(&self, resource: &str) -> Result<PathBuf, FetchError> {
        let target = self.target_path(resource);

        if target.is_file() {
            if self.verbose {
                info!(resource, path = %target.display(), "using cached download");
            }
            return Ok(target);
        }

        if self.verbose {
            info!(resource, path = %target.display(), "downloading into cache");
        }

        let response = reqwest::blocking::get(resource)?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { status });
        }

        let mut out = File::create(&target).map_err(|source| FetchError::Write {
            path: target.clone(),
            source,
        })?;
        let mut body = response;
        io::copy(&mut body, &mut out).map_err(|source| FetchError::Write {
            path: target.clone(),
            source,
        })?;

        Ok(target)
    }
}

/// Last path segment of a URL or path string.
fn basename(resource: &str) -> &str {
    resource.rsplit('/').next().unwrap_or(resource)
}
