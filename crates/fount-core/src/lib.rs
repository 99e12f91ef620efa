//! Fount Core Library
//!
//! Provides the domain logic for administering data sources: a registry of
//! named source configurations backed by a YAML file, and a resolution
//! pipeline that turns source path specifications (local files, remote
//! URLs, archive members) into concrete local file paths with lazy caching.

pub mod cache;
pub mod registry;
pub mod source;

/// Re-exports of commonly used types
pub mod prelude {
    // Caching
    pub use crate::cache::{CacheExtractor, CacheFetcher, ExtractError, FetchError, Freshness};

    // Registry
    pub use crate::registry::{KeyFields, SourceConfig, SourceRegistry};

    // Path resolution
    pub use crate::source::{PathResolver, PathSpec, RawPathEntry, RawPaths, ResolveError};
}
