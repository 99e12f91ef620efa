//! Path specifications and the resolution pipeline.
//!
//! A data source names one or more paths: local files, remote URLs, or
//! members inside zip archives. This module normalizes the raw
//! configuration shapes into [`PathSpec`] records and resolves each record
//! into a concrete local file path through the download and extraction
//! caches.

mod normalize;
mod resolver;
mod spec;

pub use normalize::{RawPathEntry, RawPaths, normalize};
pub use resolver::{PathResolver, ResolveError};
pub use spec::PathSpec;
