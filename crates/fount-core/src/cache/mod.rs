//! Lazy caching for downloads and archive extractions.
//!
//! Cache entries have no index: a file existing at its computed path under
//! the cache directory IS the hit signal. Downloads are keyed by URL
//! basename, extractions by archive member name.

mod extract;
mod fetch;
pub mod freshness;

pub use extract::{CacheExtractor, ExtractError};
pub use fetch::{CacheFetcher, FetchError};
pub use freshness::Freshness;
