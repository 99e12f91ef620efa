//! Modification-time comparison between a source and a derived artifact.

use std::path::Path;

use tracing::warn;

/// Outcome of comparing the modification times of two filesystem entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// The first entry was modified strictly before the second.
    Older,
    /// The first entry was modified at or after the second.
    NotOlder,
    /// At least one of the timestamps could not be read.
    Inconclusive,
}

/// Compare the last-modification times of `a` and `b`.
pub fn compare(a: &Path, b: &Path) -> Freshness {
    let (Ok(a_meta), Ok(b_meta)) = (a.metadata(), b.metadata()) else {
        return Freshness::Inconclusive;
    };

    match (a_meta.modified(), b_meta.modified()) {
        (Ok(a_time), Ok(b_time)) if a_time < b_time => Freshness::Older,
        (Ok(_), Ok(_)) => Freshness::NotOlder,
        _ => Freshness::Inconclusive,
    }
}

/// Strict "is `a` older than `b`" test on modification times.
///
/// Unreadable timestamps answer `false`: a missing comparison point must
/// never look like staleness to the caller. Checking that the entries
/// exist at all is the caller's job, not this one's.
pub fn is_older(a: &Path, b: &Path) -> bool {
    match compare(a, b) {
        Freshness::Older => true,
        Freshness::NotOlder => false,
        Freshness::Inconclusive => {
            warn!(
                a = %a.display(),
                b = %b.display(),
                "modification times unreadable, assuming not older"
            );
            false
        }
    }
}
