//! Version ordering used by the release gates.
//!
//! Gates never compare versions directly; they go through a
//! [`VersionComparator`]. The only implementation today orders versions as
//! plain strings, so `"1.10.0"` sorts *below* `"1.2.0"`. That matches what
//! existing release pipelines already rely on.

use std::cmp::Ordering;

use super::VersionString;

/// Decides how two versions are ordered.
pub trait VersionComparator {
    /// Compare `a` against `b`.
    fn compare(&self, a: &VersionString, b: &VersionString) -> Ordering;
}

/// Byte-wise lexicographic string ordering. Not semver-aware.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicographicComparator;

impl VersionComparator for LexicographicComparator {
    fn compare(&self, a: &VersionString, b: &VersionString) -> Ordering {
        a.as_str().cmp(b.as_str())
    }
}
