//! Pre-release gate.

use std::cmp::Ordering;

use super::Gate;
use crate::error::{RelgateError, Result};
use crate::registry::RegistryMetadata;
use crate::version::{LexicographicComparator, VersionComparator, VersionString};

/// Passes only when the local version is strictly ahead of the published one.
///
/// Stricter than [`ReleaseGate`](super::ReleaseGate): an equal version fails
/// here with the same error as a lower one.
#[derive(Debug, Clone, Default)]
pub struct PreReleaseGate<C = LexicographicComparator> {
    comparator: C,
}

impl PreReleaseGate {
    /// Create a gate using string ordering.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: VersionComparator> PreReleaseGate<C> {
    /// Create a gate with a custom version ordering.
    pub fn with_comparator(comparator: C) -> Self {
        Self { comparator }
    }
}

impl<C: VersionComparator> Gate for PreReleaseGate<C> {
    fn name(&self) -> &'static str {
        "prerelease"
    }

    fn evaluate(
        &self,
        _package: &str,
        local: &VersionString,
        published: &RegistryMetadata,
        _project_url: &str,
    ) -> Result<()> {
        if self.comparator.compare(&published.version, local) != Ordering::Less {
            return Err(RelgateError::PreReleaseNotAllowed {
                local: local.to_string(),
                published: published.version.to_string(),
            });
        }
        Ok(())
    }
}
