//! Release gate.

use std::cmp::Ordering;

use super::Gate;
use crate::error::{RelgateError, Result};
use crate::registry::RegistryMetadata;
use crate::version::{LexicographicComparator, VersionComparator, VersionString};

/// Blocks a release when the local version is already published or sorts
/// below the published one.
#[derive(Debug, Clone, Default)]
pub struct ReleaseGate<C = LexicographicComparator> {
    comparator: C,
}

impl ReleaseGate {
    /// Create a gate using string ordering.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: VersionComparator> ReleaseGate<C> {
    /// Create a gate with a custom version ordering.
    pub fn with_comparator(comparator: C) -> Self {
        Self { comparator }
    }
}

impl<C: VersionComparator> Gate for ReleaseGate<C> {
    fn name(&self) -> &'static str {
        "release"
    }

    fn evaluate(
        &self,
        package: &str,
        local: &VersionString,
        published: &RegistryMetadata,
        project_url: &str,
    ) -> Result<()> {
        match self.comparator.compare(&published.version, local) {
            Ordering::Equal => Err(RelgateError::AlreadyReleased {
                package: package.to_string(),
                local: local.to_string(),
                project_url: project_url.to_string(),
            }),
            Ordering::Greater => Err(RelgateError::VersionRegression {
                local: local.to_string(),
                published: published.version.to_string(),
            }),
            Ordering::Less => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> VersionString {
        VersionString::new(s).unwrap()
    }

    fn published(s: &str) -> RegistryMetadata {
        RegistryMetadata {
            name: Some("pkg".into()),
            version: v(s),
        }
    }

    fn check(local: &str, remote: &str) -> Result<()> {
        ReleaseGate::new().evaluate("pkg", &v(local), &published(remote), "https://r/p/")
    }

    #[test]
    fn same_version_is_already_released() {
        let err = check("1.2.3", "1.2.3").unwrap_err();
        assert!(matches!(err, RelgateError::AlreadyReleased { .. }));
        assert!(err.to_string().contains("https://r/p/"));
    }

    #[test]
    fn lower_local_version_is_regression() {
        let err = check("1.2.3", "1.9.9").unwrap_err();
        match err {
            RelgateError::VersionRegression { local, published } => {
                assert_eq!(local, "1.2.3");
                assert_eq!(published, "1.9.9");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn higher_local_version_passes() {
        assert!(check("2.0.0", "1.9.9").is_ok());
    }

    #[test]
    fn string_ordering_is_preserved() {
        // 1.10.0 sorts below 1.9.0 as text, so the gate rejects it.
        let err = check("1.10.0", "1.9.0").unwrap_err();
        assert!(matches!(err, RelgateError::VersionRegression { .. }));
    }

    #[test]
    fn custom_comparator_is_used() {
        struct AlwaysAhead;
        impl VersionComparator for AlwaysAhead {
            fn compare(&self, _: &VersionString, _: &VersionString) -> Ordering {
                Ordering::Less
            }
        }

        let gate = ReleaseGate::with_comparator(AlwaysAhead);
        assert!(gate
            .evaluate("pkg", &v("1.0"), &published("1.0"), "")
            .is_ok());
    }
}
