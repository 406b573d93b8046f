//! Release gates.
//!
//! A gate fetches the latest published metadata for a package, compares it
//! with the local version and either lets the pipeline continue (silently)
//! or stops it with a descriptive error.
//!
//! - [`ReleaseGate`] blocks re-releasing the published version and releasing
//!   anything that sorts below it.
//! - [`PreReleaseGate`] only passes when the local version is strictly ahead.
//!
//! # Example
//!
//! ```
//! use relgate::gate::{Gate, ReleaseGate};
//! use relgate::registry::RegistryMetadata;
//! use relgate::version::VersionString;
//!
//! let local = VersionString::new("2.0.0").unwrap();
//! let published = RegistryMetadata {
//!     name: None,
//!     version: VersionString::new("1.9.9").unwrap(),
//! };
//! assert!(ReleaseGate::new().evaluate("pkg", &local, &published, "").is_ok());
//! ```

pub mod prerelease;
pub mod release;

pub use prerelease::PreReleaseGate;
pub use release::ReleaseGate;

use crate::error::Result;
use crate::registry::{MetadataSource, RegistryMetadata};
use crate::version::VersionString;

/// A release policy check.
pub trait Gate {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Decide whether `local` may proceed given what is `published`.
    fn evaluate(
        &self,
        package: &str,
        local: &VersionString,
        published: &RegistryMetadata,
        project_url: &str,
    ) -> Result<()>;
}

/// Fetch published metadata and evaluate `gate` against it.
///
/// Performs exactly one registry read. Network failures propagate as-is.
pub fn run_gate(
    gate: &dyn Gate,
    source: &dyn MetadataSource,
    package: &str,
    local: &VersionString,
) -> Result<()> {
    let published = source.fetch_metadata(package)?;
    tracing::debug!(
        "{} gate: local {} vs published {}",
        gate.name(),
        local,
        published.version
    );
    gate.evaluate(package, local, &published, &source.project_url(package))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::Cell;

    use crate::error::{RelgateError, Result};
    use crate::registry::{MetadataSource, RegistryMetadata};
    use crate::version::VersionString;

    /// In-memory registry that counts fetches.
    pub struct StaticSource {
        pub published: Option<String>,
        pub fetches: Cell<usize>,
    }

    impl StaticSource {
        pub fn publishing(version: &str) -> Self {
            Self {
                published: Some(version.to_string()),
                fetches: Cell::new(0),
            }
        }

        pub fn offline() -> Self {
            Self {
                published: None,
                fetches: Cell::new(0),
            }
        }
    }

    impl MetadataSource for StaticSource {
        fn fetch_metadata(&self, package: &str) -> Result<RegistryMetadata> {
            self.fetches.set(self.fetches.get() + 1);
            match &self.published {
                Some(v) => Ok(RegistryMetadata {
                    name: Some(package.to_string()),
                    version: VersionString::new(v.clone())?,
                }),
                None => Err(RelgateError::Network {
                    url: "memory://registry".into(),
                    message: "offline".into(),
                }),
            }
        }

        fn project_url(&self, package: &str) -> String {
            format!("memory://registry/project/{}/", package)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::StaticSource;
    use super::*;
    use crate::error::RelgateError;

    fn v(s: &str) -> VersionString {
        VersionString::new(s).unwrap()
    }

    #[test]
    fn run_gate_fetches_once() {
        let source = StaticSource::publishing("1.0.0");
        run_gate(&ReleaseGate::new(), &source, "pkg", &v("1.0.1")).unwrap();
        assert_eq!(source.fetches.get(), 1);
    }

    #[test]
    fn run_gate_propagates_network_error() {
        let source = StaticSource::offline();
        let err = run_gate(&PreReleaseGate::new(), &source, "pkg", &v("1.0")).unwrap_err();
        assert!(matches!(err, RelgateError::Network { .. }));
    }

    #[test]
    fn run_gate_passes_project_url_to_gate() {
        let source = StaticSource::publishing("1.0.0");
        let err = run_gate(&ReleaseGate::new(), &source, "pkg", &v("1.0.0")).unwrap_err();
        assert!(err.to_string().contains("memory://registry/project/pkg/"));
    }
}
