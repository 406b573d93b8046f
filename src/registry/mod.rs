//! Package registry access.
//!
//! The gates only need the latest published version of one package, read
//! from the registry's public JSON API. Access goes through the
//! [`MetadataSource`] trait so gate logic can be exercised without a
//! network.
//!
//! # Example
//!
//! ```no_run
//! use relgate::registry::{MetadataSource, RegistryClient};
//! use std::time::Duration;
//!
//! let client = RegistryClient::new("https://pypi.org", Duration::from_secs(30)).unwrap();
//! let metadata = client.fetch_metadata("wstools").unwrap();
//! println!("latest published: {}", metadata.version);
//! ```

pub mod client;

pub use client::{RegistryClient, DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT_SECS};

use serde::Deserialize;

use crate::error::Result;
use crate::version::VersionString;

/// Published metadata for a package, as reported by the registry.
///
/// Fetched fresh on every gate run and discarded after the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistryMetadata {
    /// Canonical package name, when the registry reports one.
    #[serde(default)]
    pub name: Option<String>,
    /// Latest published version.
    pub version: VersionString,
}

/// Anything that can report published metadata for a package.
pub trait MetadataSource {
    /// Fetch the current metadata for `package`.
    fn fetch_metadata(&self, package: &str) -> Result<RegistryMetadata>;

    /// Human-facing page for `package` on this registry.
    fn project_url(&self, package: &str) -> String;
}
