//! HTTP client for the registry JSON API.
//!
//! Speaks the PyPI-style endpoint `GET <base>/pypi/<package>/json`, which
//! returns `{"info": {"name": ..., "version": ...}, ...}`. Each call is a
//! single request with a bounded timeout. There are no retries and nothing
//! is cached.

use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{MetadataSource, RegistryMetadata};
use crate::error::{RelgateError, Result};

/// Default registry base URL.
pub const DEFAULT_REGISTRY_URL: &str = "https://pypi.org";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level JSON document returned by the registry.
#[derive(Debug, Deserialize)]
struct PackageDocument {
    info: RegistryMetadata,
}

/// Fetches package metadata from a registry over HTTP(S).
pub struct RegistryClient {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl RegistryClient {
    /// Create a client for the registry at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("relgate/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| RelgateError::Network {
                url: base_url.to_string(),
                message: format!("cannot build HTTP client: {}", e),
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
            client,
        })
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Get the registry base URL (without trailing slash).
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// JSON endpoint for a package.
    pub fn metadata_url(&self, package: &str) -> String {
        format!("{}/pypi/{}/json", self.base_url, package)
    }
}

impl MetadataSource for RegistryClient {
    fn fetch_metadata(&self, package: &str) -> Result<RegistryMetadata> {
        let url = self.metadata_url(package);
        tracing::debug!("Fetching registry metadata from {}", url);

        let network_error = |message: String| RelgateError::Network {
            url: url.clone(),
            message,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| network_error(e.to_string()))?;

        if !response.status().is_success() {
            return Err(network_error(format!("HTTP {}", response.status())));
        }

        let document: PackageDocument = response
            .json()
            .map_err(|e| network_error(format!("invalid metadata document: {}", e)))?;

        tracing::debug!(
            "Registry reports {} at version {}",
            document.info.name.as_deref().unwrap_or(package),
            document.info.version
        );

        Ok(document.info)
    }

    fn project_url(&self, package: &str) -> String {
        format!("{}/project/{}/", self.base_url, package)
    }
}
