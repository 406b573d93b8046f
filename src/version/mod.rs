//! Local version handling.
//!
//! This module provides:
//! - [`VersionString`], the opaque version token compared by the gates
//! - Version extraction from a metadata file without executing it
//! - The [`VersionComparator`] seam used by the release gates

pub mod compare;
pub mod extract;

pub use compare::{LexicographicComparator, VersionComparator};
pub use extract::{extract_version, extract_version_from_str};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RelgateError, Result};

/// An opaque, non-empty version token such as `"1.2.3"`.
///
/// No structure is assumed. Ordering between two versions is decided by a
/// [`VersionComparator`], never by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionString(String);

impl VersionString {
    /// Create a version, rejecting empty or whitespace-only input.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(RelgateError::InvalidVersion { value });
        }
        Ok(Self(value))
    }

    /// The raw version text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VersionString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VersionString {
    type Error = RelgateError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<VersionString> for String {
    fn from(version: VersionString) -> Self {
        version.0
    }
}
