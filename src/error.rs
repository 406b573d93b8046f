//! Error types for relgate operations.
//!
//! This module defines [`RelgateError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `RelgateError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `RelgateError::Other`) for unexpected errors
//! - Release policy errors always name both the local and published versions

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for relgate operations.
#[derive(Debug, Error)]
pub enum RelgateError {
    /// The metadata file has no `__version__ = "..."` assignment.
    #[error("No __version__ assignment found in {path}")]
    VersionNotFound { path: PathBuf },

    /// A version string was empty or otherwise unusable.
    #[error("Invalid version string: {value:?}")]
    InvalidVersion { value: String },

    /// A requirements file is missing or its includes are broken.
    #[error("Requirements file error at {path}: {message}")]
    RequirementsFile { path: PathBuf, message: String },

    /// The registry could not be reached or returned an unusable response.
    #[error("Registry request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The local version is already published.
    #[error(
        "Version {local} of {package} was already released. Remove the existing release \
         from the registry or bump the version: {project_url}"
    )]
    AlreadyReleased {
        package: String,
        local: String,
        project_url: String,
    },

    /// The local version sorts below the published one.
    #[error("Cannot release a version ({local}) smaller than the current registry release ({published})")]
    VersionRegression { local: String, published: String },

    /// Pre-release requires the local version to be strictly ahead.
    #[error(
        "Current version ({local}) is equal to or lower than the published one ({published}). \
         Increase the version to pass the prerelease stage"
    )]
    PreReleaseNotAllowed { local: String, published: String },

    /// Configuration file not found at an explicitly requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// External command could not be run or failed fatally.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for relgate operations.
pub type Result<T> = std::result::Result<T, RelgateError>;
