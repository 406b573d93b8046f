//! Relgate - Release gating and test workflow for Python packages.
//!
//! Relgate reads a package's version without importing it, gates releases
//! against the version already published on a package registry, and runs a
//! project's test suite after formatting its sources.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `relgate.yml` loading and schema
//! - [`error`] - Error types and result aliases
//! - [`gate`] - Release and prerelease policy checks
//! - [`observability`] - Process-wide logging setup
//! - [`registry`] - Package registry metadata client
//! - [`requirements`] - pip-style requirements file loading
//! - [`runner`] - Format-then-test workflow
//! - [`shell`] - Child process execution and environment probes
//! - [`ui`] - Terminal output
//! - [`version`] - Version extraction and comparison
//!
//! # Example
//!
//! ```
//! use relgate::version::{extract_version_from_str, LexicographicComparator, VersionComparator, VersionString};
//! use std::cmp::Ordering;
//!
//! let local = VersionString::new(extract_version_from_str("__version__ = '1.10.0'").unwrap()).unwrap();
//! let published = VersionString::new("1.2.0").unwrap();
//!
//! // Plain string ordering: "1.10.0" sorts before "1.2.0".
//! assert_eq!(LexicographicComparator.compare(&local, &published), Ordering::Less);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod gate;
pub mod observability;
pub mod registry;
pub mod requirements;
pub mod runner;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{RelgateError, Result};
