//! Dependency declarations from pip-style requirements files.
//!
//! # Modules
//!
//! - [`parser`] - Parsing a single requirement line into a [`Requirement`]
//! - [`loader`] - Reading files, following `-r` includes, skipping options
//!
//! # Example
//!
//! ```
//! use relgate::requirements::Requirement;
//!
//! let req: Requirement = "requests[security] >= 2.0".parse().unwrap();
//! assert_eq!(req.name, "requests");
//! assert_eq!(req.to_string(), "requests[security]>=2.0");
//! ```

pub mod loader;
pub mod parser;

pub use loader::{load_requirements, RequirementsLoader};
pub use parser::Requirement;
