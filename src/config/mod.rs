//! Project configuration for relgate.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use relgate::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("relgate.yml"), "package: wstools").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.package_name(temp.path()).unwrap(), "wstools");
//! ```
//!
//! # Configuration File Location
//!
//! `relgate.yml` at the project root, or any file passed with `--config`.
//! Every field is optional; a project without a config file uses defaults.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::{
    FormatSettings, ProjectConfig, RegistrySettings, RequirementsSettings, TestSettings,
};
