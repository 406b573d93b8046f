//! Configuration file discovery and loading.

use crate::config::schema::ProjectConfig;
use crate::error::{RelgateError, Result};
use std::fs;
use std::path::Path;

/// Config file name looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "relgate.yml";

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RelgateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            RelgateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ProjectConfig`].
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| RelgateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// With an override, that file must exist. Otherwise `relgate.yml` at the
/// project root is used when present, and defaults when it is not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<ProjectConfig> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }

    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        tracing::debug!("Loading config from {}", path.display());
        load_config_file(&path)
    } else {
        tracing::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
        Ok(ProjectConfig::default())
    }
}
