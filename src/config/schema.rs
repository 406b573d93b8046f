//! Configuration schema definitions.
//!
//! These structs map to the `relgate.yml` file format.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{RelgateError, Result};
use crate::registry::{DEFAULT_REGISTRY_URL, DEFAULT_TIMEOUT_SECS};

/// Root configuration structure for `relgate.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Package name on the registry (defaults to the project directory name).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    /// File holding `__version__` (defaults to `<package>/version.py`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_file: Option<PathBuf>,

    /// Registry connection settings.
    pub registry: RegistrySettings,

    /// Requirements files.
    pub requirements: RequirementsSettings,

    /// Source formatter settings.
    pub format: FormatSettings,

    /// Test suite settings.
    pub test: TestSettings,
}

/// Registry connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrySettings {
    /// Base URL; metadata is read from `<url>/pypi/<package>/json`.
    pub url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_REGISTRY_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Requirements files, relative to the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequirementsSettings {
    /// Runtime dependencies.
    pub install: Vec<PathBuf>,

    /// Test and development dependencies.
    pub dev: Vec<PathBuf>,
}

impl Default for RequirementsSettings {
    fn default() -> Self {
        Self {
            install: vec![PathBuf::from("requirements.txt")],
            dev: vec![PathBuf::from("requirements-dev.txt")],
        }
    }
}

/// Source formatter settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSettings {
    /// Shell command; the paths are appended to it.
    pub command: String,

    /// Trees to format in place (defaults to the package dir and `tests`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<PathBuf>,

    /// Treat a formatter that ran and failed as fatal.
    pub strict: bool,
}

impl Default for FormatSettings {
    fn default() -> Self {
        Self {
            command: "autopep8 -r --in-place".to_string(),
            paths: Vec::new(),
            strict: false,
        }
    }
}

impl FormatSettings {
    /// First word of the command, i.e. the formatter executable.
    pub fn executable(&self) -> Option<&str> {
        self.command.split_whitespace().next()
    }
}

/// Test suite settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestSettings {
    /// Program and base arguments of the test runner.
    pub command: Vec<String>,

    /// Command that exits 0 when the result-caching plugin is installed.
    /// Empty disables the probe.
    pub cache_plugin_probe: Vec<String>,

    /// Flag that reruns previous failures first.
    pub rerun_failures_flag: String,

    /// Flag that disables output capture.
    pub stream_output_flag: String,

    /// Flag that stops after the first failure.
    pub fail_fast_flag: String,
}

impl Default for TestSettings {
    fn default() -> Self {
        Self {
            command: vec!["python".into(), "-m".into(), "pytest".into()],
            cache_plugin_probe: vec!["python".into(), "-c".into(), "import pytest_cache".into()],
            rerun_failures_flag: "--ff".to_string(),
            stream_output_flag: "-s".to_string(),
            fail_fast_flag: "--maxfail=1".to_string(),
        }
    }
}

impl ProjectConfig {
    /// Resolve the package name, falling back to the project directory name.
    pub fn package_name(&self, project_root: &Path) -> Result<String> {
        if let Some(name) = self.package.as_deref().filter(|n| !n.trim().is_empty()) {
            return Ok(name.trim().to_string());
        }

        let root = project_root
            .canonicalize()
            .unwrap_or_else(|_| project_root.to_path_buf());
        root.file_name()
            .and_then(|n| n.to_str())
            .map(String::from)
            .ok_or_else(|| {
                RelgateError::Other(anyhow::anyhow!(
                    "Cannot infer package name from {}; set `package` in {}",
                    project_root.display(),
                    super::CONFIG_FILE_NAME
                ))
            })
    }

    /// Absolute path of the version metadata file.
    pub fn version_file(&self, project_root: &Path) -> Result<PathBuf> {
        let relative = match &self.version_file {
            Some(path) => path.clone(),
            None => PathBuf::from(self.package_name(project_root)?).join("version.py"),
        };
        Ok(project_root.join(relative))
    }

    /// Trees handed to the formatter.
    pub fn format_paths(&self, project_root: &Path) -> Result<Vec<PathBuf>> {
        if !self.format.paths.is_empty() {
            return Ok(self.format.paths.clone());
        }
        Ok(vec![
            PathBuf::from(self.package_name(project_root)?),
            PathBuf::from("tests"),
        ])
    }
}
