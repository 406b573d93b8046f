//! Per-invocation project context shared by all commands.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::Cli;
use crate::config::{load_config, ProjectConfig};
use crate::error::Result;
use crate::gate::{run_gate, Gate};
use crate::registry::RegistryClient;
use crate::version::{extract_version, VersionString};

/// Values from the command line that take precedence over `relgate.yml`.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Explicit config file path.
    pub config: Option<PathBuf>,
    /// Package name on the registry.
    pub package: Option<String>,
    /// Registry base URL.
    pub registry_url: Option<String>,
}

impl ConfigOverrides {
    /// Collect overrides from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            package: cli.package.clone(),
            registry_url: cli.registry_url.clone(),
        }
    }

    fn apply(&self, config: &mut ProjectConfig) {
        if let Some(package) = &self.package {
            config.package = Some(package.clone());
        }
        if let Some(url) = &self.registry_url {
            config.registry.url = url.clone();
        }
    }
}

/// Project root plus its resolved configuration.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    project_root: PathBuf,
    config: ProjectConfig,
}

impl ProjectContext {
    /// Wrap an already-resolved configuration.
    pub fn new(project_root: &Path, config: ProjectConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
        }
    }

    /// Load `relgate.yml` for `project_root` and apply CLI overrides.
    pub fn load(project_root: &Path, overrides: &ConfigOverrides) -> Result<Self> {
        let mut config = load_config(project_root, overrides.config.as_deref())?;
        overrides.apply(&mut config);
        Ok(Self::new(project_root, config))
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the resolved configuration.
    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    /// Package name on the registry.
    pub fn package_name(&self) -> Result<String> {
        self.config.package_name(&self.project_root)
    }

    /// Version declared in the package's metadata file.
    pub fn local_version(&self) -> Result<VersionString> {
        let path = self.config.version_file(&self.project_root)?;
        extract_version(&path)
    }

    /// HTTP client for the configured registry.
    pub fn registry_client(&self) -> Result<RegistryClient> {
        RegistryClient::new(
            &self.config.registry.url,
            Duration::from_secs(self.config.registry.timeout_secs),
        )
    }

    /// Compare the local version against the registry with `gate`.
    pub fn check_gate(&self, gate: &dyn Gate) -> Result<()> {
        let package = self.package_name()?;
        let local = self.local_version()?;
        let client = self.registry_client()?;
        run_gate(gate, &client, &package, &local)
    }
}
