//! Test workflow: probe, assemble arguments, format, run.
//!
//! # Modules
//!
//! - [`args`] - Capability probing and [`TestInvocationArgs`] assembly
//! - [`formatter`] - In-place source formatting (degrades when missing)
//! - [`suite`] - Spawning the test runner and forwarding its exit code

pub mod args;
pub mod formatter;
pub mod suite;

pub use args::{cache_plugin_available, Capabilities, TestInvocationArgs};
pub use formatter::{format_command_line, run_formatter, FormatOutcome};
pub use suite::run_suite;

use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::error::Result;
use crate::version::extract_version;

/// Outcome of a completed test workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestReport {
    /// What happened when formatting was attempted.
    pub formatting: FormatOutcome,
    /// Exit code of the test suite.
    pub exit_code: i32,
}

/// Runs a project's test workflow.
pub struct TestRunner {
    project_root: PathBuf,
    config: ProjectConfig,
    extra_args: Vec<String>,
}

impl TestRunner {
    /// Create a runner for the project at `project_root`.
    pub fn new(project_root: &Path, config: ProjectConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            extra_args: Vec::new(),
        }
    }

    /// Pass `extra_args` to the test runner after the assembled flags.
    pub fn with_extra_args(mut self, extra_args: Vec<String>) -> Self {
        self.extra_args = extra_args;
        self
    }

    /// Run with capabilities probed from the current environment.
    pub fn run(&self) -> Result<TestReport> {
        let capabilities = Capabilities::probe(&self.config.test, &self.project_root);
        self.run_with(capabilities)
    }

    /// Run with explicit capabilities.
    pub fn run_with(&self, capabilities: Capabilities) -> Result<TestReport> {
        let package = self.config.package_name(&self.project_root)?;
        let version = extract_version(&self.config.version_file(&self.project_root)?)?;
        tracing::info!("Testing {} {}", package, version);

        let args = TestInvocationArgs::build(capabilities, &self.config.test);

        let paths = self.config.format_paths(&self.project_root)?;
        let formatting = run_formatter(&self.config.format, &paths, &self.project_root)?;

        let exit_code = run_suite(
            &self.config.test,
            &args,
            &self.extra_args,
            &self.project_root,
        )?;
        Ok(TestReport {
            formatting,
            exit_code,
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::{FormatSettings, TestSettings};
    use crate::error::RelgateError;
    use std::fs;
    use tempfile::TempDir;

    fn project(version_line: &str, test_command: &[&str]) -> (TempDir, ProjectConfig) {
        let temp = TempDir::new().unwrap();
        let pkg = temp.path().join("demo");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("version.py"), version_line).unwrap();

        let config = ProjectConfig {
            package: Some("demo".into()),
            format: FormatSettings {
                command: "relgate-missing-formatter".into(),
                ..Default::default()
            },
            test: TestSettings {
                command: test_command.iter().map(|s| s.to_string()).collect(),
                cache_plugin_probe: Vec::new(),
                ..Default::default()
            },
            ..Default::default()
        };
        (temp, config)
    }

    #[test]
    fn forwards_suite_exit_code_with_missing_formatter() {
        for code in [0, 1, 42] {
            let script = format!("exit {}", code);
            let (temp, config) = project("__version__ = '1.0'\n", &["sh", "-c", script.as_str()]);

            let report = TestRunner::new(temp.path(), config)
                .run_with(Capabilities::default())
                .unwrap();

            assert_eq!(report.exit_code, code);
            assert!(matches!(report.formatting, FormatOutcome::Missing { .. }));
        }
    }

    #[test]
    fn fail_fast_reaches_runner_only_when_interactive() {
        let record = "echo \"$@\" > args.txt";
        for interactive in [false, true] {
            let (temp, config) =
                project("__version__ = '1.0'\n", &["sh", "-c", record, "sh"]);

            TestRunner::new(temp.path(), config)
                .run_with(Capabilities {
                    cache_plugin_available: false,
                    interactive,
                })
                .unwrap();

            let args = fs::read_to_string(temp.path().join("args.txt")).unwrap();
            assert_eq!(args.contains("--maxfail=1"), interactive, "args: {}", args);
        }
    }

    #[test]
    fn extra_args_follow_assembled_flags() {
        let (temp, config) = project(
            "__version__ = '1.0'\n",
            &["sh", "-c", "echo \"$@\" > args.txt", "sh"],
        );

        TestRunner::new(temp.path(), config)
            .with_extra_args(vec!["-k".into(), "smoke".into()])
            .run_with(Capabilities::default())
            .unwrap();

        let args = fs::read_to_string(temp.path().join("args.txt")).unwrap();
        assert_eq!(args.trim(), "-s -k smoke");
    }

    #[test]
    fn missing_version_stops_before_running() {
        let (temp, config) = project("VERSION = 1\n", &["sh", "-c", "touch ran.txt"]);

        let err = TestRunner::new(temp.path(), config)
            .run_with(Capabilities::default())
            .unwrap_err();

        assert!(matches!(err, RelgateError::VersionNotFound { .. }));
        assert!(!temp.path().join("ran.txt").exists());
    }
}
