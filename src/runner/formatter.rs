//! In-place source formatting before tests run.
//!
//! A missing formatter never stops the run. A formatter that runs and fails
//! is reported through [`FormatOutcome`], or as an error when
//! `format.strict` is set. The caller decides how to tell the user.

use std::path::{Path, PathBuf};

use crate::config::FormatSettings;
use crate::error::{RelgateError, Result};
use crate::shell::{execute, executable_on_path, shell_quote, shell_resolves, CommandOptions};

/// Shell exit status for "command not found".
const COMMAND_NOT_FOUND: i32 = 127;

/// What happened when formatting was attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// The formatter ran and succeeded.
    Formatted,
    /// No formatter command is configured.
    Disabled,
    /// The formatter is not installed; the run continues without it.
    Missing { executable: String },
    /// The formatter ran and failed; the run continues (non-strict mode).
    Failed { exit_code: i32 },
}

impl FormatOutcome {
    /// Warning for the user when the run continues in degraded mode.
    pub fn warning(&self) -> Option<String> {
        match self {
            Self::Missing { executable } => Some(format!(
                "{} is not installed so it will not be run",
                executable
            )),
            Self::Failed { exit_code } => Some(format!(
                "Formatter failed with exit code {}; continuing with unformatted sources",
                exit_code
            )),
            Self::Formatted | Self::Disabled => None,
        }
    }
}

/// Whether the formatter can be started, from PATH or the login shell.
fn formatter_available(executable: &str, project_root: &Path) -> bool {
    executable_on_path(executable) || shell_resolves(executable, Some(project_root))
}

/// Full shell command line: the configured command followed by the paths.
pub fn format_command_line(settings: &FormatSettings, paths: &[PathBuf]) -> String {
    std::iter::once(settings.command.trim().to_string())
        .chain(paths.iter().map(|p| shell_quote(&p.to_string_lossy())))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format `paths` in place, working from `project_root`.
pub fn run_formatter(
    settings: &FormatSettings,
    paths: &[PathBuf],
    project_root: &Path,
) -> Result<FormatOutcome> {
    let Some(executable) = settings.executable() else {
        tracing::debug!("No formatter configured");
        return Ok(FormatOutcome::Disabled);
    };

    if !formatter_available(executable, project_root) {
        tracing::debug!("Formatter {} not found", executable);
        return Ok(FormatOutcome::Missing {
            executable: executable.to_string(),
        });
    }

    let command = format_command_line(settings, paths);
    tracing::info!("Formatting sources: {}", command);

    let options = CommandOptions {
        cwd: Some(project_root.to_path_buf()),
        ..Default::default()
    };
    let result = execute(&command, &options)?;

    match result.exit_code {
        0 => Ok(FormatOutcome::Formatted),
        COMMAND_NOT_FOUND => {
            tracing::debug!("Shell could not find {}", executable);
            Ok(FormatOutcome::Missing {
                executable: executable.to_string(),
            })
        }
        code if settings.strict => Err(RelgateError::CommandFailed {
            command,
            code: Some(code),
        }),
        code => Ok(FormatOutcome::Failed { exit_code: code }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_line_appends_quoted_paths() {
        let settings = FormatSettings::default();
        let line = format_command_line(
            &settings,
            &[PathBuf::from("wstools"), PathBuf::from("tests")],
        );
        if cfg!(windows) {
            assert_eq!(line, "autopep8 -r --in-place \"wstools\" \"tests\"");
        } else {
            assert_eq!(line, "autopep8 -r --in-place 'wstools' 'tests'");
        }
    }

    #[test]
    fn degraded_outcomes_carry_a_warning() {
        let missing = FormatOutcome::Missing {
            executable: "autopep8".into(),
        };
        assert_eq!(
            missing.warning().as_deref(),
            Some("autopep8 is not installed so it will not be run")
        );
        assert!(FormatOutcome::Failed { exit_code: 2 }
            .warning()
            .unwrap()
            .contains("exit code 2"));
        assert_eq!(FormatOutcome::Formatted.warning(), None);
        assert_eq!(FormatOutcome::Disabled.warning(), None);
    }

    #[test]
    fn blank_command_is_disabled() {
        let temp = TempDir::new().unwrap();
        let settings = FormatSettings {
            command: String::new(),
            ..Default::default()
        };
        let outcome = run_formatter(&settings, &[], temp.path()).unwrap();
        assert_eq!(outcome, FormatOutcome::Disabled);
    }

    #[test]
    fn missing_formatter_is_not_fatal() {
        let temp = TempDir::new().unwrap();
        let settings = FormatSettings {
            command: "relgate-missing-formatter --in-place".into(),
            strict: true,
            ..Default::default()
        };

        let outcome = run_formatter(&settings, &[PathBuf::from("src")], temp.path()).unwrap();

        assert_eq!(
            outcome,
            FormatOutcome::Missing {
                executable: "relgate-missing-formatter".into()
            }
        );
    }

    #[cfg(unix)]
    fn fake_formatter(dir: &Path, body: &str) -> String {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join("fake-fmt");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.to_string_lossy().to_string()
    }

    #[cfg(unix)]
    #[test]
    fn formatter_runs_in_project_root_with_paths() {
        let temp = TempDir::new().unwrap();
        let exe = fake_formatter(temp.path(), "echo \"$@\" > formatted.txt");
        let settings = FormatSettings {
            command: exe,
            ..Default::default()
        };

        let outcome = run_formatter(
            &settings,
            &[PathBuf::from("pkg"), PathBuf::from("tests")],
            temp.path(),
        )
        .unwrap();

        assert_eq!(outcome, FormatOutcome::Formatted);
        let written = fs::read_to_string(temp.path().join("formatted.txt")).unwrap();
        assert_eq!(written.trim(), "pkg tests");
    }

    #[cfg(unix)]
    #[test]
    fn failing_formatter_warns_by_default() {
        let temp = TempDir::new().unwrap();
        let settings = FormatSettings {
            command: fake_formatter(temp.path(), "exit 2"),
            ..Default::default()
        };

        let outcome = run_formatter(&settings, &[], temp.path()).unwrap();

        assert_eq!(outcome, FormatOutcome::Failed { exit_code: 2 });
    }

    #[cfg(unix)]
    #[test]
    fn failing_formatter_is_fatal_when_strict() {
        let temp = TempDir::new().unwrap();
        let settings = FormatSettings {
            command: fake_formatter(temp.path(), "exit 2"),
            strict: true,
            ..Default::default()
        };

        let err = run_formatter(&settings, &[], temp.path()).unwrap_err();

        assert!(matches!(
            err,
            RelgateError::CommandFailed { code: Some(2), .. }
        ));
    }

    #[cfg(unix)]
    #[test]
    fn exit_127_is_treated_as_missing() {
        let temp = TempDir::new().unwrap();
        let settings = FormatSettings {
            command: fake_formatter(temp.path(), "exit 127"),
            strict: true,
            ..Default::default()
        };

        let outcome = run_formatter(&settings, &[], temp.path()).unwrap();

        assert!(matches!(outcome, FormatOutcome::Missing { .. }));
    }
}
