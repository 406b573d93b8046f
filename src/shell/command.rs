//! Child process execution.

use crate::error::{RelgateError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// Result of running a child process.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code. Signal terminations are mapped to `128 + signal` on Unix.
    pub exit_code: i32,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the process exited with code 0.
    pub success: bool,
}

/// Options for command execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Discard stderr (if false, inherits from parent).
    pub silence_stderr: bool,
}

impl CommandOptions {
    fn apply(&self, cmd: &mut Command) {
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        cmd.stdin(Stdio::inherit());
        cmd.stdout(if self.capture_stdout {
            Stdio::piped()
        } else {
            Stdio::inherit()
        });
        cmd.stderr(if self.silence_stderr {
            Stdio::null()
        } else {
            Stdio::inherit()
        });
    }
}

/// Map an exit status to a process exit code.
///
/// A child killed by a signal has no code; on Unix it is reported as
/// `128 + signal`, the shell convention.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

fn run(mut cmd: Command, command_line: &str, options: &CommandOptions) -> Result<CommandResult> {
    let start = Instant::now();
    options.apply(&mut cmd);

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to spawn `{}`: {}", command_line, e);
        RelgateError::CommandFailed {
            command: command_line.to_string(),
            code: None,
        }
    })?;

    let exit_code = exit_code_of(output.status);
    tracing::debug!(
        "`{}` exited with {} after {:?}",
        command_line,
        exit_code,
        start.elapsed()
    );

    Ok(CommandResult {
        exit_code,
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        duration: start.elapsed(),
        success: output.status.success(),
    })
}

/// Execute a command line through the platform shell.
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let (shell, flag) = shell_invocation();
    let mut cmd = Command::new(shell);
    cmd.arg(flag).arg(command);
    run(cmd, command, options)
}

/// Execute a program directly, without a shell.
pub fn run_program<S: AsRef<str>>(
    program: &str,
    args: &[S],
    options: &CommandOptions,
) -> Result<CommandResult> {
    let mut cmd = Command::new(program);
    cmd.args(args.iter().map(AsRef::as_ref));

    let command_line = std::iter::once(program)
        .chain(args.iter().map(AsRef::as_ref))
        .collect::<Vec<_>>()
        .join(" ");

    run(cmd, &command_line, options)
}

/// Run a program quietly and report whether it exited successfully.
pub fn execute_check<S: AsRef<str>>(program: &str, args: &[S], cwd: Option<&Path>) -> bool {
    let options = CommandOptions {
        cwd: cwd.map(Path::to_path_buf),
        capture_stdout: true,
        silence_stderr: true,
    };

    run_program(program, args, &options)
        .map(|r| r.success)
        .unwrap_or(false)
}

/// Whether the login shell can find `executable`.
///
/// Catches tools that only the user's profile puts on PATH, which a walk of
/// this process's PATH misses. Always false on Windows.
pub fn shell_resolves(executable: &str, cwd: Option<&Path>) -> bool {
    if cfg!(target_os = "windows") {
        return false;
    }

    let options = CommandOptions {
        cwd: cwd.map(Path::to_path_buf),
        capture_stdout: true,
        silence_stderr: true,
    };
    match execute(&format!("command -v {}", shell_quote(executable)), &options) {
        Ok(result) if result.success => {
            tracing::debug!(
                "Login shell resolves {} to {}",
                executable,
                result.stdout.trim()
            );
            true
        }
        _ => false,
    }
}

/// Quote one word for the platform shell.
pub fn shell_quote(word: &str) -> String {
    if cfg!(windows) {
        format!("\"{}\"", word)
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Shell executable and the flag that passes it a command string.
///
/// Login mode on Unix so tools activated in the user's profile are on PATH.
fn shell_invocation() -> (String, &'static str) {
    if cfg!(target_os = "windows") {
        (
            std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string()),
            "/C",
        )
    } else {
        (
            std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string()),
            "-lc",
        )
    }
}
