//! Test suite execution.

use std::path::Path;

use super::args::TestInvocationArgs;
use crate::config::TestSettings;
use crate::error::{RelgateError, Result};
use crate::shell::{run_program, CommandOptions};

/// Run the test suite with inherited stdio and return its exit code.
///
/// The configured base command comes first, followed by `args`, then any
/// user-supplied `extra` arguments.
///
/// # Errors
///
/// Returns `CommandFailed` if no command is configured or the runner cannot
/// be spawned. A suite that runs and fails is not an error: its exit code is
/// returned.
pub fn run_suite(
    settings: &TestSettings,
    args: &TestInvocationArgs,
    extra: &[String],
    project_root: &Path,
) -> Result<i32> {
    let Some((program, base_args)) = settings.command.split_first() else {
        return Err(RelgateError::CommandFailed {
            command: "(test.command is empty)".to_string(),
            code: None,
        });
    };

    let full_args: Vec<&str> = base_args
        .iter()
        .chain(args.as_slice())
        .chain(extra)
        .map(String::as_str)
        .collect();

    tracing::info!("Running {} {}", program, full_args.join(" "));

    let options = CommandOptions {
        cwd: Some(project_root.to_path_buf()),
        ..Default::default()
    };
    let result = run_program(program, &full_args, &options)?;

    tracing::debug!(
        "Test suite finished with exit code {} in {:?}",
        result.exit_code,
        result.duration
    );
    Ok(result.exit_code)
}
