//! Child process execution and environment probing.

pub mod command;
pub mod platform;
pub mod probe;

pub use command::{
    execute, execute_check, run_program, shell_quote, shell_resolves, CommandOptions,
    CommandResult,
};
pub use platform::is_interactive_terminal;
pub use probe::{executable_on_path, is_executable, parse_system_path, resolve_tool_path};
