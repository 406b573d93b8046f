//! Command-line interface for relgate.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, RequirementsArgs, TestArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, ProjectContext};
