//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands receive a
//! [`ProjectContext`] holding the project root and the configuration with
//! command-line overrides already applied.

pub mod context;
pub mod dispatcher;
pub mod prerelease;
pub mod release;
pub mod requirements;
pub mod version;

pub use context::ProjectContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
