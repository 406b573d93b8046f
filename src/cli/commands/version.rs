//! Version command implementation.
//!
//! The `relgate version` command prints the version declared in the
//! package's metadata file, without importing it.

use crate::error::Result;
use crate::ui::UserInterface;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

/// The version command implementation.
pub struct VersionCommand {
    context: ProjectContext,
}

impl VersionCommand {
    /// Create a new version command.
    pub fn new(context: ProjectContext) -> Self {
        Self { context }
    }
}

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let version = self.context.local_version()?;
        ui.message(version.as_str());
        Ok(CommandResult::success())
    }
}
