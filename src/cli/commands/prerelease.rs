//! Prerelease command implementation.
//!
//! The `relgate prerelease` command passes only when the local version is
//! strictly ahead of the published one.

use crate::error::Result;
use crate::gate::PreReleaseGate;
use crate::ui::UserInterface;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

/// The prerelease command implementation.
pub struct PreReleaseCommand {
    context: ProjectContext,
}

impl PreReleaseCommand {
    /// Create a new prerelease command.
    pub fn new(context: ProjectContext) -> Self {
        Self { context }
    }
}

impl Command for PreReleaseCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.context.check_gate(&PreReleaseGate::new())?;
        Ok(CommandResult::success())
    }
}
