//! Release command implementation.
//!
//! The `relgate release` command refuses to proceed when the local version
//! is already published or sorts below the published one. It prints nothing
//! on success.

use crate::error::Result;
use crate::gate::ReleaseGate;
use crate::ui::UserInterface;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

/// The release command implementation.
pub struct ReleaseCommand {
    context: ProjectContext,
}

impl ReleaseCommand {
    /// Create a new release command.
    pub fn new(context: ProjectContext) -> Self {
        Self { context }
    }
}

impl Command for ReleaseCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.context.check_gate(&ReleaseGate::new())?;
        Ok(CommandResult::success())
    }
}
