//! Requirements command implementation.
//!
//! The `relgate requirements` command prints the install requirements, one
//! per line, followed by the development requirements with `--dev`.

use crate::cli::args::RequirementsArgs;
use crate::error::Result;
use crate::requirements::{load_requirements, Requirement};
use crate::ui::UserInterface;

use super::context::ProjectContext;
use super::dispatcher::{Command, CommandResult};

/// The requirements command implementation.
pub struct RequirementsCommand {
    context: ProjectContext,
    args: RequirementsArgs,
}

impl RequirementsCommand {
    /// Create a new requirements command.
    pub fn new(context: ProjectContext, args: RequirementsArgs) -> Self {
        Self { context, args }
    }

    fn collect(&self) -> Result<Vec<Requirement>> {
        let settings = &self.context.config().requirements;
        let root = self.context.project_root();

        let mut files = settings.install.clone();
        if self.args.dev {
            files.extend(settings.dev.iter().cloned());
        }

        let mut requirements = Vec::new();
        for file in &files {
            requirements.extend(load_requirements(&[root, file.as_path()])?);
        }
        Ok(requirements)
    }
}

impl Command for RequirementsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        for requirement in self.collect()? {
            ui.message(&requirement.to_string());
        }
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use crate::error::RelgateError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("requirements.txt"),
            "# runtime\nsix\nrequests >= 2.0\n",
        )
        .unwrap();
        fs::write(
            temp.path().join("requirements-dev.txt"),
            "-r requirements.txt\npytest\n",
        )
        .unwrap();
        temp
    }

    fn run(temp: &TempDir, dev: bool) -> Result<MockUI> {
        let context = ProjectContext::new(temp.path(), ProjectConfig::default());
        let mut ui = MockUI::new();
        RequirementsCommand::new(context, RequirementsArgs { dev }).execute(&mut ui)?;
        Ok(ui)
    }

    #[test]
    fn prints_install_requirements() {
        let temp = project();
        let ui = run(&temp, false).unwrap();
        assert_eq!(ui.messages(), ["six", "requests>=2.0"]);
    }

    #[test]
    fn dev_flag_appends_dev_file() {
        let temp = project();
        let ui = run(&temp, true).unwrap();
        // The dev file includes the install file, so duplicates are kept.
        assert_eq!(
            ui.messages(),
            ["six", "requests>=2.0", "six", "requests>=2.0", "pytest"]
        );
    }

    #[test]
    fn missing_file_is_requirements_error() {
        let temp = TempDir::new().unwrap();
        let err = run(&temp, false).unwrap_err();
        assert!(matches!(err, RelgateError::RequirementsFile { .. }));
    }
}
