//! Relgate CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use relgate::cli::{Cli, CommandDispatcher};
use relgate::observability::{self, ObservabilityConfig};
use relgate::ui::{ConsoleUI, UserInterface};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = if cli.debug {
        ObservabilityConfig::debug()
    } else {
        ObservabilityConfig::default()
    };
    observability::init(&config);

    tracing::debug!("Relgate starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let mut ui = ConsoleUI::new();
    let dispatcher = CommandDispatcher::new(project_root);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(u8::try_from(result.exit_code).unwrap_or(1)),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}
