//! Console UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, RelgateTheme, UserInterface};

/// Writes results to stdout and problems to stderr.
pub struct ConsoleUI {
    out: Term,
    err: Term,
    theme: RelgateTheme,
}

impl ConsoleUI {
    /// Create a console UI, with colors when stderr is a terminal.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            RelgateTheme::new()
        } else {
            RelgateTheme::plain()
        };
        Self::with_theme(theme)
    }

    /// Create a console UI with an explicit theme.
    pub fn with_theme(theme: RelgateTheme) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
        }
    }
}

impl Default for ConsoleUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for ConsoleUI {
    fn message(&mut self, msg: &str) {
        writeln!(self.out, "{}", msg).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_ui_creation() {
        let ui = ConsoleUI::with_theme(RelgateTheme::plain());
        drop(ui);
    }
}
