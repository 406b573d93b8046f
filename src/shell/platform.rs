//! Terminal detection.

/// Whether a person is watching: stdout is a terminal.
///
/// CI variables are not consulted. A CI job that allocates a terminal is
/// treated as interactive.
pub fn is_interactive_terminal() -> bool {
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ci_variables_do_not_change_interactivity() {
        let expected = console::Term::stdout().is_term();
        std::env::set_var("CI", "true");
        std::env::set_var("GITHUB_ACTIONS", "true");
        assert_eq!(is_interactive_terminal(), expected);
    }
}
