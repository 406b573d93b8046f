//! User-facing output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`ConsoleUI`] for real terminals and CI logs
//! - [`MockUI`] for asserting on output in tests
//!
//! Diagnostics go through `tracing`; this layer only carries results meant
//! for the person or script that invoked the command.
//!
//! # Example
//!
//! ```
//! use relgate::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("1.2.3");
//! assert_eq!(ui.messages(), ["1.2.3"]);
//! ```

pub mod console_ui;
pub mod mock;
pub mod theme;

pub use console_ui::ConsoleUI;
pub use mock::MockUI;
pub use theme::{should_use_colors, RelgateTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a plain line on standard output.
    fn message(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);
}
