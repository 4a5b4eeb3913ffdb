//! Report output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing the report to stdout
//! - [`MockUI`] capturing output for tests
//! - Theme, status icons, spinners and remediation text
//!
//! # Example
//!
//! ```
//! use recom_verify::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.show_section("Checking git setup");
//! ui.success("Git repository initialized");
//! assert!(ui.has_success("initialized"));
//! ```

pub mod hints;
pub mod icons;
pub mod mock;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use mock::{MockSpinner, MockUI};
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, VerifyTheme, REPORT_WIDTH};

/// Trait for report output.
///
/// Checks write through this trait so tests can capture their output.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a plain line, in every mode.
    fn message(&mut self, msg: &str);

    /// Display a plain informational line, hidden in quiet mode.
    fn detail(&mut self, msg: &str);

    /// Display a per-item success line, hidden in quiet mode.
    fn success(&mut self, msg: &str);

    /// Display a warning.
    fn warning(&mut self, msg: &str);

    /// Display an error.
    fn error(&mut self, msg: &str);

    /// Display a status line that is shown in every mode.
    fn status(&mut self, kind: StatusKind, msg: &str);

    /// Show the boxed banner.
    fn show_banner(&mut self, title: &str);

    /// Show a section heading.
    fn show_section(&mut self, title: &str);

    /// Show a remediation hint.
    fn show_hint(&mut self, hint: &str);

    /// Start a transient spinner for a blocking operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;
}

/// Handle for controlling a spinner.
pub trait SpinnerHandle {
    /// Stop and erase the spinner.
    fn finish_and_clear(&mut self);
}
