//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! output for later assertion.
//!
//! # Example
//!
//! ```
//! use recom_verify::ui::{MockUI, StatusKind, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting");
//! ui.status(StatusKind::Success, "All checks passed!");
//!
//! assert!(ui.messages().contains(&"Starting".to_string()));
//! assert!(ui.has_status(StatusKind::Success, "All checks passed"));
//! ```

use super::{OutputMode, SpinnerHandle, StatusKind, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures every call regardless of output mode, so assertions do not
/// depend on verbosity filtering. `output_mode()` still reports the
/// configured mode so code under test can branch on it.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    details: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    statuses: Vec<(StatusKind, String)>,
    banners: Vec<String>,
    sections: Vec<String>,
    hints: Vec<String>,
    spinners: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Get all captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured detail lines.
    pub fn details(&self) -> &[String] {
        &self.details
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured status lines.
    pub fn statuses(&self) -> &[(StatusKind, String)] {
        &self.statuses
    }

    /// Get all captured banners.
    pub fn banners(&self) -> &[String] {
        &self.banners
    }

    /// Get all captured section titles.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific detail line was shown.
    pub fn has_detail(&self, msg: &str) -> bool {
        self.details.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a status line of `kind` containing `msg` was shown.
    pub fn has_status(&self, kind: StatusKind, msg: &str) -> bool {
        self.statuses
            .iter()
            .any(|(k, m)| *k == kind && m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }

    /// Check if a section with this title was shown.
    pub fn has_section(&self, title: &str) -> bool {
        self.sections.iter().any(|s| s == title)
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn detail(&mut self, msg: &str) {
        self.details.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        self.statuses.push((kind, msg.to_string()));
    }

    fn show_banner(&mut self, title: &str) {
        self.banners.push(title.to_string());
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner::new())
    }
}

/// Mock spinner for testing.
#[derive(Debug, Default)]
pub struct MockSpinner {
    finished: bool,
}

impl MockSpinner {
    /// Create a new mock spinner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the spinner was finished.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl SpinnerHandle for MockSpinner {
    fn finish_and_clear(&mut self) {
        self.finished = true;
    }
}
