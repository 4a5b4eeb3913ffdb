//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, OutputMode, ProgressSpinner, SpinnerHandle, StatusKind, UserInterface,
    VerifyTheme,
};

/// Terminal UI implementation writing the report to stdout.
///
/// Colors are used only when stdout is a TTY and `NO_COLOR` is unset.
/// Spinners are drawn only on a TTY.
pub struct TerminalUI {
    term: Term,
    theme: VerifyTheme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            VerifyTheme::new()
        } else {
            VerifyTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        writeln!(self.term, "{}", msg).ok();
    }

    fn detail(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn status(&mut self, kind: StatusKind, msg: &str) {
        writeln!(self.term, "{}", kind.format(&self.theme, msg)).ok();
    }

    fn show_banner(&mut self, title: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "\n{}\n", self.theme.format_banner(title)).ok();
        }
    }

    fn show_section(&mut self, title: &str) {
        if self.mode.shows_details() {
            writeln!(self.term, "\n{}", self.theme.format_section(title)).ok();
        }
    }

    fn show_hint(&mut self, hint: &str) {
        writeln!(self.term, "{}", self.theme.hint.apply_to(hint)).ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() && self.term.is_term() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }
}

/// Create the UI used by the binary.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(mode))
}
