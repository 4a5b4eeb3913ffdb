//! Visual theme and styling.

use console::{pad_str, Alignment, Style};

use super::icons::StatusKind;

/// Width of banners and section rules, in columns.
pub const REPORT_WIDTH: usize = 70;

/// The report's visual theme.
#[derive(Debug, Clone)]
pub struct VerifyTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for banner and section titles (magenta bold).
    pub header: Style,
    /// Style for box-drawing borders and rules (dim).
    pub border: Style,
    /// Style for remediation hints (magenta dim).
    pub hint: Style,
}

impl Default for VerifyTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl VerifyTheme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().magenta(),
            border: Style::new().dim(),
            hint: Style::new().magenta().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            border: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        let line = format!("{} {}", StatusKind::Success.icon(), msg);
        self.success.apply_to(line).to_string()
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        let line = format!("{} {}", StatusKind::Warning.icon(), msg);
        self.warning.apply_to(line).to_string()
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        let line = format!("{} {}", StatusKind::Failed.icon(), msg);
        self.error.apply_to(line).to_string()
    }

    /// Format the boxed banner shown at the start of a run.
    ///
    /// ```text
    /// ╔════════╗
    /// ║ title  ║
    /// ╚════════╝
    /// ```
    pub fn format_banner(&self, title: &str) -> String {
        let inner = REPORT_WIDTH - 2;
        let rule = "═".repeat(inner);
        let centered = pad_str(title, inner, Alignment::Center, Some("…"));
        format!(
            "{}\n{}{}{}\n{}",
            self.border.apply_to(format!("╔{}╗", rule)),
            self.border.apply_to("║"),
            self.header.apply_to(centered),
            self.border.apply_to("║"),
            self.border.apply_to(format!("╚{}╝", rule)),
        )
    }

    /// Format a section heading: the upper-cased title between two rules.
    pub fn format_section(&self, title: &str) -> String {
        let rule = "=".repeat(REPORT_WIDTH);
        format!(
            "{}\n{}\n{}",
            self.border.apply_to(&rule),
            self.header.apply_to(title.to_uppercase()),
            self.border.apply_to(&rule),
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::measure_text_width;

    #[test]
    fn theme_formats_success() {
        let theme = VerifyTheme::plain();
        let msg = theme.format_success("Complete");
        assert_eq!(msg, "✓ Complete");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = VerifyTheme::plain();
        assert_eq!(theme.format_warning("Caution"), "⚠ Caution");
    }

    #[test]
    fn theme_formats_error() {
        let theme = VerifyTheme::plain();
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn banner_lines_share_width() {
        let theme = VerifyTheme::plain();
        let banner = theme.format_banner("ReCom Setup Verification");
        let lines: Vec<&str> = banner.lines().collect();
        assert_eq!(lines.len(), 3);
        for line in &lines {
            assert_eq!(measure_text_width(line), REPORT_WIDTH, "line {:?}", line);
        }
        assert!(lines[0].starts_with('╔'));
        assert!(lines[1].contains("ReCom Setup Verification"));
        assert!(lines[2].ends_with('╝'));
    }

    #[test]
    fn banner_truncates_long_titles() {
        let theme = VerifyTheme::plain();
        let banner = theme.format_banner(&"x".repeat(200));
        for line in banner.lines() {
            assert_eq!(measure_text_width(line), REPORT_WIDTH);
        }
    }

    #[test]
    fn section_uppercases_title_between_rules() {
        let theme = VerifyTheme::plain();
        let section = theme.format_section("Checking git setup");
        let lines: Vec<&str> = section.lines().collect();
        assert_eq!(lines[0], "=".repeat(REPORT_WIDTH));
        assert_eq!(lines[1], "CHECKING GIT SETUP");
        assert_eq!(lines[2], "=".repeat(REPORT_WIDTH));
    }

    #[test]
    fn default_theme_creates_without_panic() {
        let theme = VerifyTheme::new();
        let _ = theme.format_success("test");
        let _ = theme.format_banner("test");
    }
}
