//! Status icons shared by every check and the summary.

use super::theme::VerifyTheme;

/// Outcome kinds shown next to report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Check or item passed.
    Success,
    /// Check or item failed.
    Failed,
    /// Informational problem that does not fail the run.
    Warning,
}

impl StatusKind {
    /// Pick `Success` or `Failed` from a check outcome.
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Self::Success
        } else {
            Self::Failed
        }
    }

    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed => "✗",
            Self::Warning => "⚠",
        }
    }

    /// Format a status line with the theme's style for this kind.
    pub fn format(self, theme: &VerifyTheme, msg: &str) -> String {
        match self {
            Self::Success => theme.format_success(msg),
            Self::Failed => theme.format_error(msg),
            Self::Warning => theme.format_warning(msg),
        }
    }
}
