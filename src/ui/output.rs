//! Output verbosity.

use serde::{Deserialize, Serialize};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Everything, including interpreter paths and import failure reasons.
    Verbose,
    /// Banner, sections and one line per checked item.
    #[default]
    Normal,
    /// Only problems, the summary and hints.
    ///
    /// Problems are every warning and error line, including soft ones such
    /// as a missing layout directory that does not fail its check.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows diagnostic detail (paths, failure reasons).
    pub fn is_verbose(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows per-item lines, banners and sections.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal)
    }

    /// Pick a mode from the `--verbose` / `--quiet` flags, falling back to
    /// `configured` when neither is set. `--quiet` wins over `--verbose`.
    pub fn from_flags(verbose: bool, quiet: bool, configured: OutputMode) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            configured
        }
    }
}
