//! Environment checks.
//!
//! Each check is a leaf: it inspects one aspect of the environment, prints
//! its own lines through the [`UserInterface`], and reduces everything it
//! found to a single boolean. Failures inside a check are never propagated.
//!
//! - [`python_version`] - interpreter version against a minimum
//! - [`dependencies`] - importability of each configured library
//! - [`directories`] - presence of the project layout (never fails)
//! - [`git`] - repository metadata and identity configuration

pub mod dependencies;
pub mod directories;
pub mod git;
pub mod python_version;

pub use dependencies::DependencyCheck;
pub use directories::DirectoryCheck;
pub use git::{GitCheck, GitCli, GitConfigReader, GIT_METADATA_DIR};
pub use python_version::PythonVersionCheck;

use crate::ui::UserInterface;

/// A single independent verification.
pub trait Check {
    /// Stable identifier, used in logs and the verbose summary.
    fn name(&self) -> &str;

    /// Section title printed before the check runs.
    fn title(&self) -> &str;

    /// Run the check, printing per-item lines. Returns whether it passed.
    fn run(&self, ui: &mut dyn UserInterface) -> bool;
}

/// The recorded result of one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// The check's [`Check::name`].
    pub name: String,
    pub passed: bool,
}
