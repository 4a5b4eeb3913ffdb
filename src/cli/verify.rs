//! Verify command implementation.
//!
//! Builds the four checks from configuration and runs them in order.

use std::path::{Path, PathBuf};

use crate::checks::{DependencyCheck, DirectoryCheck, GitCheck, GitCli, PythonVersionCheck};
use crate::config::{load_config, VerifyConfig};
use crate::error::Result;
use crate::python::discover_runtime;
use crate::runner::{VerificationReport, Verifier};
use crate::ui::UserInterface;

use super::args::Cli;

/// The verify command implementation.
pub struct VerifyCommand {
    project_root: PathBuf,
    config: VerifyConfig,
    python: Option<PathBuf>,
}

impl VerifyCommand {
    /// Create a command for an already loaded configuration.
    pub fn new(project_root: &Path, config: VerifyConfig) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            python: None,
        }
    }

    /// Load configuration for `project_root` as selected by the CLI flags.
    pub fn from_cli(project_root: &Path, cli: &Cli) -> Result<Self> {
        let config = load_config(project_root, cli.config.as_deref())?;
        Ok(Self::new(project_root, config).with_python(cli.python.clone()))
    }

    /// Override the configured interpreter.
    pub fn with_python(mut self, python: Option<PathBuf>) -> Self {
        self.python = python;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// The interpreter override in effect: flag, then config.
    pub fn interpreter(&self) -> Option<&Path> {
        self.python
            .as_deref()
            .or(self.config.python.interpreter.as_deref())
    }

    /// Run every check and print the report.
    ///
    /// Check failures are reported, never returned as errors; the caller
    /// maps [`VerificationReport::exit_code`] to the process status.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> VerificationReport {
        let config = &self.config;

        if ui.output_mode().is_verbose() {
            ui.detail(&format!("Project root: {}", self.project_root.display()));
        }

        let runtime = discover_runtime(self.interpreter());
        let git = GitCli::new(&config.git.program, &self.project_root);

        let verifier = Verifier::new(&config.project_name, config.directories.clone())
            .with_check(PythonVersionCheck::new(
                runtime.as_ref(),
                config.python.minimum_version,
            ))
            .with_check(DependencyCheck::new(runtime.as_ref(), &config.dependencies))
            .with_check(DirectoryCheck::new(&self.project_root, &config.directories))
            .with_check(GitCheck::new(
                &self.project_root,
                &git,
                &config.git.config_keys,
            ));

        let report = verifier.run(ui);
        if !report.all_passed() {
            tracing::debug!("Failed checks: {}", report.failed().join(", "));
        }
        report
    }
}
