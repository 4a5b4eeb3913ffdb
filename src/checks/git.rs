//! Git repository and identity check.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::shell::{self, CommandOptions};
use crate::ui::{hints, UserInterface};

use super::Check;

/// Directory whose presence marks the project root as a repository.
pub const GIT_METADATA_DIR: &str = ".git";

/// Reads a single git configuration value.
pub trait GitConfigReader {
    /// Value of `key`, trimmed. Errors when git is missing or the key is unset.
    fn read(&self, key: &str) -> Result<String>;
}

/// Reads configuration through `git config <key>`.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    cwd: PathBuf,
}

impl GitCli {
    pub fn new(program: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            cwd: cwd.into(),
        }
    }
}

impl GitConfigReader for GitCli {
    fn read(&self, key: &str) -> Result<String> {
        let program = self.program.as_os_str();
        let args = ["config", key];
        let options = CommandOptions {
            cwd: Some(self.cwd.clone()),
            ..Default::default()
        };

        let result = shell::run(program, &args, &options)?
            .into_success(&shell::display_command(program, &args))?;
        Ok(result.stdout.trim().to_string())
    }
}

/// Passes when the root holds `.git` and every identity key is readable.
pub struct GitCheck<'a> {
    root: &'a Path,
    reader: &'a dyn GitConfigReader,
    keys: &'a [String],
}

impl<'a> GitCheck<'a> {
    pub fn new(root: &'a Path, reader: &'a dyn GitConfigReader, keys: &'a [String]) -> Self {
        Self { root, reader, keys }
    }

    fn is_repository(&self) -> bool {
        self.root.join(GIT_METADATA_DIR).is_dir()
    }
}

impl Check for GitCheck<'_> {
    fn name(&self) -> &str {
        "git"
    }

    fn title(&self) -> &str {
        "Checking git setup"
    }

    fn run(&self, ui: &mut dyn UserInterface) -> bool {
        if !self.is_repository() {
            ui.warning("Git repository not initialized");
            for line in hints::init_git() {
                ui.show_hint(line);
            }
            return false;
        }

        ui.success("Git repository initialized");

        for key in self.keys {
            match self.reader.read(key) {
                Ok(value) => ui.success(&format!("Git {}: {}", key, value)),
                Err(e) => {
                    tracing::debug!("git config {} failed: {}", key, e);
                    ui.warning("Git not configured or not in PATH");
                    for line in hints::configure_git() {
                        ui.show_hint(line);
                    }
                    return false;
                }
            }
        }

        true
    }
}
