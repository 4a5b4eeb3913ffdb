//! Library import check.

use crate::config::DependencySpec;
use crate::python::{ModuleStatus, PythonRuntime};
use crate::ui::UserInterface;

use super::Check;

/// Passes when every configured library imports.
///
/// Each library is probed independently and reported on its own line;
/// one failure does not stop the remaining probes.
pub struct DependencyCheck<'a> {
    runtime: &'a dyn PythonRuntime,
    dependencies: &'a [DependencySpec],
}

impl<'a> DependencyCheck<'a> {
    pub fn new(runtime: &'a dyn PythonRuntime, dependencies: &'a [DependencySpec]) -> Self {
        Self {
            runtime,
            dependencies,
        }
    }

    fn probe(&self, ui: &mut dyn UserInterface, dependency: &DependencySpec) -> ModuleStatus {
        let mut spinner = ui.start_spinner(&format!("Importing {}...", dependency.name));
        let status = self.runtime.probe_module(dependency.import_name());
        spinner.finish_and_clear();
        status
    }
}

impl Check for DependencyCheck<'_> {
    fn name(&self) -> &str {
        "dependencies"
    }

    fn title(&self) -> &str {
        "Checking required packages"
    }

    fn run(&self, ui: &mut dyn UserInterface) -> bool {
        let mut all_found = true;

        for dependency in self.dependencies {
            match self.probe(ui, dependency) {
                ModuleStatus::Found { version } => {
                    ui.success(&format!("{:20} (version: {})", dependency.name, version));
                }
                ModuleStatus::Missing { reason } => {
                    all_found = false;
                    ui.error(&format!("{:20} NOT FOUND", dependency.name));
                    if let Some(reason) = reason {
                        if ui.output_mode().is_verbose() {
                            ui.detail(&format!("  {}", reason));
                        }
                    }
                }
            }
        }

        all_found
    }
}
