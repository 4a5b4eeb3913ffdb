//! Interpreter version check.

use crate::python::{PythonRuntime, PythonVersion};
use crate::ui::{hints, UserInterface};

use super::Check;

/// Passes when the interpreter's `major.minor` is at least the minimum.
pub struct PythonVersionCheck<'a> {
    runtime: &'a dyn PythonRuntime,
    minimum: PythonVersion,
}

impl<'a> PythonVersionCheck<'a> {
    pub fn new(runtime: &'a dyn PythonRuntime, minimum: PythonVersion) -> Self {
        Self { runtime, minimum }
    }

    fn minimum_label(&self) -> String {
        format!("{}.{}", self.minimum.major, self.minimum.minor)
    }
}

impl Check for PythonVersionCheck<'_> {
    fn name(&self) -> &str {
        "python_version"
    }

    fn title(&self) -> &str {
        "Checking Python version"
    }

    fn run(&self, ui: &mut dyn UserInterface) -> bool {
        let info = match self.runtime.info() {
            Ok(info) => info,
            Err(e) => {
                tracing::debug!("Interpreter query failed: {}", e);
                ui.error(&format!("Could not determine Python version: {}", e));
                ui.show_hint(hints::install_python());
                return false;
            }
        };

        ui.detail(&format!("Current Python version: {}", info.version));
        ui.detail(&format!("Running on: {} {}", info.system, info.release));
        if ui.output_mode().is_verbose() {
            ui.detail(&format!("Interpreter: {}", info.program.display()));
        }

        if info.version.satisfies(&self.minimum) {
            ui.success("Python version is compatible!");
            true
        } else {
            ui.error(&format!(
                "Python version is too old. {}",
                hints::upgrade_python(&self.minimum_label())
            ));
            false
        }
    }
}
