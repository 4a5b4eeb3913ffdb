//! Aggregate verification result.

use crate::checks::CheckOutcome;
use crate::ui::{hints, StatusKind, UserInterface};

/// Outcomes of one verification run, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl VerificationReport {
    /// Whether every check passed. An empty report passes.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Process exit status: 0 when every check passed, 1 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// Names of the checks that failed.
    pub fn failed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|o| !o.passed)
            .map(|o| o.name.as_str())
            .collect()
    }

    /// Print the summary section followed by next steps or common fixes.
    pub fn print_summary(
        &self,
        ui: &mut dyn UserInterface,
        project_name: &str,
        directories: &[String],
    ) {
        ui.show_section("Verification summary");

        if ui.output_mode().is_verbose() {
            for outcome in &self.outcomes {
                ui.status(StatusKind::from_passed(outcome.passed), &outcome.name);
            }
        }

        if self.all_passed() {
            ui.status(
                StatusKind::Success,
                "All checks passed! Your environment is ready.",
            );
            ui.show_section("Next steps");
            ui.message(&hints::next_steps(project_name));
        } else {
            ui.status(
                StatusKind::Warning,
                "Some checks failed. Please review the output above.",
            );
            ui.message("");
            ui.message("Common fixes:");
            for fix in hints::common_fixes(directories) {
                ui.show_hint(&fix);
            }
        }
    }
}
