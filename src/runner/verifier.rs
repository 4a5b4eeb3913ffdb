//! Sequential check runner.

use crate::checks::{Check, CheckOutcome};
use crate::ui::UserInterface;

use super::report::VerificationReport;

/// Runs a fixed list of checks in order and reports the aggregate.
///
/// Every check runs regardless of earlier failures.
pub struct Verifier<'a> {
    project_name: String,
    directories: Vec<String>,
    checks: Vec<Box<dyn Check + 'a>>,
}

impl<'a> Verifier<'a> {
    /// Create a runner. `directories` feeds the mkdir remediation hint.
    pub fn new(project_name: impl Into<String>, directories: Vec<String>) -> Self {
        Self {
            project_name: project_name.into(),
            directories,
            checks: Vec::new(),
        }
    }

    /// Append a check. Checks run in insertion order.
    pub fn with_check(mut self, check: impl Check + 'a) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Run every check, then print the summary.
    pub fn run(&self, ui: &mut dyn UserInterface) -> VerificationReport {
        ui.show_banner(&format!("{} Setup Verification", self.project_name));

        let mut report = VerificationReport::default();
        for check in &self.checks {
            ui.show_section(check.title());
            let passed = check.run(ui);
            tracing::debug!("Check {} passed: {}", check.name(), passed);
            report.outcomes.push(CheckOutcome {
                name: check.name().to_string(),
                passed,
            });
        }

        report.print_summary(ui, &self.project_name, &self.directories);
        report
    }
}
