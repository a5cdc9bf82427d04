//! Console reporter for unimodularity checks

use super::{CheckReporter, Reporter};
use crate::unimodular::{CheckReport, Violation};

/// Console implementation for unimodularity checks
pub struct ConsoleCheckReporter {
    /// Name the verdict line uses for the matrix
    label: String,
}

impl Default for ConsoleCheckReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleCheckReporter {
    pub fn new() -> Self {
        Self::with_label("A")
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }

    /// One-line verdict, e.g. "A is a totally unimodular matrix according to the 2x2 minor test"
    pub fn verdict_line(&self, report: &CheckReport) -> String {
        format!(
            "{} is {}a totally unimodular matrix according to {}",
            self.label,
            if report.verdict { "" } else { "not " },
            report.method
        )
    }
}

impl Reporter for ConsoleCheckReporter {
    fn report_progress(&self, message: &str, progress: f64) {
        println!("{} ({:.1}%)", message, progress * 100.0);
    }

    fn report_error(&self, error: &str) {
        eprintln!("Error: {}", error);
    }
}

impl CheckReporter for ConsoleCheckReporter {
    fn report_check_start(&self, rows: usize, cols: usize, parallel: bool) {
        println!(
            "Checking {}x{} matrix ({})...",
            rows,
            cols,
            if parallel { "parallel" } else { "sequential" }
        );
    }

    fn report_gate_result(&self, passed: bool) {
        println!(
            "Entry domain check: {}",
            if passed { "passed" } else { "failed" }
        );
    }

    fn report_violation(&self, violation: &Violation) {
        println!("Violation: {}", violation);
    }

    fn report_verdict(&self, report: &CheckReport) {
        println!("Minors checked: {}", report.minors_checked);
        println!("{}", self.verdict_line(report));
    }
}
