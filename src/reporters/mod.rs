//! Progress and output reporting for unimodularity checks
//!
//! The checks call into a reporter at fixed points (start, gate, first
//! violation, verdict, plus per-order progress in the exhaustive test) so
//! that the checks themselves never print. The console
//! reporter is what the `tucheck` binary uses; the silent one backs the plain
//! library entry points and tests.

mod console;
mod silent;

pub use console::ConsoleCheckReporter;
pub use silent::SilentCheckReporter;

use crate::unimodular::{CheckReport, Violation};

/// Events shared by every reporter, whichever check is running
pub trait Reporter: Send + Sync {
    /// Progress of a long check, `progress` in `0.0..=1.0`
    fn report_progress(&self, message: &str, progress: f64);

    /// Input or setup failure that stops the check before it starts
    fn report_error(&self, error: &str);
}

/// Trait for reporting the stages of a unimodularity check
pub trait CheckReporter: Reporter {
    /// Report the matrix shape and whether the scan runs in parallel
    fn report_check_start(&self, rows: usize, cols: usize, parallel: bool);

    /// Report whether every entry is in {-1, 0, 1}
    fn report_gate_result(&self, passed: bool);

    /// Report the violation that decided a failing check
    fn report_violation(&self, violation: &Violation);

    /// Report the final verdict
    fn report_verdict(&self, report: &CheckReport);
}
