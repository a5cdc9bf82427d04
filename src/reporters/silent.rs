//! Silent reporter
//!
//! Provides a no-output implementation for testing or when quiet operation is desired.

use super::{CheckReporter, Reporter};
use crate::unimodular::{CheckReport, Violation};

/// Silent implementation for unimodularity checks
#[derive(Default)]
pub struct SilentCheckReporter;

impl SilentCheckReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for SilentCheckReporter {
    fn report_progress(&self, _message: &str, _progress: f64) {}
    fn report_error(&self, _error: &str) {}
}

impl CheckReporter for SilentCheckReporter {
    fn report_check_start(&self, _rows: usize, _cols: usize, _parallel: bool) {}
    fn report_gate_result(&self, _passed: bool) {}
    fn report_violation(&self, _violation: &Violation) {}
    fn report_verdict(&self, _report: &CheckReport) {}
}
