//! Pairwise 2x2 minor scan
//!
//! The scan runs the entry-domain gate first, then evaluates every window
//! in the Cartesian product of row pairs and column pairs. It returns on the
//! first failing window. Row pairs are the unit of parallel work: each
//! worker takes one row pair and walks all column pairs for it.

use super::entries;
use super::minor::{is_unit_determinant, minor_2x2};
use super::pairs::ordered_pairs;
use super::types::{CheckMethod, CheckReport, Violation};
use crate::config::CheckConfig;
use crate::domain::IndexPair;
use crate::matrix::Matrix;
use crate::reporters::{CheckReporter, SilentCheckReporter};
use log::{debug, trace, warn};
use rayon::prelude::*;
use std::sync::atomic::{AtomicU64, Ordering};

/// 2x2-minor test with the reference enumeration
///
/// True when every entry is in {-1, 0, 1} and every 2x2 window over ordered
/// row and column pairs has determinant in {-1, 0, 1}. This is a necessary
/// condition for total unimodularity, not a sufficient one: larger square
/// submatrices are never examined. Use
/// [`super::exhaustive::is_totally_unimodular_exhaustive`] for the full test.
pub fn is_totally_unimodular(matrix: &Matrix) -> bool {
    if !entries::entries_in_unit_domain(matrix) {
        return false;
    }

    let (rows, cols) = matrix.dims();
    ordered_pairs(rows).all(|row_pair| {
        ordered_pairs(cols).all(|col_pair| {
            super::minor::minor_in_unit_domain(matrix, row_pair, col_pair)
        })
    })
}

/// 2x2-minor test with explicit configuration, returning a full report
pub fn check_with_config(matrix: &Matrix, config: &CheckConfig) -> CheckReport {
    PairwiseMinorScanner::new(config.clone()).check(matrix)
}

/// 2x2-minor test with explicit configuration and reporter
pub fn check_with_config_and_reporter<R: CheckReporter + ?Sized>(
    matrix: &Matrix,
    config: &CheckConfig,
    reporter: &R,
) -> CheckReport {
    PairwiseMinorScanner::new(config.clone()).check_with_reporter(matrix, reporter)
}

/// Configured scanner for the 2x2-minor test
#[derive(Debug, Clone, Default)]
pub struct PairwiseMinorScanner {
    config: CheckConfig,
}

impl PairwiseMinorScanner {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    pub fn check(&self, matrix: &Matrix) -> CheckReport {
        self.check_with_reporter(matrix, &SilentCheckReporter::new())
    }

    pub fn check_with_reporter<R: CheckReporter + ?Sized>(
        &self,
        matrix: &Matrix,
        reporter: &R,
    ) -> CheckReport {
        let dims = matrix.dims();
        let order = dims.0.min(dims.1).min(2);
        reporter.report_check_start(dims.0, dims.1, self.config.parallel);

        if let Some((row, col, value)) = entries::first_entry_outside_domain(matrix) {
            debug!("Entry gate failed at ({}, {}) = {}", row, col, value);
            reporter.report_gate_result(false);
            let violation = Violation::EntryOutOfDomain { row, col, value };
            reporter.report_violation(&violation);
            let report =
                CheckReport::from_scan(CheckMethod::PairwiseMinors, dims, Some(violation), 0, order);
            reporter.report_verdict(&report);
            return report;
        }
        reporter.report_gate_result(true);

        let row_pairs = self.config.enumeration.pairs(dims.0);
        let col_pairs = self.config.enumeration.pairs(dims.1);
        debug!(
            "Scanning {} row pairs x {} column pairs ({:?})",
            row_pairs.len(),
            col_pairs.len(),
            self.config.enumeration
        );

        let (violation, checked) = if self.config.parallel && row_pairs.len() > 1 {
            self.scan_parallel(matrix, &row_pairs, &col_pairs)
        } else {
            scan_sequential(matrix, &row_pairs, &col_pairs)
        };

        if let Some(v) = &violation {
            debug!("First violation: {}", v);
            reporter.report_violation(v);
        }

        let report =
            CheckReport::from_scan(CheckMethod::PairwiseMinors, dims, violation, checked, order);
        reporter.report_verdict(&report);
        report
    }

    fn scan_parallel(
        &self,
        matrix: &Matrix,
        row_pairs: &[IndexPair],
        col_pairs: &[IndexPair],
    ) -> (Option<Violation>, u64) {
        let checked = AtomicU64::new(0);
        let scan = || {
            row_pairs.par_iter().find_map_first(|&row_pair| {
                let (violation, count) = scan_row_pair(matrix, row_pair, col_pairs);
                checked.fetch_add(count, Ordering::Relaxed);
                violation
            })
        };

        let threads = self.config.effective_threads();
        let violation = match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
        {
            Ok(pool) => {
                debug!("Scanning with {} threads", threads);
                pool.install(scan)
            }
            Err(e) => {
                warn!(
                    "Could not build a {}-thread pool ({}), using the global pool",
                    threads, e
                );
                scan()
            }
        };

        (violation, checked.into_inner())
    }
}

fn scan_sequential(
    matrix: &Matrix,
    row_pairs: &[IndexPair],
    col_pairs: &[IndexPair],
) -> (Option<Violation>, u64) {
    let mut checked = 0;
    for &row_pair in row_pairs {
        let (violation, count) = scan_row_pair(matrix, row_pair, col_pairs);
        checked += count;
        if violation.is_some() {
            return (violation, checked);
        }
    }
    (None, checked)
}

/// Walk every column pair for one row pair; stops at the first bad window
fn scan_row_pair(
    matrix: &Matrix,
    rows: IndexPair,
    col_pairs: &[IndexPair],
) -> (Option<Violation>, u64) {
    trace!("Row pair {}", rows);
    let mut checked = 0;
    for &cols in col_pairs {
        checked += 1;
        let determinant = minor_2x2(matrix, rows, cols);
        if !is_unit_determinant(determinant) {
            return (
                Some(Violation::Minor {
                    rows,
                    cols,
                    determinant,
                }),
                checked,
            );
        }
    }
    (None, checked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unimodular::pairs::PairEnumeration;

    fn sequential() -> CheckConfig {
        CheckConfig::new(1, false)
    }

    #[test]
    fn test_gate_runs_before_scan() {
        let m = Matrix::from([[2, 0], [0, 1]]);
        let report = check_with_config(&m, &sequential());
        assert!(!report.verdict);
        assert!(report.failed_entry_gate());
        assert_eq!(report.minors_checked, 0);
    }

    #[test]
    fn test_first_violation_in_enumeration_order() {
        let m = Matrix::from([[1, 0, 1], [0, 1, 1], [1, -1, 1]]);
        let report = check_with_config(&m, &sequential());
        assert!(!report.verdict);
        // Row pairs (0,1), (0,2), (1,0) pass; (1,2) fails at its fourth column pair
        assert_eq!(
            report.violation,
            Some(Violation::Minor {
                rows: IndexPair::new(1, 2).unwrap(),
                cols: IndexPair::new(1, 2).unwrap(),
                determinant: 2,
            })
        );
        assert_eq!(report.minors_checked, 22);
    }

    #[test]
    fn test_parallel_matches_sequential_witness() {
        let m = Matrix::from([[1, 0, 1], [0, 1, 1], [1, -1, 1]]);
        let seq = check_with_config(&m, &sequential());
        let par = check_with_config(&m, &CheckConfig::new(4, true));
        assert_eq!(seq.verdict, par.verdict);
        assert_eq!(seq.violation, par.violation);
    }

    #[test]
    fn test_counts_all_windows_on_pass() {
        let m = Matrix::identity(3);
        let report = check_with_config(&m, &sequential());
        assert!(report.verdict);
        assert_eq!(report.minors_checked, 36);

        let mut config = sequential();
        config.enumeration = PairEnumeration::Unordered;
        assert_eq!(check_with_config(&m, &config).minors_checked, 9);
    }

    #[test]
    fn test_simple_entry_point_agrees() {
        let m = Matrix::from([[1, -1], [-1, -1]]);
        assert!(!is_totally_unimodular(&m));
        assert!(!check_with_config(&m, &CheckConfig::default()).verdict);
    }
}
