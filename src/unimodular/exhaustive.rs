//! Exhaustive total unimodularity test
//!
//! Checks the definition directly: every k x k submatrix, for every k up to
//! `min(rows, cols)`, must have determinant in {-1, 0, 1}. Determinants use
//! fraction-free (Bareiss) elimination in `i128`, so they are exact.
//!
//! The number of submatrices grows as the sum of C(n, k) * C(m, k); this is
//! only practical for small matrices. `ExhaustiveConfig::max_order` caps k.

use super::entries;
use super::minor::is_unit_determinant;
use super::types::{CheckMethod, CheckReport, Violation};
use crate::matrix::Matrix;
use crate::reporters::{CheckReporter, SilentCheckReporter};
use log::{debug, warn};

/// Largest order for which Bareiss elimination over {-1, 0, 1} entries
/// provably stays inside `i128` (k^k < 2^127)
pub const MAX_EXACT_ORDER: usize = 26;

/// Configuration for the exhaustive test
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveConfig {
    /// Largest submatrix order to check (None = min(rows, cols))
    pub max_order: Option<usize>,
}

impl ExhaustiveConfig {
    pub fn new(max_order: Option<usize>) -> Self {
        Self { max_order }
    }
}

/// True when every square submatrix has determinant in {-1, 0, 1}
pub fn is_totally_unimodular_exhaustive(matrix: &Matrix) -> bool {
    check_exhaustive(matrix, &ExhaustiveConfig::default()).verdict
}

/// Exhaustive test returning a report with the first failing submatrix
///
/// Orders are checked smallest first, and subsets in lexicographic order
/// within an order, so the reported violation is a smallest one.
pub fn check_exhaustive(matrix: &Matrix, config: &ExhaustiveConfig) -> CheckReport {
    check_exhaustive_with_reporter(matrix, config, &SilentCheckReporter::new())
}

/// Exhaustive test with stage and per-order progress reporting
///
/// Progress is reported once each order k has been cleared, as the share of
/// orders `2..=order` done so far.
pub fn check_exhaustive_with_reporter<R: CheckReporter + ?Sized>(
    matrix: &Matrix,
    config: &ExhaustiveConfig,
    reporter: &R,
) -> CheckReport {
    let dims = matrix.dims();
    reporter.report_check_start(dims.0, dims.1, false);
    let report = run_exhaustive(matrix, config, reporter);
    if let Some(violation) = &report.violation {
        reporter.report_violation(violation);
    }
    reporter.report_verdict(&report);
    report
}

fn run_exhaustive<R: CheckReporter + ?Sized>(
    matrix: &Matrix,
    config: &ExhaustiveConfig,
    reporter: &R,
) -> CheckReport {
    let dims = matrix.dims();
    let full_order = dims.0.min(dims.1);
    let mut order = config.max_order.map_or(full_order, |k| k.min(full_order));
    if order > MAX_EXACT_ORDER {
        warn!(
            "Capping exhaustive check at order {} (requested {})",
            MAX_EXACT_ORDER, order
        );
        order = MAX_EXACT_ORDER;
    }

    let outside = entries::first_entry_outside_domain(matrix);
    reporter.report_gate_result(outside.is_none());
    if let Some((row, col, value)) = outside {
        debug!("Entry gate failed at ({}, {}) = {}", row, col, value);
        return CheckReport::from_scan(
            CheckMethod::Exhaustive,
            dims,
            Some(Violation::EntryOutOfDomain { row, col, value }),
            0,
            order,
        );
    }

    // Order 1 is the entry gate itself
    let mut checked = (dims.0 * dims.1) as u64;
    for k in 2..=order {
        debug!("Checking all {}x{} submatrices", k, k);
        for rows in Combinations::new(dims.0, k) {
            for cols in Combinations::new(dims.1, k) {
                checked += 1;
                let det = determinant(&matrix.select(&rows, &cols));
                if !det.is_some_and(is_unit_determinant) {
                    return CheckReport::from_scan(
                        CheckMethod::Exhaustive,
                        dims,
                        Some(Violation::Submatrix {
                            rows,
                            cols,
                            determinant: det,
                        }),
                        checked,
                        order,
                    );
                }
            }
        }
        reporter.report_progress(
            &format!("All {}x{} submatrices passed", k, k),
            (k - 1) as f64 / (order - 1) as f64,
        );
    }

    CheckReport::from_scan(CheckMethod::Exhaustive, dims, None, checked, order)
}

/// Exact determinant of a square matrix
///
/// Returns `None` for non-square input or when an intermediate value
/// overflows `i128`. The empty matrix has determinant 1.
pub fn determinant(matrix: &Matrix) -> Option<i128> {
    let (n, cols) = matrix.dims();
    if n != cols {
        return None;
    }
    if n == 0 {
        return Some(1);
    }

    let mut a: Vec<i128> = matrix.as_slice().iter().map(|&v| v as i128).collect();
    let mut sign = 1i128;
    let mut prev = 1i128;

    for k in 0..n - 1 {
        if a[k * n + k] == 0 {
            let Some(swap_row) = (k + 1..n).find(|&i| a[i * n + k] != 0) else {
                return Some(0);
            };
            for j in 0..n {
                a.swap(k * n + j, swap_row * n + j);
            }
            sign = -sign;
        }

        let pivot = a[k * n + k];
        for i in k + 1..n {
            for j in k + 1..n {
                let lhs = a[i * n + j].checked_mul(pivot)?;
                let rhs = a[i * n + k].checked_mul(a[k * n + j])?;
                // Exact by Sylvester's identity
                a[i * n + j] = lhs.checked_sub(rhs)? / prev;
            }
        }
        prev = pivot;
    }

    Some(sign * a[n * n - 1])
}

/// k-element subsets of `0..n` in lexicographic order
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    current: Option<Vec<usize>>,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            current: (k <= n).then(|| (0..k).collect()),
        }
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        let current = self.current.take()?;
        let k = current.len();

        // Rightmost position that can still move up
        let mut next = current.clone();
        if let Some(i) = (0..k).rev().find(|&i| next[i] < self.n - k + i) {
            next[i] += 1;
            for j in i + 1..k {
                next[j] = next[j - 1] + 1;
            }
            self.current = Some(next);
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combinations() {
        let all: Vec<_> = Combinations::new(4, 2).collect();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3]
            ]
        );
        assert_eq!(Combinations::new(5, 3).count(), 10);
        assert_eq!(Combinations::new(3, 0).collect::<Vec<_>>(), vec![vec![]]);
        assert_eq!(Combinations::new(2, 3).count(), 0);
    }

    #[test]
    fn test_determinant_known_values() {
        assert_eq!(determinant(&Matrix::identity(4)), Some(1));
        assert_eq!(determinant(&Matrix::from([[1, -1], [-1, -1]])), Some(-2));
        assert_eq!(
            determinant(&Matrix::from([[1, 1, 0], [0, 1, 1], [1, 0, 1]])),
            Some(2)
        );
        // Needs a row swap
        assert_eq!(
            determinant(&Matrix::from([[0, 1, 0], [1, 0, 0], [0, 0, 1]])),
            Some(-1)
        );
        assert_eq!(determinant(&Matrix::from([[1, 2], [2, 4]])), Some(0));
        assert_eq!(determinant(&Matrix::zeros(2, 3)), None);
        assert_eq!(determinant(&Matrix::zeros(0, 0)), Some(1));
    }

    #[test]
    fn test_odd_cycle_passes_pairwise_but_not_exhaustive() {
        // Incidence matrix of a triangle: every 2x2 minor is fine, the 3x3 one is 2
        let m = Matrix::from([[1, 1, 0], [0, 1, 1], [1, 0, 1]]);
        assert!(crate::unimodular::is_totally_unimodular(&m));

        let report = check_exhaustive(&m, &ExhaustiveConfig::default());
        assert!(!report.verdict);
        assert_eq!(
            report.violation,
            Some(Violation::Submatrix {
                rows: vec![0, 1, 2],
                cols: vec![0, 1, 2],
                determinant: Some(2),
            })
        );
    }

    #[test]
    fn test_max_order_limits_search() {
        let m = Matrix::from([[1, 1, 0], [0, 1, 1], [1, 0, 1]]);
        let report = check_exhaustive(&m, &ExhaustiveConfig::new(Some(2)));
        assert!(report.verdict);
        assert_eq!(report.order_checked, 2);
        // 9 entries + 3 * 3 windows of order 2
        assert_eq!(report.minors_checked, 18);
    }
}
