//! Result types for unimodularity checks

use crate::domain::IndexPair;
use std::fmt;

/// Why a matrix failed a check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// An entry outside {-1, 0, 1}
    EntryOutOfDomain { row: usize, col: usize, value: i64 },
    /// A 2x2 window whose determinant is outside {-1, 0, 1}
    Minor {
        rows: IndexPair,
        cols: IndexPair,
        determinant: i128,
    },
    /// A square submatrix of any order whose determinant is outside {-1, 0, 1}
    ///
    /// `determinant` is `None` when elimination overflowed `i128`.
    Submatrix {
        rows: Vec<usize>,
        cols: Vec<usize>,
        determinant: Option<i128>,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EntryOutOfDomain { row, col, value } => {
                write!(f, "entry ({}, {}) = {} is not in {{-1, 0, 1}}", row, col, value)
            }
            Violation::Minor {
                rows,
                cols,
                determinant,
            } => write!(
                f,
                "2x2 minor at rows {} cols {} has determinant {}",
                rows, cols, determinant
            ),
            Violation::Submatrix {
                rows,
                cols,
                determinant: Some(det),
            } => write!(
                f,
                "{}x{} minor at rows {:?} cols {:?} has determinant {}",
                rows.len(),
                cols.len(),
                rows,
                cols,
                det
            ),
            Violation::Submatrix {
                rows,
                cols,
                determinant: None,
            } => write!(
                f,
                "{}x{} minor at rows {:?} cols {:?} overflows i128",
                rows.len(),
                cols.len(),
                rows,
                cols
            ),
        }
    }
}

/// Which test produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMethod {
    /// Entry gate plus every 2x2 window; necessary but not sufficient
    PairwiseMinors,
    /// Entry gate plus every square submatrix up to `order_checked`
    Exhaustive,
}

impl fmt::Display for CheckMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckMethod::PairwiseMinors => write!(f, "the 2x2 minor test"),
            CheckMethod::Exhaustive => write!(f, "the exhaustive minor test"),
        }
    }
}

/// Outcome of a check over one matrix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub method: CheckMethod,
    pub rows: usize,
    pub cols: usize,
    /// True when no violation was found
    pub verdict: bool,
    pub violation: Option<Violation>,
    /// Square submatrices whose determinant was evaluated
    ///
    /// In parallel mode workers may finish a few extra windows after the
    /// first failure, so this can exceed the sequential count.
    pub minors_checked: u64,
    /// Largest submatrix order examined (2 for the pairwise scan)
    pub order_checked: usize,
}

impl CheckReport {
    pub(crate) fn from_scan(
        method: CheckMethod,
        (rows, cols): (usize, usize),
        violation: Option<Violation>,
        minors_checked: u64,
        order_checked: usize,
    ) -> Self {
        Self {
            method,
            rows,
            cols,
            verdict: violation.is_none(),
            violation,
            minors_checked,
            order_checked,
        }
    }

    /// True when the entry-domain gate rejected the matrix
    pub fn failed_entry_gate(&self) -> bool {
        matches!(self.violation, Some(Violation::EntryOutOfDomain { .. }))
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix: {}x{}", self.rows, self.cols)?;
        writeln!(f, "Minors checked: {}", self.minors_checked)?;
        match &self.violation {
            Some(v) => writeln!(f, "Violation: {}", v),
            None => writeln!(f, "No violation found up to order {}", self.order_checked),
        }
    }
}
