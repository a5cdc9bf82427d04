//! Entry-domain gate: every entry must be -1, 0 or 1

use crate::matrix::Matrix;

/// The three values a totally unimodular matrix may contain
pub const UNIT_DOMAIN: [i64; 3] = [-1, 0, 1];

/// True when `value` is one of -1, 0, 1
#[inline]
pub fn is_unit_entry(value: i64) -> bool {
    UNIT_DOMAIN.contains(&value)
}

/// True when every entry of `matrix` is in {-1, 0, 1}
pub fn entries_in_unit_domain(matrix: &Matrix) -> bool {
    matrix.as_slice().iter().all(|&v| is_unit_entry(v))
}

/// First entry outside {-1, 0, 1} in row-major order, as `(row, col, value)`
pub fn first_entry_outside_domain(matrix: &Matrix) -> Option<(usize, usize, i64)> {
    matrix
        .iter_entries()
        .find(|&(_, _, value)| !is_unit_entry(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_entries() {
        assert!(is_unit_entry(-1));
        assert!(is_unit_entry(0));
        assert!(is_unit_entry(1));
        assert!(!is_unit_entry(2));
        assert!(!is_unit_entry(-2));
        assert!(!is_unit_entry(i64::MIN));
    }

    #[test]
    fn test_gate_reports_first_offender() {
        let m = Matrix::from([[1, 0, -1], [0, 2, 3]]);
        assert!(!entries_in_unit_domain(&m));
        assert_eq!(first_entry_outside_domain(&m), Some((1, 1, 2)));
    }

    #[test]
    fn test_gate_passes_on_empty() {
        let m = Matrix::zeros(0, 0);
        assert!(entries_in_unit_domain(&m));
        assert_eq!(first_entry_outside_domain(&m), None);
    }
}
