//! Determinant of a single 2x2 window

use super::entries::UNIT_DOMAIN;
use crate::domain::IndexPair;
use crate::matrix::Matrix;

/// Determinant of the window at `rows` x `cols`
///
/// `A[r0][c0] * A[r1][c1] - A[r0][c1] * A[r1][c0]`, computed in `i128` so no
/// pair of `i64` entries can overflow. The window is read straight from the
/// parent matrix.
///
/// # Panics
///
/// Panics if any index is out of bounds for `matrix`.
#[inline]
pub fn minor_2x2(matrix: &Matrix, rows: IndexPair, cols: IndexPair) -> i128 {
    let (r0, r1) = (rows.first(), rows.second());
    let (c0, c1) = (cols.first(), cols.second());

    let a = matrix.get(r0, c0) as i128;
    let b = matrix.get(r0, c1) as i128;
    let c = matrix.get(r1, c0) as i128;
    let d = matrix.get(r1, c1) as i128;

    a * d - b * c
}

/// True when the determinant of the window is -1, 0 or 1
#[inline]
pub fn minor_in_unit_domain(matrix: &Matrix, rows: IndexPair, cols: IndexPair) -> bool {
    is_unit_determinant(minor_2x2(matrix, rows, cols))
}

#[inline]
pub(crate) fn is_unit_determinant(det: i128) -> bool {
    UNIT_DOMAIN.iter().any(|&v| v as i128 == det)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(a: usize, b: usize) -> IndexPair {
        IndexPair::new(a, b).unwrap()
    }

    #[test]
    fn test_minor_values() {
        let identity = Matrix::identity(2);
        assert_eq!(minor_2x2(&identity, pair(0, 1), pair(0, 1)), 1);

        let ones = Matrix::from([[1, 1], [1, 1]]);
        assert_eq!(minor_2x2(&ones, pair(0, 1), pair(0, 1)), 0);

        let bad = Matrix::from([[1, -1], [-1, -1]]);
        assert_eq!(minor_2x2(&bad, pair(0, 1), pair(0, 1)), -2);
        assert!(!minor_in_unit_domain(&bad, pair(0, 1), pair(0, 1)));
    }

    #[test]
    fn test_swapping_one_pair_negates() {
        let m = Matrix::from([[1, 0], [1, 1]]);
        let det = minor_2x2(&m, pair(0, 1), pair(0, 1));
        assert_eq!(minor_2x2(&m, pair(1, 0), pair(0, 1)), -det);
        assert_eq!(minor_2x2(&m, pair(1, 0), pair(1, 0)), det);
    }

    #[test]
    fn test_no_overflow_on_extreme_entries() {
        let m = Matrix::from([[i64::MAX, i64::MIN], [i64::MIN, i64::MAX]]);
        let det = minor_2x2(&m, pair(0, 1), pair(0, 1));
        let expected = (i64::MAX as i128) * (i64::MAX as i128)
            - (i64::MIN as i128) * (i64::MIN as i128);
        assert_eq!(det, expected);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_window_panics() {
        let m = Matrix::identity(2);
        minor_2x2(&m, pair(0, 2), pair(0, 1));
    }
}
