//! Built-in reference matrix
//!
//! A 9x18 node-arc style incidence matrix. Columns are the cells of a 3x6
//! assignment grid; rows 0..3 mark the cell's position within its group of
//! three and rows 3..9 mark which of the six groups it belongs to. Every
//! column has exactly one 1 in each of the two row blocks, so the matrix is
//! the incidence matrix of a bipartite graph and is totally unimodular.

use crate::matrix::Matrix;

pub const REFERENCE_ROWS: usize = 9;
pub const REFERENCE_COLS: usize = 18;

#[rustfmt::skip]
const REFERENCE: [[i64; REFERENCE_COLS]; REFERENCE_ROWS] = [
    [1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0],
    [0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0],
    [0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1],
];

/// The reference incidence matrix
pub fn reference_incidence_matrix() -> Matrix {
    Matrix::from(REFERENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_layout() {
        let m = reference_incidence_matrix();
        assert_eq!(m.dims(), (9, 18));
        assert_eq!(
            m.row(0),
            &[1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0]
        );
        assert_eq!(
            m.row(2),
            &[0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1]
        );
        assert_eq!(
            m.row(3),
            &[1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            m.row(8),
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1]
        );
    }

    #[test]
    fn test_every_column_has_two_ones() {
        let m = reference_incidence_matrix();
        for col in 0..m.cols() {
            let sum: i64 = (0..m.rows()).map(|row| m.get(row, col)).sum();
            assert_eq!(sum, 2);
        }
    }
}
