//! Dense integer matrix and the transpose operator
//!
//! Entries are stored row-major in a single `Vec<i64>`. A `Matrix` is never
//! mutated after construction; every check in this crate borrows it, and
//! [`transpose`] builds a new matrix with independent storage.

use crate::error::{MatrixError, Result};
use std::path::Path;
use std::str::FromStr;

/// Rectangular grid of integers with fixed dimensions
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i64>,
}

impl Matrix {
    /// Build a matrix from a list of rows
    ///
    /// Every row must have the same length as the first one. No rows gives a
    /// 0x0 matrix; rows with no entries give an n x 0 matrix.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let row_count = rows.len();

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(MatrixError::RaggedRow {
                row,
                expected: cols,
                found,
            });
        }

        Ok(Self {
            rows: row_count,
            cols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a matrix from row-major storage
    ///
    /// `data` must hold exactly `rows * cols` entries.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<i64>) -> Result<Self> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(MatrixError::DimensionOverflow { rows, cols })?;
        if data.len() != expected {
            return Err(MatrixError::DimensionMismatch {
                rows,
                cols,
                expected,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Matrix filled with zeros
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0; entry_count(rows, cols)],
        }
    }

    /// Square identity matrix
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows `usize`.
    pub fn identity(size: usize) -> Self {
        let mut data = vec![0; entry_count(size, size)];
        for i in 0..size {
            data[i * size + i] = 1;
        }
        Self {
            rows: size,
            cols: size,
            data,
        }
    }

    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    #[inline]
    pub const fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Entry at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds. Callers inside this crate only
    /// generate indices below `rows()` and `cols()`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Entry at (row, col), or `None` when out of bounds
    #[inline]
    pub fn try_get(&self, row: usize, col: usize) -> Option<i64> {
        (row < self.rows && col < self.cols).then(|| self.data[row * self.cols + col])
    }

    /// One row as a slice
    #[inline]
    pub fn row(&self, row: usize) -> &[i64] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Row-major storage
    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.data
    }

    /// All entries as `(row, col, value)` in row-major order
    pub fn iter_entries(&self) -> impl Iterator<Item = (usize, usize, i64)> + '_ {
        let cols = self.cols;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, &value)| (i / cols, i % cols, value))
    }

    /// New matrix with rows and columns swapped; `self` is left untouched
    pub fn transpose(&self) -> Self {
        let data = (0..self.cols)
            .flat_map(|col| (0..self.rows).map(move |row| (row, col)))
            .map(|(row, col)| self.data[row * self.cols + col])
            .collect();

        Self {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Copy of the submatrix at the given row and column indices
    pub fn select(&self, rows: &[usize], cols: &[usize]) -> Self {
        let data = rows
            .iter()
            .flat_map(|&r| cols.iter().map(move |&c| (r, c)))
            .map(|(r, c)| self.get(r, c))
            .collect();

        Self {
            rows: rows.len(),
            cols: cols.len(),
            data,
        }
    }
}

fn entry_count(rows: usize, cols: usize) -> usize {
    rows.checked_mul(cols)
        .unwrap_or_else(|| panic!("{}", MatrixError::DimensionOverflow { rows, cols }))
}

/// Transpose of `matrix` as a new, independent matrix
pub fn transpose(matrix: &Matrix) -> Matrix {
    matrix.transpose()
}

impl TryFrom<Vec<Vec<i64>>> for Matrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<i64>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl<const R: usize, const C: usize> From<[[i64; C]; R]> for Matrix {
    fn from(rows: [[i64; C]; R]) -> Self {
        Self {
            rows: R,
            cols: C,
            data: rows.iter().flatten().copied().collect(),
        }
    }
}

impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.rows {
            let line = self
                .row(r)
                .iter()
                .map(|v| format!("{:>2}", v))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

// ============================================================================
// Text Input
// ============================================================================

/// Parses one row per line
///
/// Entries may be separated by whitespace or commas. Square brackets are
/// ignored so numpy-style literals can be pasted in, as long as each row sits
/// on its own line; a line that closes one bracketed row and opens another is
/// rejected. Blank lines and lines starting with `#` are skipped. Every token
/// must parse as an integer.
impl FromStr for Matrix {
    type Err = MatrixError;

    fn from_str(input: &str) -> Result<Self> {
        let mut rows = Vec::new();

        for (line_idx, raw) in input.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line
                .find(']')
                .is_some_and(|close| line[close..].contains('['))
            {
                return Err(MatrixError::MultipleRowsOnLine { line: line_idx + 1 });
            }

            let row = line
                .split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']'))
                .filter(|token| !token.is_empty())
                .enumerate()
                .map(|(col_idx, token)| {
                    token
                        .parse::<i64>()
                        .map_err(|_| MatrixError::InvalidEntry {
                            line: line_idx + 1,
                            column: col_idx + 1,
                            token: token.to_string(),
                        })
                })
                .collect::<Result<Vec<i64>>>()?;

            // Lines holding only brackets or commas
            if !row.is_empty() {
                rows.push(row);
            }
        }

        Matrix::from_rows(rows)
    }
}

/// Read and parse a matrix file in the text format of [`Matrix::from_str`]
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<Matrix> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| MatrixError::FileReadError {
        file: path.to_path_buf(),
        source,
    })?;
    contents.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_dimensions() {
        let m = Matrix::from_rows(vec![vec![1, 0, -1], vec![0, 1, 1]]).unwrap();
        assert_eq!(m.dims(), (2, 3));
        assert_eq!(m.get(0, 2), -1);
        assert_eq!(m.get(1, 1), 1);
        assert_eq!(m.row(1), &[0, 1, 1]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let err = Matrix::from_rows(vec![vec![1, 0], vec![1]]).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        ));
    }

    #[test]
    fn test_empty_shapes() {
        assert_eq!(Matrix::from_rows(vec![]).unwrap().dims(), (0, 0));
        assert_eq!(
            Matrix::from_rows(vec![vec![], vec![]]).unwrap().dims(),
            (2, 0)
        );
    }

    #[test]
    fn test_transpose_swaps_indices() {
        let m = Matrix::from([[1, 2, 3], [4, 5, 6]]);
        let t = m.transpose();
        assert_eq!(t.dims(), (3, 2));
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(t.get(j, i), m.get(i, j));
            }
        }
        // Input untouched
        assert_eq!(m, Matrix::from([[1, 2, 3], [4, 5, 6]]));
    }

    #[test]
    fn test_try_get_bounds() {
        let m = Matrix::identity(2);
        assert_eq!(m.try_get(1, 1), Some(1));
        assert_eq!(m.try_get(2, 0), None);
        assert_eq!(m.try_get(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        Matrix::identity(2).get(0, 2);
    }

    #[test]
    fn test_parse_numpy_style() {
        let m: Matrix = "[[1, 0, 0,],\n [0, 1, -1,]]".parse().unwrap();
        assert_eq!(m, Matrix::from([[1, 0, 0], [0, 1, -1]]));
    }

    #[test]
    fn test_parse_rejects_one_line_literal() {
        let err = "[[1, 0], [0, 1]]".parse::<Matrix>().unwrap_err();
        assert!(matches!(err, MatrixError::MultipleRowsOnLine { line: 1 }));

        let err = "# header\n[[1, 0],\n [0, 1], [1, 1]]".parse::<Matrix>().unwrap_err();
        assert!(matches!(err, MatrixError::MultipleRowsOnLine { line: 3 }));
    }

    #[test]
    fn test_from_flat_overflowing_dimensions() {
        let err = Matrix::from_flat(usize::MAX, 2, vec![]).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::DimensionOverflow {
                rows: usize::MAX,
                cols: 2
            }
        ));
    }

    #[test]
    #[should_panic(expected = "Dimension overflow")]
    fn test_zeros_overflowing_dimensions_panics() {
        Matrix::zeros(usize::MAX, 2);
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        let err = "1 0\n0 1.5\n".parse::<Matrix>().unwrap_err();
        match err {
            MatrixError::InvalidEntry {
                line,
                column,
                token,
            } => {
                assert_eq!((line, column), (2, 2));
                assert_eq!(token, "1.5");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
