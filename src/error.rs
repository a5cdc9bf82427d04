//! Error types for matrix construction and loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`crate::Matrix`] from caller input
///
/// A matrix that fails the unimodularity check is not an error; these only
/// cover input that cannot be interpreted as a rectangular integer grid.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// A row has a different length than the first row
    #[error("Ragged matrix: row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Flat storage does not match the declared dimensions
    #[error("Dimension mismatch: {rows}x{cols} matrix needs {expected} entries, got {found}")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    /// `rows * cols` does not fit in `usize`
    #[error("Dimension overflow: a {rows}x{cols} matrix has more entries than usize can count")]
    DimensionOverflow { rows: usize, cols: usize },

    /// A token in textual input is not an integer
    #[error("Invalid entry {token:?} at line {line}, column {column}: not an integer")]
    InvalidEntry {
        line: usize,
        column: usize,
        token: String,
    },

    /// One line of textual input holds several bracketed rows
    #[error("Line {line} holds more than one bracketed row; put one row per line")]
    MultipleRowsOnLine { line: usize },

    /// Failed to read a matrix file
    #[error("Failed to read matrix file {file}: {source}")]
    FileReadError {
        file: PathBuf,
        source: std::io::Error,
    },
}

/// Type alias for Result with MatrixError
pub type Result<T> = std::result::Result<T, MatrixError>;
