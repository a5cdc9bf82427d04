//! Total unimodularity checks for integer matrices
//!
//! A matrix is totally unimodular (TU) when every square submatrix has a
//! determinant in {-1, 0, 1}. The default check in this crate is the
//! 2x2-minor test: an entry-domain gate followed by a scan of every 2x2
//! window. That test is a necessary condition only; matrices larger than
//! 2x2 can pass it without being TU. [`unimodular::exhaustive`] implements
//! the full definition for small matrices.

pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod matrix;
pub mod reference;
pub mod reporters;
pub mod unimodular;

pub use args::parse_args;
pub use config::CheckConfig;
pub use domain::IndexPair;
pub use error::{MatrixError, Result};
pub use matrix::{transpose, Matrix};
pub use unimodular::{is_totally_unimodular, CheckReport, Violation};
