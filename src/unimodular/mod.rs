//! Total unimodularity checks
//!
//! The default test is the 2x2-minor scan:
//! 1. Gate: every entry must be -1, 0 or 1
//! 2. Scan: every 2x2 window over pairs of rows and pairs of columns must
//!    have determinant -1, 0 or 1
//!
//! Passing the scan is necessary for total unimodularity but not sufficient.
//! The [`exhaustive`] module checks square submatrices of every order.

pub mod entries;
pub mod exhaustive;
pub mod minor;
pub mod pairs;
mod scanner;
mod types;

pub use entries::{entries_in_unit_domain, first_entry_outside_domain, is_unit_entry};
pub use exhaustive::{
    check_exhaustive, check_exhaustive_with_reporter, is_totally_unimodular_exhaustive,
    ExhaustiveConfig,
};
pub use minor::{minor_2x2, minor_in_unit_domain};
pub use pairs::{ordered_pairs, unordered_pairs, PairEnumeration};
pub use scanner::{
    check_with_config, check_with_config_and_reporter, is_totally_unimodular,
    PairwiseMinorScanner,
};
pub use types::{CheckMethod, CheckReport, Violation};
