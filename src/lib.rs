//! Asociar: categorical association statistics in pure Rust.
//!
//! Asociar measures the strength of association between two categorical
//! variables: it cross-tabulates two parallel label sequences into a
//! contingency table and derives the chi-squared family of statistics from
//! it (Pearson's chi-squared test of independence, Cramér's V, and the phi
//! coefficient).
//!
//! # Quick Start
//!
//! ```
//! use asociar::prelude::*;
//!
//! let treatment = ["A", "A", "B", "B", "A", "B"];
//! let outcome = ["X", "Y", "X", "Y", "X", "Y"];
//!
//! // Association strength in [0, 1]
//! let v = cramers_v(&treatment, &outcome).unwrap();
//! assert!((v - 1.0 / 3.0).abs() < 1e-9);
//!
//! // Full independence test with p-value
//! let table = ContingencyTable::from_labels(&treatment, &outcome).unwrap();
//! let result = chi2_independence(&table);
//! assert_eq!(result.df, 1);
//! ```
//!
//! # Modules
//!
//! - [`contingency`]: Contingency table construction and marginal totals
//! - [`association`]: Chi-squared independence test and effect sizes
//! - [`error`]: Error types
//!
//! All computations are pure, synchronous, and allocation-local: identical
//! inputs always produce bit-identical output, and concurrent callers need
//! no coordination.

pub mod association;
pub mod contingency;
pub mod error;
pub mod prelude;

pub use association::{
    chi2_independence, chi_squared_statistic, cramers_v, cramers_v_from_table, phi_coefficient,
    ChiSquareResult,
};
pub use contingency::ContingencyTable;
pub use error::{AsociarError, Result};
