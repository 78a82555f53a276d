//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use asociar::prelude::*;
//! ```

pub use crate::association::{
    chi2_independence, chi_squared_statistic, cramers_v, cramers_v_from_table, phi_coefficient,
    ChiSquareResult,
};
pub use crate::contingency::ContingencyTable;
pub use crate::error::{AsociarError, Result};
