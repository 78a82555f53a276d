//! Chi-squared independence testing and association strength measures.
//!
//! Implements Pearson's chi-squared test of independence over a contingency
//! table, together with the effect sizes derived from it: Cramér's V and the
//! phi coefficient.
//!
//! # Example
//!
//! ```
//! use asociar::association::cramers_v;
//!
//! let x = ["A", "A", "B", "B", "A", "B"];
//! let y = ["X", "Y", "X", "Y", "X", "Y"];
//! let v = cramers_v(&x, &y).expect("valid input");
//! assert!((v - 1.0 / 3.0).abs() < 1e-9);
//! ```
//!
//! # Degenerate inputs
//!
//! The chi-squared formula divides by expected counts and by
//! `min(rows, cols) - 1`. When a hand-built table has an all-zero row or
//! column, or when one axis has a single level, the statistics here return
//! a NaN or infinite value rather than an error, matching the reference
//! formula. Callers that
//! need a hard failure should check `n_rows() >= 2 && n_cols() >= 2` and the
//! marginal totals before computing.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::hash::Hash;

use crate::contingency::ContingencyTable;
use crate::error::Result;

/// Result of a chi-squared test of independence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChiSquareResult {
    /// Chi-squared statistic
    pub statistic: f64,

    /// p-value
    pub pvalue: f64,

    /// Degrees of freedom: (rows - 1) * (cols - 1)
    pub df: usize,
}

/// Pearson chi-squared statistic over a contingency table.
///
/// χ² = Σ (O - E)² / E over all cells, where E is the expected count under
/// independence.
///
/// # Degenerate inputs
///
/// A cell whose expected count is zero (possible only in tables built with
/// [`ContingencyTable::from_counts`] that contain an all-zero row or column)
/// makes the statistic NaN. This mirrors the reference formula, which does
/// not guard the division either; see the module docs.
///
/// # Examples
///
/// ```
/// use asociar::contingency::ContingencyTable;
/// use asociar::association::chi_squared_statistic;
///
/// let table = ContingencyTable::from_counts(2, 2, vec![2, 1, 1, 2]).unwrap();
/// let chi2 = chi_squared_statistic(&table);
/// assert!((chi2 - 2.0 / 3.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn chi_squared_statistic<R, C>(table: &ContingencyTable<R, C>) -> f64 {
    let mut chi2 = 0.0;
    for r in 0..table.n_rows() {
        for c in 0..table.n_cols() {
            let observed = table.count(r, c) as f64;
            let expected = table.expected(r, c);
            let d = observed - expected;
            chi2 += d * d / expected;
        }
    }
    chi2
}

/// Chi-squared test of independence between the row and column variables.
///
/// H₀: the row and column variables are independent
/// H₁: the row and column variables are associated
///
/// # Returns
///
/// [`ChiSquareResult`] with statistic, p-value, and degrees of freedom.
///
/// # Examples
///
/// ```
/// use asociar::contingency::ContingencyTable;
/// use asociar::association::chi2_independence;
///
/// let x = [0, 0, 1, 1, 0, 1];
/// let y = [0, 1, 0, 1, 0, 1];
/// let table = ContingencyTable::from_labels(&x, &y).unwrap();
/// let result = chi2_independence(&table);
/// assert_eq!(result.df, 1);
/// assert!(result.pvalue > 0.05); // too few observations to reject
/// ```
#[must_use]
pub fn chi2_independence<R, C>(table: &ContingencyTable<R, C>) -> ChiSquareResult {
    let statistic = chi_squared_statistic(table);
    let df = (table.n_rows().saturating_sub(1)) * (table.n_cols().saturating_sub(1));
    let pvalue = chi_square_pvalue(statistic, df);

    ChiSquareResult {
        statistic,
        pvalue,
        df,
    }
}

/// Cramér's V association strength between two categorical sequences.
///
/// V = sqrt(χ² / (n · min(rows - 1, cols - 1))), normalized to [0, 1]:
/// 0 means no association, 1 means perfect association.
///
/// Builds the contingency table from the label sequences, then delegates to
/// [`cramers_v_from_table`].
///
/// # Errors
///
/// Returns an error if the sequences differ in length or are empty.
///
/// # Degenerate inputs
///
/// If either sequence has a single distinct level the divisor
/// `min(rows, cols) - 1` is zero and the result is NaN (or an infinity);
/// see the module docs.
///
/// # Examples
///
/// ```
/// use asociar::association::cramers_v;
///
/// // Perfect association: y is a bijective relabeling of x.
/// let x = [0, 0, 1, 1, 2, 2];
/// let y = ["a", "a", "b", "b", "c", "c"];
/// let v = cramers_v(&x, &y).expect("valid input");
/// assert!((v - 1.0).abs() < 1e-9);
/// ```
pub fn cramers_v<R: Eq + Hash + Clone, C: Eq + Hash + Clone>(x: &[R], y: &[C]) -> Result<f64> {
    let table = ContingencyTable::from_labels(x, y)?;
    Ok(cramers_v_from_table(&table))
}

/// Cramér's V from an already-built contingency table.
///
/// Uses the marginal identity χ² = n (Σ O²/(R·C) - 1), which needs only the
/// observed counts and marginal totals; the per-cell expected table cancels
/// out algebraically. Equivalent to computing
/// [`chi_squared_statistic`] first, without the intermediate allocation.
///
/// # Examples
///
/// ```
/// use asociar::contingency::ContingencyTable;
/// use asociar::association::cramers_v_from_table;
///
/// let table = ContingencyTable::from_counts(2, 2, vec![2, 1, 1, 2]).unwrap();
/// let v = cramers_v_from_table(&table);
/// assert!((v - 1.0 / 3.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn cramers_v_from_table<R, C>(table: &ContingencyTable<R, C>) -> f64 {
    let n = table.grand_total() as f64;

    // Σ O²/(R·C); a cell in an all-zero row or column contributes 0/0 = NaN,
    // preserving the degenerate-input behavior of the per-cell form.
    let mut s = 0.0;
    for r in 0..table.n_rows() {
        let row_total = table.row_totals()[r] as f64;
        for c in 0..table.n_cols() {
            let observed = table.count(r, c) as f64;
            let col_total = table.col_totals()[c] as f64;
            s += observed * observed / (row_total * col_total);
        }
    }

    // Rounding can land s a hair below 1 at exact independence; a negative
    // χ² would turn into NaN under the sqrt. NaN from degenerate tables
    // fails the comparison and passes through untouched.
    let chi2 = n * (s - 1.0);
    let chi2 = if chi2 < 0.0 { 0.0 } else { chi2 };
    let k = table.n_rows().min(table.n_cols()) as f64 - 1.0;
    (chi2 / (n * k)).sqrt()
}

/// Phi coefficient: sqrt(χ² / n).
///
/// For a 2×2 table this equals Cramér's V; for larger tables it is not
/// bounded by 1.
///
/// # Examples
///
/// ```
/// use asociar::contingency::ContingencyTable;
/// use asociar::association::{cramers_v_from_table, phi_coefficient};
///
/// let table = ContingencyTable::from_counts(2, 2, vec![2, 1, 1, 2]).unwrap();
/// let phi = phi_coefficient(&table);
/// let v = cramers_v_from_table(&table);
/// assert!((phi - v).abs() < 1e-12);
/// ```
#[must_use]
pub fn phi_coefficient<R, C>(table: &ContingencyTable<R, C>) -> f64 {
    (chi_squared_statistic(table) / table.grand_total() as f64).sqrt()
}

// ============================================================================
// Chi-squared distribution p-value approximation
// ============================================================================

/// Approximates the p-value for a chi-squared distribution.
fn chi_square_pvalue(chi2: f64, df: usize) -> f64 {
    if df == 0 || !chi2.is_finite() {
        return f64::NAN;
    }
    // P(χ² > x) = 1 - γ(df/2, x/2) / Γ(df/2)
    let k = df as f64 / 2.0;
    1.0 - incomplete_gamma(k, chi2 / 2.0)
}

/// Regularized lower incomplete gamma function (series expansion).
fn incomplete_gamma(a: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if a <= 0.0 {
        return 1.0;
    }

    // Series expansion: γ(a,x) = e^(-x) * x^a * Σ x^n / Γ(a+n+1)
    let mut sum = 1.0 / a;
    let mut term = 1.0 / a;
    for n in 1..500 {
        term *= x / (a + f64::from(n));
        sum += term;
        if term.abs() < 1e-12 {
            break;
        }
    }

    ((-x).exp() * x.powf(a) * sum / gamma(a)).clamp(0.0, 1.0)
}

/// Gamma function approximation (Lanczos).
fn gamma(z: f64) -> f64 {
    if z < 0.5 {
        // Reflection formula: Γ(z) = π / (sin(πz) * Γ(1-z))
        PI / ((PI * z).sin() * gamma(1.0 - z))
    } else {
        let z = z - 1.0;
        let tmp = z + 5.5;
        let tmp = (z + 0.5) * tmp.ln() - tmp;
        let ser = 1.000_000_000_190_015 + 76.180_091_729_471_46 / (z + 1.0)
            - 86.505_320_329_416_77 / (z + 2.0)
            + 24.014_098_240_830_91 / (z + 3.0)
            - 1.231_739_572_450_155 / (z + 4.0)
            + 1.208_650_973_866_179e-3 / (z + 5.0)
            - 5.395_239_384_953e-6 / (z + 6.0);
        (tmp + ser.ln()).exp() * (2.0 * PI).sqrt()
    }
}

#[cfg(test)]
#[path = "tests_association_contract.rs"]
mod tests_association_contract;
