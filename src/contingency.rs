//! Contingency tables for pairs of categorical sequences.
//!
//! A contingency table cross-tabulates the co-occurrence counts of two
//! parallel label sequences. It carries the marginal totals needed by the
//! chi-squared family of statistics so they never have to be recomputed.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{AsociarError, Result};

/// Cross-tabulation of two equal-length categorical sequences.
///
/// Rows correspond to the distinct levels of the first sequence, columns to
/// the distinct levels of the second, both indexed in first-seen order.
/// Level order never affects any statistic derived from the table. The row
/// and column label types may differ.
///
/// Counts are stored row-major and are immutable after construction.
///
/// # Examples
///
/// ```
/// use asociar::contingency::ContingencyTable;
///
/// let x = ["A", "A", "B", "B", "A", "B"];
/// let y = ["X", "Y", "X", "Y", "X", "Y"];
/// let table = ContingencyTable::from_labels(&x, &y).unwrap();
///
/// assert_eq!(table.n_rows(), 2);
/// assert_eq!(table.n_cols(), 2);
/// assert_eq!(table.count(0, 0), 2); // (A, X)
/// assert_eq!(table.grand_total(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContingencyTable<R, C = R> {
    row_levels: Vec<R>,
    col_levels: Vec<C>,
    counts: Vec<u64>,
    row_totals: Vec<u64>,
    col_totals: Vec<u64>,
    grand_total: u64,
}

impl<R: Eq + Hash + Clone, C: Eq + Hash + Clone> ContingencyTable<R, C> {
    /// Build a contingency table by counting co-occurrences of `(x[i], y[i])`.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the sequences differ in length and
    /// an empty-input error if either sequence is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use asociar::contingency::ContingencyTable;
    ///
    /// let x = [1, 1, 2, 2];
    /// let y = [0, 0, 1, 1];
    /// let table = ContingencyTable::from_labels(&x, &y).unwrap();
    /// assert_eq!(table.count(0, 0), 2);
    /// assert_eq!(table.count(1, 1), 2);
    /// assert_eq!(table.count(0, 1), 0);
    /// ```
    pub fn from_labels(x: &[R], y: &[C]) -> Result<Self> {
        if x.len() != y.len() {
            return Err(AsociarError::dimension_mismatch("x.len", x.len(), y.len()));
        }
        if x.is_empty() {
            return Err(AsociarError::empty_input("label sequences"));
        }

        let row_index = level_index(x);
        let col_index = level_index(y);

        let n_rows = row_index.levels.len();
        let n_cols = col_index.levels.len();
        let mut counts = vec![0u64; n_rows * n_cols];

        for (xi, yi) in x.iter().zip(y.iter()) {
            let r = row_index.map[xi];
            let c = col_index.map[yi];
            counts[r * n_cols + c] += 1;
        }

        Ok(Self::from_parts(row_index.levels, col_index.levels, counts))
    }
}

impl ContingencyTable<usize> {
    /// Build a table directly from pre-tabulated counts in row-major order.
    ///
    /// Levels are the row and column indices `0..n_rows` and `0..n_cols`.
    /// Rows or columns whose total is zero are kept as-is; statistics over
    /// such tables hit the zero-expected-count boundary condition described
    /// on [`chi_squared_statistic`](crate::association::chi_squared_statistic).
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `counts.len() != n_rows * n_cols`, and
    /// an empty-input error if either dimension is zero or all counts are zero.
    pub fn from_counts(n_rows: usize, n_cols: usize, counts: Vec<u64>) -> Result<Self> {
        if n_rows == 0 || n_cols == 0 {
            return Err(AsociarError::empty_input("contingency table dimensions"));
        }
        if counts.len() != n_rows * n_cols {
            return Err(AsociarError::dimension_mismatch(
                "n_rows * n_cols",
                n_rows * n_cols,
                counts.len(),
            ));
        }

        let row_levels: Vec<usize> = (0..n_rows).collect();
        let col_levels: Vec<usize> = (0..n_cols).collect();
        let table = Self::from_parts(row_levels, col_levels, counts);

        if table.grand_total == 0 {
            return Err(AsociarError::empty_input("contingency table counts"));
        }
        Ok(table)
    }
}

impl<R, C> ContingencyTable<R, C> {
    fn from_parts(row_levels: Vec<R>, col_levels: Vec<C>, counts: Vec<u64>) -> Self {
        let n_rows = row_levels.len();
        let n_cols = col_levels.len();

        let mut row_totals = vec![0u64; n_rows];
        let mut col_totals = vec![0u64; n_cols];
        let mut grand_total = 0u64;

        for r in 0..n_rows {
            for c in 0..n_cols {
                let v = counts[r * n_cols + c];
                row_totals[r] += v;
                col_totals[c] += v;
                grand_total += v;
            }
        }

        Self {
            row_levels,
            col_levels,
            counts,
            row_totals,
            col_totals,
            grand_total,
        }
    }

    /// Number of distinct row levels.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.row_levels.len()
    }

    /// Number of distinct column levels.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.col_levels.len()
    }

    /// Observed count in cell `(r, c)`.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `c` is out of bounds.
    #[must_use]
    pub fn count(&self, r: usize, c: usize) -> u64 {
        assert!(r < self.n_rows(), "row index out of bounds");
        assert!(c < self.n_cols(), "column index out of bounds");
        self.counts[r * self.n_cols() + c]
    }

    /// Row marginal totals.
    #[must_use]
    pub fn row_totals(&self) -> &[u64] {
        &self.row_totals
    }

    /// Column marginal totals.
    #[must_use]
    pub fn col_totals(&self) -> &[u64] {
        &self.col_totals
    }

    /// Total number of observations.
    #[must_use]
    pub fn grand_total(&self) -> u64 {
        self.grand_total
    }

    /// Distinct row levels in first-seen order.
    #[must_use]
    pub fn row_levels(&self) -> &[R] {
        &self.row_levels
    }

    /// Distinct column levels in first-seen order.
    #[must_use]
    pub fn col_levels(&self) -> &[C] {
        &self.col_levels
    }

    /// Expected count for cell `(r, c)` under the independence assumption:
    /// `row_total * col_total / grand_total`.
    ///
    /// # Panics
    ///
    /// Panics if `r` or `c` is out of bounds.
    #[must_use]
    pub fn expected(&self, r: usize, c: usize) -> f64 {
        assert!(r < self.n_rows(), "row index out of bounds");
        assert!(c < self.n_cols(), "column index out of bounds");
        self.row_totals[r] as f64 * self.col_totals[c] as f64 / self.grand_total as f64
    }
}

struct LevelIndex<L> {
    levels: Vec<L>,
    map: HashMap<L, usize>,
}

/// Assign a dense index to each distinct label in first-seen order.
fn level_index<L: Eq + Hash + Clone>(labels: &[L]) -> LevelIndex<L> {
    let mut levels = Vec::new();
    let mut map = HashMap::new();
    for label in labels {
        if !map.contains_key(label) {
            map.insert(label.clone(), levels.len());
            levels.push(label.clone());
        }
    }
    LevelIndex { levels, map }
}
