// =========================================================================
// FALSIFY-CV: categorical association contract (asociar)
//
// Each test tries to falsify one documented guarantee of the chi-squared
// association family. Failure messages name the violated contract.
//
// References:
//   - Pearson (1900) "On the criterion that a given system of deviations..."
//   - Cramér (1946) "Mathematical Methods of Statistics", §21.9
// =========================================================================

use super::*;

/// FALSIFY-CV-001: Cramér's V is in [0, 1] for well-formed input
#[test]
fn falsify_cv_001_v_bounded() {
    let x = [0, 1, 2, 0, 1, 2, 0, 2, 1, 0];
    let y = ["a", "a", "b", "b", "a", "b", "a", "b", "b", "a"];
    let v = cramers_v(&x, &y).expect("valid input");

    assert!(
        (0.0..=1.0 + 1e-12).contains(&v),
        "FALSIFIED CV-001: V={v} outside [0,1]"
    );
}

/// FALSIFY-CV-002: Cramér's V is symmetric in its arguments
#[test]
fn falsify_cv_002_v_symmetric() {
    let x = ["m", "f", "f", "m", "m", "f", "m", "f"];
    let y = [0, 0, 1, 1, 0, 1, 1, 0];
    let v_xy = cramers_v(&x, &y).expect("valid input");
    let v_yx = cramers_v(&y, &x).expect("valid input");

    assert!(
        (v_xy - v_yx).abs() < 1e-12,
        "FALSIFIED CV-002: V(x,y)={v_xy} != V(y,x)={v_yx}"
    );
}

/// FALSIFY-CV-003: bijective relabeling gives V = 1
#[test]
fn falsify_cv_003_perfect_association() {
    let x = [1, 2, 3, 1, 2, 3, 1, 2, 3];
    let y: Vec<&str> = x
        .iter()
        .map(|&v| match v {
            1 => "one",
            2 => "two",
            _ => "three",
        })
        .collect();
    let v = cramers_v(&x, &y).expect("valid input");

    assert!(
        (v - 1.0).abs() < 1e-9,
        "FALSIFIED CV-003: V={v} != 1 for bijective relabeling"
    );
}

/// FALSIFY-CV-004: chi-squared p-value is in [0, 1]
#[test]
fn falsify_cv_004_pvalue_bounded() {
    let table =
        ContingencyTable::from_counts(2, 3, vec![10, 20, 30, 30, 20, 10]).expect("valid table");
    let result = chi2_independence(&table);

    assert!(
        (0.0..=1.0).contains(&result.pvalue),
        "FALSIFIED CV-004: p-value={} outside [0,1]",
        result.pvalue
    );
}

/// FALSIFY-CV-005: chi-squared statistic is non-negative and finite for
/// tables with no empty rows or columns
#[test]
fn falsify_cv_005_statistic_finite() {
    let table =
        ContingencyTable::from_counts(3, 2, vec![4, 1, 2, 5, 3, 3]).expect("valid table");
    let chi2 = chi_squared_statistic(&table);

    assert!(
        chi2.is_finite() && chi2 >= 0.0,
        "FALSIFIED CV-005: chi-squared={chi2} not a finite non-negative value"
    );
}

/// FALSIFY-CV-006: the fused marginal identity matches the per-cell form
#[test]
fn falsify_cv_006_fused_matches_textbook() {
    let table = ContingencyTable::from_counts(3, 4, vec![7, 2, 5, 1, 3, 9, 2, 4, 1, 2, 8, 6])
        .expect("valid table");

    let n = table.grand_total() as f64;
    let k = (table.n_rows().min(table.n_cols()) - 1) as f64;
    let per_cell = (chi_squared_statistic(&table) / (n * k)).sqrt();
    let fused = cramers_v_from_table(&table);

    assert!(
        (per_cell - fused).abs() < 1e-12,
        "FALSIFIED CV-006: per-cell V={per_cell} != fused V={fused}"
    );
}
