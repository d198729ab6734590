//! Correlation primitives used by the collinearity screen.

use ndarray::{Array2, ArrayView1};

use crate::error::TuneError;

/// Pearson correlation coefficient between two equally long columns.
///
/// Returns NaN when either column has zero variance, matching the
/// behavior of dataframe `corr()` implementations.
pub fn pearson(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    let n = a.len() as f64;
    let mean_a = a.sum() / n;
    let mean_b = b.sum() / n;

    let mut cov = 0.0;
    let mut var_a = 0.0;
    let mut var_b = 0.0;
    for (&va, &vb) in a.iter().zip(b.iter()) {
        let da = va - mean_a;
        let db = vb - mean_b;
        cov += da * db;
        var_a += da * da;
        var_b += db * db;
    }

    // Rounding can push |r| just past 1 for exact multiples; NaN from a
    // zero-variance column passes through the clamp untouched.
    (cov / (var_a.sqrt() * var_b.sqrt())).clamp(-1.0, 1.0)
}

/// Pairwise Pearson correlation matrix of the columns of `x`.
///
/// The result is symmetric with a unit diagonal. Entries involving a
/// zero-variance column are NaN.
pub fn correlation_matrix(x: &Array2<f64>) -> Result<Array2<f64>, TuneError> {
    let (nrows, ncols) = x.dim();
    if nrows < 2 || ncols == 0 {
        return Err(TuneError::EmptyDataset);
    }

    let mut corr = Array2::from_elem((ncols, ncols), 1.0);
    for i in 0..ncols {
        for j in (i + 1)..ncols {
            let r = pearson(x.column(i), x.column(j));
            corr[(i, j)] = r;
            corr[(j, i)] = r;
        }
    }
    Ok(corr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    #[test]
    fn perfectly_correlated_columns() {
        let a = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let b = Array1::from_vec(vec![2.0, 4.0, 6.0, 8.0]);
        let r = pearson(a.view(), b.view());
        assert!((r - 1.0).abs() < 1e-12, "r = {}", r);
    }

    #[test]
    fn anti_correlated_columns() {
        let a = Array1::from_vec(vec![1.0, 2.0, 3.0, 4.0]);
        let b = Array1::from_vec(vec![4.0, 3.0, 2.0, 1.0]);
        let r = pearson(a.view(), b.view());
        assert!((r + 1.0).abs() < 1e-12, "r = {}", r);
    }

    #[test]
    fn constant_column_yields_nan() {
        let a = Array1::from_vec(vec![1.0, 2.0, 3.0]);
        let b = Array1::from_vec(vec![5.0, 5.0, 5.0]);
        assert!(pearson(a.view(), b.view()).is_nan());
    }

    #[test]
    fn matrix_is_symmetric_with_unit_diagonal() {
        let x = Array2::from_shape_vec(
            (4, 3),
            vec![
                1.0, 2.0, -1.0, //
                2.0, 4.1, -2.0, //
                3.0, 5.9, -3.0, //
                4.0, 8.2, -4.0,
            ],
        )
        .unwrap();
        let corr = correlation_matrix(&x).unwrap();
        for i in 0..3 {
            assert!((corr[(i, i)] - 1.0).abs() < 1e-12);
            for j in 0..3 {
                assert!((corr[(i, j)] - corr[(j, i)]).abs() < 1e-12);
            }
        }
        // First and third columns are exactly anti-correlated
        assert!((corr[(0, 2)] + 1.0).abs() < 1e-12);
    }
}
