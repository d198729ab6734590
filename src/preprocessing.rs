//! Small preprocessing utilities shared by the demos and the tuner.
//!
//! Provides a standard scaler for per-column mean/std standardization.
//! The grid-search tuner expects pre-scaled inputs; this is the helper
//! that produces them.

use ndarray::{Array1, Array2, Axis};

use crate::error::TuneError;

/// Simple standard scaler (per-column mean/std).
#[derive(Clone, Debug)]
pub struct StandardScaler {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}

impl StandardScaler {
    /// Minimum stddev to avoid division by zero when transforming.
    const MIN_STD: f64 = 1e-9;

    /// Fit a scaler from a matrix where rows are samples and columns are
    /// features.
    pub fn fit(x: &Array2<f64>) -> Result<Self, TuneError> {
        let (nrows, ncols) = x.dim();
        if nrows == 0 || ncols == 0 {
            return Err(TuneError::EmptyDataset);
        }

        let mean = x.mean_axis(Axis(0)).ok_or(TuneError::EmptyDataset)?;

        let nrows_f = nrows as f64;
        let mut std = Array1::zeros(ncols);
        for (c, col) in x.columns().into_iter().enumerate() {
            let var = col.iter().map(|v| (v - mean[c]).powi(2)).sum::<f64>() / nrows_f;
            std[c] = var.sqrt().max(Self::MIN_STD);
        }

        Ok(StandardScaler { mean, std })
    }

    /// Transform all rows, returning a new matrix.
    pub fn transform(&self, x: &Array2<f64>) -> Result<Array2<f64>, TuneError> {
        if x.ncols() != self.mean.len() {
            return Err(TuneError::LengthMismatch {
                expected: self.mean.len(),
                got: x.ncols(),
            });
        }
        let mut out = x.clone();
        for (c, mut col) in out.columns_mut().into_iter().enumerate() {
            col.mapv_inplace(|v| (v - self.mean[c]) / self.std[c]);
        }
        Ok(out)
    }
}

/// Convenience: fit a scaler and return the transformed matrix in one call.
pub fn fit_transform(x: &Array2<f64>) -> Result<Array2<f64>, TuneError> {
    let sc = StandardScaler::fit(x)?;
    sc.transform(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_computes_mean_and_std() {
        let x = Array2::from_shape_vec(
            (4, 2),
            vec![1.0, 10.0, 2.0, 20.0, 3.0, 30.0, 4.0, 40.0],
        )
        .unwrap();

        let sc = StandardScaler::fit(&x).unwrap();
        assert!((sc.mean[0] - 2.5).abs() < 1e-9, "mean[0] = {}", sc.mean[0]);
        assert!((sc.mean[1] - 25.0).abs() < 1e-9, "mean[1] = {}", sc.mean[1]);
        assert!(sc.std[0] > 0.0);
        assert!(sc.std[1] > 0.0);
    }

    #[test]
    fn transform_centers_and_scales() {
        let x = Array2::from_shape_vec((4, 1), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let t = fit_transform(&x).unwrap();

        let mean: f64 = t.column(0).sum() / 4.0;
        assert!(mean.abs() < 1e-9, "column mean after transform = {}", mean);

        let var: f64 = t.column(0).iter().map(|v| (v - mean).powi(2)).sum::<f64>() / 4.0;
        assert!((var - 1.0).abs() < 1e-9, "column var after transform = {}", var);
    }

    #[test]
    fn constant_column_does_not_divide_by_zero() {
        let x = Array2::from_shape_vec((3, 1), vec![5.0, 5.0, 5.0]).unwrap();
        let t = fit_transform(&x).unwrap();
        for v in t.iter() {
            assert!(v.abs() < 1e-6, "constant column should transform to ~0");
        }
    }

    #[test]
    fn transform_rejects_width_mismatch() {
        let x = Array2::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let sc = StandardScaler::fit(&x).unwrap();
        let narrow = Array2::from_shape_vec((2, 1), vec![1.0, 2.0]).unwrap();
        assert!(sc.transform(&narrow).is_err());
    }
}
