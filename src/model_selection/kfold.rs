//! Seeded k-fold splitting and cross-validated accuracy scoring.

use ndarray::{Array1, Array2, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::config::SvmHyperParams;
use crate::error::TuneError;
use crate::metrics::accuracy_score;
use crate::models::SvmClassifier;

/// Shuffled k-fold index splitter with a fixed seed.
///
/// Every sample lands in exactly one validation fold; fold sizes differ by
/// at most one. The same seed always produces the same assignment.
#[derive(Debug, Clone, Copy)]
pub struct KFold {
    n_splits: usize,
    seed: u64,
}

impl KFold {
    pub fn new(n_splits: usize, seed: u64) -> Self {
        KFold { n_splits, seed }
    }

    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Produce `(train_indices, validation_indices)` pairs for `n_samples`.
    pub fn split(&self, n_samples: usize) -> Result<Vec<(Vec<usize>, Vec<usize>)>, TuneError> {
        if self.n_splits < 2 || self.n_splits > n_samples {
            return Err(TuneError::BadFoldCount {
                k: self.n_splits,
                n_samples,
            });
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut indices: Vec<usize> = (0..n_samples).collect();
        indices.shuffle(&mut rng);

        // The first n_samples % n_splits folds take one extra sample.
        let base = n_samples / self.n_splits;
        let extra = n_samples % self.n_splits;

        let mut folds = Vec::with_capacity(self.n_splits);
        let mut start = 0;
        for fold in 0..self.n_splits {
            let size = base + usize::from(fold < extra);
            let validation: Vec<usize> = indices[start..start + size].to_vec();
            let train: Vec<usize> = indices[..start]
                .iter()
                .chain(indices[start + size..].iter())
                .copied()
                .collect();
            folds.push((train, validation));
            start += size;
        }
        Ok(folds)
    }
}

/// Per-fold validation accuracy of one hyperparameter candidate.
///
/// Fits a fresh classifier on each fold's training rows and scores the
/// held-out rows.
pub fn cross_val_accuracy(
    x: &Array2<f64>,
    y: &Array1<bool>,
    params: &SvmHyperParams,
    folds: &[(Vec<usize>, Vec<usize>)],
) -> Result<Vec<f64>, TuneError> {
    if x.nrows() != y.len() {
        return Err(TuneError::LengthMismatch {
            expected: x.nrows(),
            got: y.len(),
        });
    }

    let mut scores = Vec::with_capacity(folds.len());
    for (train_idx, val_idx) in folds {
        let x_train = x.select(Axis(0), train_idx);
        let y_train = y.select(Axis(0), train_idx);
        let x_val = x.select(Axis(0), val_idx);
        let y_val = y.select(Axis(0), val_idx);

        let mut model = SvmClassifier::new(params.clone());
        model.fit(&x_train, &y_train)?;
        let preds = model.predict(&x_val)?;
        scores.push(accuracy_score(&y_val, &preds)?);
    }
    Ok(scores)
}
