//! Recursive feature elimination with cross-validation.
//!
//! Backward elimination orchestrated over the SVM wrapper: each round
//! scores the removal of every surviving feature by mean cross-validated
//! accuracy and drops the features whose removal costs the least. The
//! subset with the highest mean CV accuracy across all visited sizes wins.
//!
//! Ranking by CV-accuracy impact (instead of linear-model weights) keeps
//! elimination well-defined for every kernel type.

use std::cmp::Ordering;

use ndarray::{Array1, Array2, Axis};
use statrs::statistics::Statistics;

use crate::config::SvmHyperParams;
use crate::error::TuneError;
use crate::model_selection::kfold::{cross_val_accuracy, KFold};

/// Recursive feature elimination driver.
pub struct Rfecv {
    step: usize,
    kfold: KFold,
}

/// Outcome of one elimination run.
#[derive(Debug, Clone)]
pub struct RfecvFit {
    /// Per-column mask; `true` marks a selected feature.
    pub support: Vec<bool>,
    /// Mean CV accuracy per visited subset size, in elimination order
    /// (largest subset first).
    pub cv_scores: Vec<(usize, f64)>,
}

impl RfecvFit {
    pub fn n_features(&self) -> usize {
        self.support.iter().filter(|&&s| s).count()
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.support
            .iter()
            .enumerate()
            .filter_map(|(i, &s)| if s { Some(i) } else { None })
            .collect()
    }

    pub fn selected_names(&self, feature_names: &[String]) -> Vec<String> {
        self.selected_indices()
            .into_iter()
            .map(|i| feature_names[i].clone())
            .collect()
    }
}

impl Rfecv {
    pub fn new(step: usize, kfold: KFold) -> Self {
        Rfecv {
            step: step.max(1),
            kfold,
        }
    }

    /// Run backward elimination for one hyperparameter candidate.
    pub fn fit(
        &self,
        x: &Array2<f64>,
        y: &Array1<bool>,
        params: &SvmHyperParams,
    ) -> Result<RfecvFit, TuneError> {
        let n_features = x.ncols();
        if n_features == 0 || x.nrows() == 0 {
            return Err(TuneError::EmptyDataset);
        }

        let folds = self.kfold.split(x.nrows())?;

        let score_subset = |indices: &[usize]| -> Result<f64, TuneError> {
            let x_sub = x.select(Axis(1), indices);
            let scores = cross_val_accuracy(&x_sub, y, params, &folds)?;
            Ok(scores.iter().mean())
        };

        let mut active: Vec<usize> = (0..n_features).collect();
        let mut visited: Vec<(Vec<usize>, f64)> = Vec::new();

        loop {
            let score = score_subset(&active)?;
            log::trace!(
                "RFE round with {} features scored {:.4}",
                active.len(),
                score
            );
            visited.push((active.clone(), score));

            if active.len() == 1 {
                break;
            }

            // Score the removal of each surviving feature. The features
            // whose removal leaves the highest accuracy contribute least.
            let mut removal_scores: Vec<(usize, f64)> = Vec::with_capacity(active.len());
            for pos in 0..active.len() {
                let reduced: Vec<usize> = active
                    .iter()
                    .enumerate()
                    .filter_map(|(p, &col)| if p == pos { None } else { Some(col) })
                    .collect();
                removal_scores.push((pos, score_subset(&reduced)?));
            }

            removal_scores.sort_by(|a, b| {
                b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal)
            });

            let n_drop = self.step.min(active.len() - 1);
            let dropped: Vec<usize> = removal_scores[..n_drop]
                .iter()
                .map(|&(pos, _)| pos)
                .collect();
            active = active
                .iter()
                .enumerate()
                .filter_map(|(p, &col)| if dropped.contains(&p) { None } else { Some(col) })
                .collect();
        }

        // Highest mean CV accuracy wins; ties favor fewer features.
        let (best_set, _) = visited
            .iter()
            .max_by(|a, b| {
                a.1.partial_cmp(&b.1)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| b.0.len().cmp(&a.0.len()))
            })
            .ok_or(TuneError::UndefinedOrder)?;

        let mut support = vec![false; n_features];
        for &col in best_set {
            support[col] = true;
        }

        Ok(RfecvFit {
            support,
            cv_scores: visited
                .into_iter()
                .map(|(set, score)| (set.len(), score))
                .collect(),
        })
    }
}
