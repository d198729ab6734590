//! Exhaustive hyperparameter search with nested feature elimination.

use ndarray::{Array1, Axis};
use ndarray_stats::QuantileExt;
use statrs::statistics::Statistics;

use crate::config::{SearchConfig, SvmHyperParams};
use crate::data_handling::FeatureFrame;
use crate::error::TuneError;
use crate::feature_selection::rfe::Rfecv;
use crate::model_selection::kfold::{cross_val_accuracy, KFold};
use crate::models::SvmClassifier;

/// Evaluation record for one hyperparameter candidate.
#[derive(Debug, Clone)]
pub struct CandidateResult {
    pub params: SvmHyperParams,
    /// Columns kept by the candidate's feature-elimination run.
    pub selected_indices: Vec<usize>,
    /// Validation accuracy per fold on the selected columns.
    pub fold_scores: Vec<f64>,
    pub mean_score: f64,
}

/// Grid search over expanded candidates. Each candidate runs recursive
/// feature elimination first, then k-fold cross-validation on the columns
/// it kept.
pub struct GridSearchCv {
    candidates: Vec<SvmHyperParams>,
    kfold: KFold,
    rfe_step: usize,
}

impl GridSearchCv {
    pub fn new(candidates: Vec<SvmHyperParams>, config: &SearchConfig) -> Result<Self, TuneError> {
        if candidates.is_empty() {
            return Err(TuneError::EmptyGrid("unspecified".to_string()));
        }
        Ok(GridSearchCv {
            candidates,
            kfold: KFold::new(config.k_fold, config.random_state),
            rfe_step: config.rfe_step,
        })
    }

    /// Evaluate every candidate on the training frame and refit the winner.
    pub fn fit(
        &self,
        frame: &FeatureFrame,
        y: &Array1<bool>,
    ) -> Result<GridSearchResult, TuneError> {
        if frame.nrows() != y.len() {
            return Err(TuneError::LengthMismatch {
                expected: frame.nrows(),
                got: y.len(),
            });
        }

        let folds = self.kfold.split(frame.nrows())?;
        let rfecv = Rfecv::new(self.rfe_step, self.kfold);

        let mut candidates = Vec::with_capacity(self.candidates.len());
        for (i, params) in self.candidates.iter().enumerate() {
            let selection = rfecv.fit(&frame.x, y, params)?;
            let selected_indices = selection.selected_indices();

            let x_sel = frame.x.select(Axis(1), &selected_indices);
            let fold_scores = cross_val_accuracy(&x_sel, y, params, &folds)?;
            let mean_score = fold_scores.iter().mean();

            log::debug!(
                "Candidate {}/{}: {} features kept, mean CV accuracy {:.4}",
                i + 1,
                self.candidates.len(),
                selected_indices.len(),
                mean_score
            );

            candidates.push(CandidateResult {
                params: params.clone(),
                selected_indices,
                fold_scores,
                mean_score,
            });
        }

        let mean_scores = candidates
            .iter()
            .map(|c| c.mean_score)
            .collect::<Array1<f64>>();
        let best_index = mean_scores
            .argmax()
            .map_err(|_| TuneError::UndefinedOrder)?;

        // Refit the winning candidate on the full training set over its
        // selected columns.
        let winner = &candidates[best_index];
        let x_best = frame.x.select(Axis(1), &winner.selected_indices);
        let mut model = SvmClassifier::new(winner.params.clone());
        model.fit(&x_best, y)?;

        let mut support = vec![false; frame.ncols()];
        for &col in &winner.selected_indices {
            support[col] = true;
        }
        let selected_features = winner
            .selected_indices
            .iter()
            .map(|&i| frame.feature_names[i].clone())
            .collect();

        Ok(GridSearchResult {
            candidates,
            best_index,
            support,
            selected_features,
            n_columns: frame.ncols(),
            model,
        })
    }
}

/// Outcome of a grid search: the candidate table plus the refitted winner.
pub struct GridSearchResult {
    pub candidates: Vec<CandidateResult>,
    pub best_index: usize,
    /// Per-column mask over the original frame.
    pub support: Vec<bool>,
    pub selected_features: Vec<String>,
    n_columns: usize,
    model: SvmClassifier,
}

impl GridSearchResult {
    pub fn best_params(&self) -> &SvmHyperParams {
        &self.candidates[self.best_index].params
    }

    pub fn best_score(&self) -> f64 {
        self.candidates[self.best_index].mean_score
    }

    pub fn best_fold_scores(&self) -> &[f64] {
        &self.candidates[self.best_index].fold_scores
    }

    /// Mean CV accuracy per candidate, in grid order.
    pub fn mean_scores(&self) -> Vec<f64> {
        self.candidates.iter().map(|c| c.mean_score).collect()
    }

    /// Predict labels for a frame with the same columns as the training
    /// frame. The winner's column selection is applied first.
    pub fn predict(&self, frame: &FeatureFrame) -> Result<Array1<bool>, TuneError> {
        if frame.ncols() != self.n_columns {
            return Err(TuneError::LengthMismatch {
                expected: self.n_columns,
                got: frame.ncols(),
            });
        }
        let indices = &self.candidates[self.best_index].selected_indices;
        let x_sel = frame.x.select(Axis(1), indices);
        self.model.predict(&x_sel)
    }
}
