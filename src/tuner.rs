//! Per-kernel grid-search orchestration and diagnostics printing.

use std::collections::HashMap;

use anyhow::Context;
use ndarray::Array1;
use statrs::statistics::Statistics;

use crate::config::{KernelGrid, KernelKind, SearchConfig, SvmHyperParams};
use crate::data_handling::FeatureFrame;
use crate::error::TuneError;
use crate::metrics::{accuracy_score, classification_report, ClassificationReport};
use crate::model_selection::grid_search::{GridSearchCv, GridSearchResult};

/// Everything the search learned about one kernel.
pub struct KernelSearchOutcome {
    pub kernel: KernelKind,
    pub best_params: SvmHyperParams,
    pub selected_features: Vec<String>,
    pub train_accuracy: f64,
    pub test_accuracy: f64,
    /// Mean CV accuracy per candidate, in grid order.
    pub mean_cv_scores: Vec<f64>,
    pub best_cv_score: f64,
    /// Per-fold accuracy of the winning candidate.
    pub best_fold_scores: Vec<f64>,
    pub train_report: ClassificationReport,
    pub test_report: ClassificationReport,
    /// The refitted winner, usable for further prediction.
    pub search: GridSearchResult,
}

/// Run grid search with recursive feature elimination for each requested
/// kernel and print a diagnostic block per kernel.
///
/// `param_grids` must contain an entry for every kernel in
/// `selected_kernels`. Train and test frames must share the same columns.
/// Returns the per-kernel outcomes keyed by kernel.
pub fn perform_grid_search_cv(
    selected_kernels: &[KernelKind],
    param_grids: &HashMap<KernelKind, KernelGrid>,
    train: &FeatureFrame,
    y_train: &Array1<bool>,
    test: &FeatureFrame,
    y_test: &Array1<bool>,
    config: &SearchConfig,
) -> anyhow::Result<HashMap<KernelKind, KernelSearchOutcome>> {
    if test.ncols() != train.ncols() {
        return Err(TuneError::LengthMismatch {
            expected: train.ncols(),
            got: test.ncols(),
        }
        .into());
    }

    let mut outcomes = HashMap::new();

    for &kernel in selected_kernels {
        log::info!("Running grid search for {} kernel...", kernel);

        let grid = param_grids
            .get(&kernel)
            .with_context(|| format!("No parameter grid supplied for {} kernel", kernel))?;
        let candidates = grid.expand(kernel);
        if candidates.is_empty() {
            return Err(TuneError::EmptyGrid(kernel.to_string()).into());
        }

        let search = GridSearchCv::new(candidates, config)?
            .fit(train, y_train)
            .with_context(|| format!("Grid search failed for {} kernel", kernel))?;

        let y_train_pred = search.predict(train)?;
        let y_test_pred = search.predict(test)?;

        let train_accuracy = accuracy_score(y_train, &y_train_pred)?;
        let test_accuracy = accuracy_score(y_test, &y_test_pred)?;
        let train_report = classification_report(y_train, &y_train_pred)?;
        let test_report = classification_report(y_test, &y_test_pred)?;

        let mean_cv_scores = search.mean_scores();
        let best_fold_scores = search.best_fold_scores().to_vec();

        log::debug!(
            "{} kernel: best fold accuracy {:.4} +/- {:.4}",
            kernel,
            best_fold_scores.iter().mean(),
            best_fold_scores.iter().std_dev()
        );

        print_kernel_diagnostics(
            kernel,
            &search,
            train_accuracy,
            test_accuracy,
            &mean_cv_scores,
            &best_fold_scores,
            &train_report,
            &test_report,
        );

        outcomes.insert(
            kernel,
            KernelSearchOutcome {
                kernel,
                best_params: search.best_params().clone(),
                selected_features: search.selected_features.clone(),
                train_accuracy,
                test_accuracy,
                mean_cv_scores,
                best_cv_score: search.best_score(),
                best_fold_scores,
                train_report,
                test_report,
                search,
            },
        );
    }

    Ok(outcomes)
}

#[allow(clippy::too_many_arguments)]
fn print_kernel_diagnostics(
    kernel: KernelKind,
    search: &GridSearchResult,
    train_accuracy: f64,
    test_accuracy: f64,
    mean_cv_scores: &[f64],
    best_fold_scores: &[f64],
    train_report: &ClassificationReport,
    test_report: &ClassificationReport,
) {
    println!("----- Grid Search Summary: {} kernel -----", kernel);
    println!("Best {} SVM parameters: {:?}", kernel, search.best_params());
    println!("Training set accuracy: {}", train_accuracy);
    println!("Test set accuracy: {}", test_accuracy);
    println!("Cross-validation scores: {:?}", mean_cv_scores);
    println!("Best cross-validation score: {}", search.best_score());
    println!(
        "Number of features selected: {}",
        search.selected_features.len()
    );
    println!();
    println!("Cross-validation scores for best parameter combination:");
    for (i, score) in best_fold_scores.iter().enumerate() {
        println!("Fold {}: {}", i + 1, score);
    }
    println!("Classification report for {} kernel training set:", kernel);
    println!("{}", train_report);
    println!("Classification report for {} kernel test set:", kernel);
    println!("{}", test_report);
    println!();
}
