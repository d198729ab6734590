//! Integration tests for metrics, configuration expansion, and fold
//! splitting through the public API.

use ndarray::{Array1, Array2};
use svmtune::config::{KernelGrid, KernelKind, SearchConfig, SvmHyperParams};
use svmtune::feature_selection::Rfecv;
use svmtune::metrics::{accuracy_score, classification_report};
use svmtune::model_selection::KFold;

// ---------------------------------------------------------------------------
// Config expansion
// ---------------------------------------------------------------------------

#[test]
fn gaussian_expansion_covers_c_by_kernel_eps() {
    let grid = KernelGrid {
        c: vec![0.1, 1.0, 10.0],
        gaussian_kernel_eps: vec![0.5, 2.0],
        ..KernelGrid::default()
    };
    let candidates = grid.expand(KernelKind::Gaussian);
    assert_eq!(candidates.len(), 6);
    for params in &candidates {
        assert_eq!(params.kernel, KernelKind::Gaussian);
        assert_eq!(params.c.0, params.c.1);
    }
}

#[test]
fn default_search_config_is_sane() {
    let config = SearchConfig::default();
    assert_eq!(config.k_fold, 5);
    assert_eq!(config.rfe_step, 1);
}

#[test]
fn kernel_names_parse_back() {
    for kernel in [KernelKind::Linear, KernelKind::Gaussian, KernelKind::Poly] {
        let parsed: KernelKind = kernel.as_str().parse().unwrap();
        assert_eq!(parsed, kernel);
    }
}

// ---------------------------------------------------------------------------
// KFold
// ---------------------------------------------------------------------------

#[test]
fn kfold_is_reproducible_across_instances() {
    let first = KFold::new(4, 99).split(17).unwrap();
    let second = KFold::new(4, 99).split(17).unwrap();
    assert_eq!(first, second);

    let different_seed = KFold::new(4, 100).split(17).unwrap();
    assert_ne!(first, different_seed);
}

#[test]
fn kfold_partitions_all_samples() {
    let folds = KFold::new(5, 1).split(23).unwrap();
    let total: usize = folds.iter().map(|(_, validation)| validation.len()).sum();
    assert_eq!(total, 23);
}

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

#[test]
fn perfect_predictions_score_one() {
    let y = Array1::from_vec(vec![true, false, true, false, true]);
    assert_eq!(accuracy_score(&y, &y).unwrap(), 1.0);

    let report = classification_report(&y, &y).unwrap();
    assert_eq!(report.accuracy, 1.0);
    assert_eq!(report.positive.f1, 1.0);
    assert_eq!(report.negative.f1, 1.0);
}

#[test]
fn inverted_predictions_score_zero() {
    let y_true = Array1::from_vec(vec![true, false, true, false]);
    let y_pred = Array1::from_vec(vec![false, true, false, true]);
    assert_eq!(accuracy_score(&y_true, &y_pred).unwrap(), 0.0);
}

// ---------------------------------------------------------------------------
// RFECV support consistency
// ---------------------------------------------------------------------------

#[test]
fn rfe_support_matches_selected_names() {
    let x = Array2::from_shape_vec(
        (12, 3),
        vec![
            2.0, 0.1, -0.1, 2.3, -0.2, 0.2, 1.9, 0.3, 0.0, 2.5, -0.1, -0.2, //
            2.1, 0.2, 0.1, 2.4, 0.0, -0.3, -2.0, 0.1, 0.2, -2.2, -0.3, 0.0, //
            -1.9, 0.2, -0.1, -2.4, 0.0, 0.3, -2.1, -0.1, 0.1, -2.3, 0.2, -0.2,
        ],
    )
    .unwrap();
    let y = Array1::from_vec(vec![
        true, true, true, true, true, true, false, false, false, false, false, false,
    ]);

    let fit = Rfecv::new(1, KFold::new(3, 42))
        .fit(&x, &y, &SvmHyperParams::default())
        .unwrap();

    let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    let selected = fit.selected_names(&names);
    assert_eq!(selected.len(), fit.n_features());
    for name in &selected {
        assert!(names.contains(name));
    }
}
