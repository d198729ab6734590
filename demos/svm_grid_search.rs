use std::collections::HashMap;

use anyhow::Result;
use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use svmtune::config::{KernelGrid, KernelKind, SearchConfig};
use svmtune::data_handling::{load_labeled_csv, train_test_split, FeatureFrame};
use svmtune::feature_selection::assess_collinearity;
use svmtune::preprocessing::StandardScaler;
use svmtune::report::search_report;
use svmtune::tuner::perform_grid_search_cv;

/// Build a synthetic binary-classification frame: one informative
/// feature, one noise feature, a near-duplicate of the informative
/// feature (to exercise the collinearity screen), and a weak feature.
fn synthetic_frame(n: usize, seed: u64) -> Result<(FeatureFrame, Array1<bool>)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(n * 4);
    let mut labels = Vec::with_capacity(n);

    for i in 0..n {
        let is_pos = i % 2 == 0;
        let center = if is_pos { 2.0 } else { -2.0 };
        let signal: f64 = center + rng.gen_range(-0.8..0.8);
        let noise: f64 = rng.gen_range(-1.0..1.0);
        let duplicated = signal * 2.0 + rng.gen_range(-0.01..0.01);
        let weak = 0.3 * center + rng.gen_range(-1.5..1.5);
        rows.extend_from_slice(&[signal, noise, duplicated, weak]);
        labels.push(is_pos);
    }

    let x = Array2::from_shape_vec((n, 4), rows)?;
    let frame = FeatureFrame::new(
        x,
        vec![
            "signal".into(),
            "noise".into(),
            "signal_doubled".into(),
            "weak".into(),
        ],
    )?;
    Ok((frame, Array1::from_vec(labels)))
}

fn main() -> Result<()> {
    env_logger::init();

    // Usage: cargo run --example svm_grid_search -- [csv-path]
    // The CSV needs a header row and an integer `label` column.
    let (frame, y) = match std::env::args().nth(1) {
        Some(path) => {
            println!("Loading dataset from {}", path);
            load_labeled_csv(&path, "label")?
        }
        None => synthetic_frame(120, 7)?,
    };
    println!(
        "Dataset: {} samples, {} features",
        frame.nrows(),
        frame.ncols()
    );

    // Screen and drop collinear features before tuning.
    let flagged = assess_collinearity(&frame, 0.95)?;
    println!("Collinear features above |r| = 0.95: {:?}", flagged);
    let keep: Vec<usize> = frame
        .feature_names
        .iter()
        .enumerate()
        .filter(|(_, name)| !flagged.contains(name))
        .map(|(i, _)| i)
        .collect();
    let frame = frame.select_columns(&keep)?;

    // Standardize, then split.
    let scaler = StandardScaler::fit(&frame.x)?;
    let frame = FeatureFrame::new(scaler.transform(&frame.x)?, frame.feature_names.clone())?;
    let (train, y_train, test, y_test) = train_test_split(&frame, &y, 0.75, 42)?;

    let kernels = [KernelKind::Linear, KernelKind::Gaussian];
    let mut grids = HashMap::new();
    grids.insert(
        KernelKind::Linear,
        KernelGrid {
            c: vec![0.1, 1.0, 10.0],
            ..KernelGrid::default()
        },
    );
    grids.insert(
        KernelKind::Gaussian,
        KernelGrid {
            c: vec![1.0, 10.0],
            gaussian_kernel_eps: vec![0.5, 2.0],
            ..KernelGrid::default()
        },
    );
    let config = SearchConfig {
        k_fold: 5,
        rfe_step: 1,
        random_state: 42,
    };

    let outcomes = perform_grid_search_cv(
        &kernels, &grids, &train, &y_train, &test, &y_test, &config,
    )?;

    let report = search_report(&outcomes)?;
    report.save_to_file("report_svm_grid_search.html")?;
    println!("Report saved to report_svm_grid_search.html");
    Ok(())
}
