//! Data structures and helpers for loading and manipulating tabular datasets.
//!
//! This module defines `FeatureFrame`, the crate's stand-in for a labeled
//! dataframe: an owned feature matrix plus column names. It also contains
//! the CSV loader used by the demos and a seeded train/test split helper.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::TuneError;

/// A feature matrix with named columns. Rows are samples.
#[derive(Debug, Clone)]
pub struct FeatureFrame {
    pub x: Array2<f64>,
    pub feature_names: Vec<String>,
}

impl FeatureFrame {
    pub fn new(x: Array2<f64>, feature_names: Vec<String>) -> Result<Self, TuneError> {
        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(TuneError::EmptyDataset);
        }
        if feature_names.len() != x.ncols() {
            return Err(TuneError::LengthMismatch {
                expected: x.ncols(),
                got: feature_names.len(),
            });
        }
        Ok(FeatureFrame { x, feature_names })
    }

    pub fn nrows(&self) -> usize {
        self.x.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.x.ncols()
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.feature_names.iter().position(|n| n == name)
    }

    /// New frame containing only the given columns, in the given order.
    pub fn select_columns(&self, indices: &[usize]) -> Result<FeatureFrame, TuneError> {
        if indices.is_empty() {
            return Err(TuneError::EmptyDataset);
        }
        let x = self.x.select(ndarray::Axis(1), indices);
        let feature_names = indices
            .iter()
            .map(|&i| self.feature_names[i].clone())
            .collect();
        FeatureFrame::new(x, feature_names)
    }

    /// New frame containing only the given rows.
    pub fn select_rows(&self, indices: &[usize]) -> Result<FeatureFrame, TuneError> {
        if indices.is_empty() {
            return Err(TuneError::EmptyDataset);
        }
        let x = self.x.select(ndarray::Axis(0), indices);
        FeatureFrame::new(x, self.feature_names.clone())
    }
}

/// Load a labeled CSV file into a feature frame and boolean class labels.
///
/// The header row provides feature names. The column named `label_col` is
/// parsed as an integer class label (positive values map to `true`); every
/// other column must be numeric and becomes a feature.
pub fn load_labeled_csv<P: AsRef<Path>>(
    path: P,
    label_col: &str,
) -> anyhow::Result<(FeatureFrame, Array1<bool>)> {
    let file = File::open(path.as_ref())?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()?
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<_>>();

    let label_idx = headers
        .iter()
        .position(|h| h == label_col)
        .ok_or_else(|| anyhow::anyhow!("Label column '{}' not found in header", label_col))?;

    let feature_indices: Vec<usize> = (0..headers.len()).filter(|&i| i != label_idx).collect();
    let feature_names = feature_indices
        .iter()
        .map(|&i| headers[i].clone())
        .collect::<Vec<_>>();

    let mut labels = Vec::new();
    let mut features = Vec::new();

    for result in reader.records() {
        let record = result?;
        labels.push(record[label_idx].parse::<i32>()? > 0);
        for &i in &feature_indices {
            features.push(record[i].parse::<f64>()?);
        }
    }

    let n_rows = labels.len();
    let n_cols = feature_indices.len();
    let x = Array2::from_shape_vec((n_rows, n_cols), features)?;

    let frame = FeatureFrame::new(x, feature_names)?;
    Ok((frame, Array1::from_vec(labels)))
}

/// Split a frame and its labels into shuffled train/test partitions.
///
/// `train_fraction` rows (rounded down, at least one in each partition) go
/// to the training set. The shuffle is seeded so splits are reproducible.
pub fn train_test_split(
    frame: &FeatureFrame,
    y: &Array1<bool>,
    train_fraction: f64,
    seed: u64,
) -> Result<(FeatureFrame, Array1<bool>, FeatureFrame, Array1<bool>), TuneError> {
    let n_samples = frame.nrows();
    if y.len() != n_samples {
        return Err(TuneError::LengthMismatch {
            expected: n_samples,
            got: y.len(),
        });
    }
    if n_samples < 2 {
        return Err(TuneError::EmptyDataset);
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..n_samples).collect();
    indices.shuffle(&mut rng);

    let n_train = ((n_samples as f64 * train_fraction) as usize).clamp(1, n_samples - 1);
    let (train_idx, test_idx) = indices.split_at(n_train);

    let y_train = train_idx.iter().map(|&i| y[i]).collect::<Array1<bool>>();
    let y_test = test_idx.iter().map(|&i| y[i]).collect::<Array1<bool>>();
    Ok((
        frame.select_rows(train_idx)?,
        y_train,
        frame.select_rows(test_idx)?,
        y_test,
    ))
}
