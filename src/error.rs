use std::error::Error;
use std::fmt;

/// Custom error type for tuning and screening failures
#[derive(Debug)]
pub enum TuneError {
    /// Row counts of two aligned inputs disagree
    LengthMismatch { expected: usize, got: usize },
    /// A frame or target vector with zero rows or zero columns
    EmptyDataset,
    /// Grid expansion produced no candidates for a kernel
    EmptyGrid(String),
    /// Fewer than two folds, or more folds than samples
    BadFoldCount { k: usize, n_samples: usize },
    /// Prediction requested before `fit`
    NotFitted,
    /// The underlying SVM solver failed
    Train(String),
    /// Score comparison was undefined (NaN in the score array)
    UndefinedOrder,
}

impl fmt::Display for TuneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TuneError::LengthMismatch { expected, got } => {
                write!(f, "Expected {} rows but got {}", expected, got)
            }
            TuneError::EmptyDataset => write!(f, "Dataset has no rows or no columns"),
            TuneError::EmptyGrid(kernel) => {
                write!(f, "Parameter grid for {} kernel expands to no candidates", kernel)
            }
            TuneError::BadFoldCount { k, n_samples } => {
                write!(f, "Cannot split {} samples into {} folds", n_samples, k)
            }
            TuneError::NotFitted => write!(f, "Model has not been fitted yet"),
            TuneError::Train(msg) => write!(f, "SVM training failed: {}", msg),
            TuneError::UndefinedOrder => write!(f, "Found NaN while comparing scores"),
        }
    }
}

impl Error for TuneError {}
