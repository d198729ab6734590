pub mod grid_search;
pub mod kfold;

pub use grid_search::{CandidateResult, GridSearchCv, GridSearchResult};
pub use kfold::{cross_val_accuracy, KFold};
