//! svmtune: collinearity screening and grid-search SVM tuning.
//!
//! This crate provides two small analysis utilities for tabular ML
//! workflows: a collinearity screen that flags highly correlated feature
//! columns, and a grid-search tuner that combines recursive feature
//! elimination with cross-validated hyperparameter search for
//! support-vector classifiers across kernel types.
//!
//! The SVM solver itself is `linfa-svm`; this crate only orchestrates
//! feature selection, fold splitting, candidate evaluation, and metric
//! reporting around it.
pub mod config;
pub mod data_handling;
pub mod error;
pub mod feature_selection;
pub mod metrics;
pub mod model_selection;
pub mod models;
pub mod preprocessing;
pub mod report;
pub mod stats;
pub mod tuner;
