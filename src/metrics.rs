//! Classification metrics: accuracy and a per-class report.

use std::fmt;

use ndarray::Array1;

use crate::error::TuneError;

/// Fraction of predictions matching the ground truth.
pub fn accuracy_score(y_true: &Array1<bool>, y_pred: &Array1<bool>) -> Result<f64, TuneError> {
    if y_true.len() != y_pred.len() {
        return Err(TuneError::LengthMismatch {
            expected: y_true.len(),
            got: y_pred.len(),
        });
    }
    if y_true.is_empty() {
        return Err(TuneError::EmptyDataset);
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// Precision, recall, F1 and support for one class.
#[derive(Debug, Clone, Copy)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

impl ClassMetrics {
    fn from_counts(tp: usize, fp: usize, fn_: usize, support: usize) -> Self {
        let precision = ratio(tp, tp + fp);
        let recall = ratio(tp, tp + fn_);
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        ClassMetrics {
            precision,
            recall,
            f1,
            support,
        }
    }
}

fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

/// Per-class classification report with macro and weighted averages.
#[derive(Debug, Clone)]
pub struct ClassificationReport {
    pub negative: ClassMetrics,
    pub positive: ClassMetrics,
    pub accuracy: f64,
    pub macro_avg: ClassMetrics,
    pub weighted_avg: ClassMetrics,
}

/// Build a classification report for boolean labels.
pub fn classification_report(
    y_true: &Array1<bool>,
    y_pred: &Array1<bool>,
) -> Result<ClassificationReport, TuneError> {
    let accuracy = accuracy_score(y_true, y_pred)?;

    let mut tp = 0usize;
    let mut tn = 0usize;
    let mut fp = 0usize;
    let mut fn_ = 0usize;
    for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
        match (t, p) {
            (true, true) => tp += 1,
            (false, false) => tn += 1,
            (false, true) => fp += 1,
            (true, false) => fn_ += 1,
        }
    }

    let pos_support = tp + fn_;
    let neg_support = tn + fp;
    let total = pos_support + neg_support;

    // The negative class treats `false` as the positive label.
    let positive = ClassMetrics::from_counts(tp, fp, fn_, pos_support);
    let negative = ClassMetrics::from_counts(tn, fn_, fp, neg_support);

    let macro_avg = ClassMetrics {
        precision: (positive.precision + negative.precision) / 2.0,
        recall: (positive.recall + negative.recall) / 2.0,
        f1: (positive.f1 + negative.f1) / 2.0,
        support: total,
    };
    let weight = |pos: f64, neg: f64| {
        (pos * pos_support as f64 + neg * neg_support as f64) / total as f64
    };
    let weighted_avg = ClassMetrics {
        precision: weight(positive.precision, negative.precision),
        recall: weight(positive.recall, negative.recall),
        f1: weight(positive.f1, negative.f1),
        support: total,
    };

    Ok(ClassificationReport {
        negative,
        positive,
        accuracy,
        macro_avg,
        weighted_avg,
    })
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:>12} {:>9} {:>9} {:>9} {:>9}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;
        for (label, m) in [("false", &self.negative), ("true", &self.positive)] {
            writeln!(
                f,
                "{:>12} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                label, m.precision, m.recall, m.f1, m.support
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>9} {:>9} {:>9.2} {:>9}",
            "accuracy", "", "", self.accuracy, self.macro_avg.support
        )?;
        for (label, m) in [("macro avg", &self.macro_avg), ("weighted avg", &self.weighted_avg)] {
            writeln!(
                f,
                "{:>12} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                label, m.precision, m.recall, m.f1, m.support
            )?;
        }
        Ok(())
    }
}
