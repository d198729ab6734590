//! Collinearity screening over the upper triangle of the correlation matrix.

use crate::data_handling::FeatureFrame;
use crate::error::TuneError;
use crate::stats::correlation_matrix;

/// Flag feature columns that are highly correlated with an earlier column.
///
/// Computes the pairwise absolute Pearson correlation matrix, masks the
/// lower triangle and diagonal, and collects the names of columns whose
/// correlation with any earlier column strictly exceeds `threshold`.
/// Names are returned in column order.
///
/// Correlations involving zero-variance columns are NaN and never exceed
/// the threshold, so constant columns are not flagged.
pub fn assess_collinearity(
    frame: &FeatureFrame,
    threshold: f64,
) -> Result<Vec<String>, TuneError> {
    let corr = correlation_matrix(&frame.x)?;
    let ncols = frame.ncols();

    let mut collinear = Vec::new();
    for j in 0..ncols {
        let flagged = (0..j).any(|i| corr[(i, j)].abs() > threshold);
        if flagged {
            collinear.push(frame.feature_names[j].clone());
        }
    }
    Ok(collinear)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    /// Features: [random, alternating, constant, 2x the first, noise]
    fn toy_frame() -> FeatureFrame {
        let x = Array2::from_shape_vec(
            (10, 5),
            vec![
                0.1, 1.0, 5.0, 0.2, -0.3, //
                0.4, -1.0, 5.0, 0.8, 0.1, //
                0.6, 1.0, 5.0, 1.2, 0.2, //
                0.9, -1.0, 5.0, 1.8, -0.1, //
                1.2, 1.0, 5.0, 2.4, 0.3, //
                1.5, -1.0, 5.0, 3.0, 0.0, //
                1.8, 1.0, 5.0, 3.6, -0.2, //
                2.1, -1.0, 5.0, 4.2, 0.4, //
                2.4, 1.0, 5.0, 4.8, -0.1, //
                2.7, -1.0, 5.0, 5.4, 0.2,
            ],
        )
        .unwrap();
        FeatureFrame::new(
            x,
            vec![
                "trend".into(),
                "alternating".into(),
                "constant".into(),
                "trend_doubled".into(),
                "noise".into(),
            ],
        )
        .unwrap()
    }

    #[test]
    fn flags_only_the_duplicated_trend() {
        let frame = toy_frame();
        let flagged = assess_collinearity(&frame, 0.95).unwrap();
        assert_eq!(flagged, vec!["trend_doubled".to_string()]);
    }

    #[test]
    fn constant_column_is_never_flagged() {
        let frame = toy_frame();
        // Even with a threshold of zero the NaN correlations of the
        // constant column must not flag it.
        let flagged = assess_collinearity(&frame, 0.0).unwrap();
        assert!(!flagged.contains(&"constant".to_string()));
    }

    #[test]
    fn threshold_is_strict() {
        // Two identical columns: |r| == 1.0 exactly.
        let x = Array2::from_shape_vec(
            (4, 2),
            vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0],
        )
        .unwrap();
        let frame = FeatureFrame::new(x, vec!["a".into(), "b".into()]).unwrap();

        let flagged = assess_collinearity(&frame, 1.0).unwrap();
        assert!(flagged.is_empty(), "r == threshold must not flag");

        let flagged = assess_collinearity(&frame, 0.999).unwrap();
        assert_eq!(flagged, vec!["b".to_string()]);
    }

    #[test]
    fn earlier_column_of_a_pair_is_kept() {
        let frame = toy_frame();
        let flagged = assess_collinearity(&frame, 0.95).unwrap();
        // Only the later member of the correlated pair is reported.
        assert!(!flagged.contains(&"trend".to_string()));
    }
}
