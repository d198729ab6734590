use plotly::common::Mode;
use plotly::layout::{Axis, Layout};
use plotly::{Plot, Scatter};

/// Plot the mean cross-validation accuracy of every grid candidate.
pub fn plot_cv_scores(mean_scores: &[f64], title: &str) -> Result<Plot, String> {
    if mean_scores.is_empty() {
        return Err("No candidate scores to plot".to_string());
    }

    let candidate_index: Vec<f64> = (0..mean_scores.len()).map(|i| i as f64).collect();

    let trace = Scatter::new(candidate_index, mean_scores.to_vec())
        .mode(Mode::LinesMarkers)
        .name("mean CV accuracy");

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Candidate"))
        .y_axis(Axis::new().title("Accuracy"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);

    Ok(plot)
}

/// Plot the per-fold accuracy of the winning candidate.
pub fn plot_fold_scores(fold_scores: &[f64], title: &str) -> Result<Plot, String> {
    if fold_scores.is_empty() {
        return Err("No fold scores to plot".to_string());
    }

    let fold_number: Vec<f64> = (1..=fold_scores.len()).map(|i| i as f64).collect();

    let trace = Scatter::new(fold_number, fold_scores.to_vec())
        .mode(Mode::Markers)
        .name("fold accuracy");

    let layout = Layout::new()
        .title(title)
        .x_axis(Axis::new().title("Fold"))
        .y_axis(Axis::new().title("Accuracy"));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);

    Ok(plot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cv_plot_requires_scores() {
        assert!(plot_cv_scores(&[], "empty").is_err());
        assert!(plot_cv_scores(&[0.8, 0.9], "ok").is_ok());
    }

    #[test]
    fn fold_plot_requires_scores() {
        assert!(plot_fold_scores(&[], "empty").is_err());
        assert!(plot_fold_scores(&[1.0, 0.5, 0.75], "ok").is_ok());
    }
}
