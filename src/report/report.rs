//! HTML report assembly for grid-search diagnostics.

use std::path::Path;

use chrono::Local;
use maud::{html, Markup, PreEscaped, DOCTYPE};
use plotly::Plot;

use crate::config::KernelKind;
use crate::report::plots::{plot_cv_scores, plot_fold_scores};
use crate::tuner::KernelSearchOutcome;

/// One titled section of a report: text blocks followed by plots.
pub struct ReportSection {
    title: String,
    blocks: Vec<Markup>,
    plots: Vec<Plot>,
}

impl ReportSection {
    pub fn new(title: &str) -> Self {
        ReportSection {
            title: title.to_string(),
            blocks: Vec::new(),
            plots: Vec::new(),
        }
    }

    pub fn add_content(&mut self, content: Markup) {
        self.blocks.push(content);
    }

    pub fn add_plot(&mut self, plot: Plot) {
        self.plots.push(plot);
    }

    fn render(&self, section_idx: usize) -> Markup {
        html! {
            section {
                h2 { (self.title) }
                @for block in &self.blocks {
                    div class="content" { (block.clone()) }
                }
                @for (plot_idx, plot) in self.plots.iter().enumerate() {
                    @let div_id = format!("plot-{}-{}", section_idx, plot_idx);
                    div class="plot" {
                        (PreEscaped(plot.to_inline_html(Some(div_id.as_str()))))
                    }
                }
            }
        }
    }
}

/// A standalone HTML report with a header and a list of sections.
pub struct Report {
    title: String,
    version: String,
    subtitle: String,
    created: String,
    sections: Vec<ReportSection>,
}

impl Report {
    pub fn new(title: &str, version: &str, subtitle: &str) -> Self {
        Report {
            title: title.to_string(),
            version: version.to_string(),
            subtitle: subtitle.to_string(),
            created: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            sections: Vec::new(),
        }
    }

    pub fn add_section(&mut self, section: ReportSection) {
        self.sections.push(section);
    }

    pub fn render(&self) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="utf-8";
                    title { (self.title) }
                    script src="https://cdn.plot.ly/plotly-2.12.1.min.js" {}
                    style {
                        "body { font-family: sans-serif; margin: 2em; } "
                        "pre { background: #f5f5f5; padding: 1em; } "
                        "h1 { margin-bottom: 0; } "
                        ".meta { color: #666; }"
                    }
                }
                body {
                    h1 { (self.title) }
                    p class="meta" {
                        (self.subtitle) " — version " (self.version)
                            ", generated " (self.created)
                    }
                    @for (idx, section) in self.sections.iter().enumerate() {
                        (section.render(idx))
                    }
                }
            }
        }
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        std::fs::write(path.as_ref(), self.render().into_string())?;
        Ok(())
    }
}

/// Render the tuner's per-kernel outcomes into a report, one section per
/// kernel in name order.
pub fn search_report(
    outcomes: &std::collections::HashMap<KernelKind, KernelSearchOutcome>,
) -> anyhow::Result<Report> {
    let mut report = Report::new(
        "SVM Grid Search Report",
        env!("CARGO_PKG_VERSION"),
        "Grid-search and feature-elimination diagnostics",
    );

    let mut kernels: Vec<&KernelKind> = outcomes.keys().collect();
    kernels.sort_by_key(|k| k.as_str());

    for kernel in kernels {
        let outcome = &outcomes[kernel];
        let mut section = ReportSection::new(&format!("{} kernel", kernel));

        section.add_content(html! {
            p {
                "Best parameters: "
                code { (format!("{:?}", outcome.best_params)) }
            }
            p {
                (format!(
                    "Training accuracy {:.4}, test accuracy {:.4}, best CV score {:.4}.",
                    outcome.train_accuracy, outcome.test_accuracy, outcome.best_cv_score
                ))
            }
            p {
                (format!("Selected features ({}): ", outcome.selected_features.len()))
                (outcome.selected_features.join(", "))
            }
        });

        let cv_plot = plot_cv_scores(
            &outcome.mean_cv_scores,
            &format!("Mean CV accuracy per candidate ({} kernel)", kernel),
        )
        .map_err(|e| anyhow::anyhow!(e))?;
        section.add_plot(cv_plot);

        let fold_plot = plot_fold_scores(
            &outcome.best_fold_scores,
            &format!("Per-fold accuracy of best candidate ({} kernel)", kernel),
        )
        .map_err(|e| anyhow::anyhow!(e))?;
        section.add_plot(fold_plot);

        section.add_content(html! {
            h3 { "Classification report (training set)" }
            pre { (outcome.train_report.to_string()) }
            h3 { "Classification report (test set)" }
            pre { (outcome.test_report.to_string()) }
        });

        report.add_section(section);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_renders_sections_and_saves() {
        let mut report = Report::new("Test Report", "0.0.0", "subtitle");
        let mut section = ReportSection::new("A Section");
        section.add_content(html! { p { "hello" } });
        section.add_plot(plot_cv_scores(&[0.5, 0.75], "scores").unwrap());
        report.add_section(section);

        let rendered = report.render().into_string();
        assert!(rendered.contains("Test Report"));
        assert!(rendered.contains("A Section"));
        assert!(rendered.contains("hello"));

        let path = std::env::temp_dir().join("svmtune_report_test.html");
        report.save_to_file(&path).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert!(on_disk.contains("A Section"));
        std::fs::remove_file(&path).ok();
    }
}
