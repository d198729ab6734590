pub mod plots;
pub mod report;

pub use report::{search_report, Report, ReportSection};
