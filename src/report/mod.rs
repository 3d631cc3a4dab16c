//! Report layer: PDF rendering and chart descriptors.

pub mod charts;
pub mod pdf;

pub use charts::{factor_bar_chart, risk_gauge, BarChartSpec, GaugeSpec};
pub use pdf::{patient_summary, render_report, report_filename};

/// Error type for report rendering.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("PDF generation error: {0}")]
    Pdf(String),
}
