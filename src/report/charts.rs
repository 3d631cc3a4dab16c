//! Chart descriptors for the risk gauge and factor bar charts.
//!
//! These are presentation artifacts: serializable specs a front end can hand
//! to its charting layer. No statistics are computed here; the values come
//! from the classifier probability or the factor-impact heuristic tables.

use serde::Serialize;

/// Severity bands of the risk gauge, on a 0-100 scale.
pub const GAUGE_BANDS: [(f64, f64, &str); 3] = [
    (0.0, 30.0, "#4CAF50"),
    (30.0, 70.0, "#FFC107"),
    (70.0, 100.0, "#F44336"),
];

/// Bar colors, cycled across factors.
pub const RAINBOW_COLORS: [&str; 16] = [
    "#FF0000", "#FF5500", "#FFAA00", "#FFFF00", "#AAFF00", "#55FF00", "#00FF00", "#00FF55",
    "#00FFAA", "#00FFFF", "#00AAFF", "#0055FF", "#0000FF", "#5500FF", "#AA00FF", "#FF00FF",
];

/// One colored band of the gauge dial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GaugeBand {
    pub start: f64,
    pub end: f64,
    pub color: &'static str,
}

/// Single-value gauge descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeSpec {
    pub title: String,
    /// Needle position, percent (0-100)
    pub value: f64,
    pub bar_color: &'static str,
    pub bands: [GaugeBand; 3],
}

/// Build the risk gauge descriptor from a probability in [0, 1].
#[must_use]
pub fn risk_gauge(probability: f64, title: &str) -> GaugeSpec {
    let bands = GAUGE_BANDS.map(|(start, end, color)| GaugeBand { start, end, color });
    GaugeSpec {
        title: title.to_string(),
        value: probability * 100.0,
        bar_color: "#0a9396",
        bands,
    }
}

/// One bar of a categorical bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub color: &'static str,
}

/// Categorical bar chart descriptor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChartSpec {
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub bars: Vec<Bar>,
}

/// Build a factor bar chart; colors cycle through [`RAINBOW_COLORS`].
#[must_use]
pub fn factor_bar_chart(labels: &[&str], values: &[f64], title: &str) -> BarChartSpec {
    let bars = labels
        .iter()
        .zip(values.iter())
        .enumerate()
        .map(|(i, (label, value))| Bar {
            label: (*label).to_string(),
            value: *value,
            color: RAINBOW_COLORS[i % RAINBOW_COLORS.len()],
        })
        .collect();

    BarChartSpec {
        title: title.to_string(),
        x_title: "Factors",
        y_title: "Impact",
        bars,
    }
}
