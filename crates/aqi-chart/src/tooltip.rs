// File: crates/aqi-chart/src/tooltip.rs
// Summary: Tooltip text for a hovered record.

use aqi_core::{Metric, Sample};

use crate::scale::value_of;

/// Three lines: record label, "<Metric>: <value><unit>", quality label.
pub fn tooltip_text<S: Sample>(sample: &S, metric: Metric) -> String {
    format!(
        "{}\n{}: {}{}\n{}",
        sample.label(),
        metric.label(),
        value_of(sample, metric),
        metric.unit(),
        sample.quality()
    )
}
