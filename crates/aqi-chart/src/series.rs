// File: crates/aqi-chart/src/series.rs
// Summary: Plot style for a series (smoothed line with area fill, or bars).

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeriesType {
    /// Midpoint-smoothed stroke, gradient area to the baseline, point markers.
    #[default]
    Line,
    /// One bar per point, 60% of the per-point slot.
    Bar,
}

impl SeriesType {
    pub const fn name(self) -> &'static str {
        match self {
            SeriesType::Line => "line",
            SeriesType::Bar => "bar",
        }
    }
}

impl fmt::Display for SeriesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeriesType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(SeriesType::Line),
            "bar" | "bars" => Ok(SeriesType::Bar),
            other => Err(format!("unknown series type '{other}' (expected line or bar)")),
        }
    }
}
