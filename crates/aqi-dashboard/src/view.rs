// File: crates/aqi-dashboard/src/view.rs
// Summary: View selection: weekly vs hourly mode, the selected day, and the plotted series.

use std::fmt;
use std::str::FromStr;

use aqi_core::{ForecastPoint, HistoricalPoint, HourlyPoint, Metric, Sample};
use chrono::NaiveDate;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Seven daily points.
    #[default]
    SevenDay,
    /// Twenty-four hourly points of the selected day.
    Hourly,
    /// Thirty-one daily points ending today (AQI only).
    History,
}

impl ViewMode {
    /// Axis label density: every day, every fourth hour, every fifth history day.
    pub const fn label_step(self) -> usize {
        match self {
            ViewMode::SevenDay => 1,
            ViewMode::Hourly => 4,
            ViewMode::History => 5,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ViewMode::SevenDay => "7day",
            ViewMode::Hourly => "24hour",
            ViewMode::History => "30day",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "7day" | "week" | "daily" => Ok(ViewMode::SevenDay),
            "24hour" | "hourly" | "day" => Ok(ViewMode::Hourly),
            "30day" | "history" => Ok(ViewMode::History),
            other => Err(format!("unknown view '{other}' (expected 7day, 24hour or 30day)")),
        }
    }
}

/// The requested day if the forecast covers it, otherwise the first forecast day.
pub fn selected_day(forecast: &[ForecastPoint], requested: Option<NaiveDate>) -> Option<NaiveDate> {
    match requested {
        Some(d) if forecast.iter().any(|p| p.date == d) => Some(d),
        Some(d) => {
            log::debug!("{d} is outside the forecast window; using the first day");
            forecast.first().map(|p| p.date)
        }
        None => forecast.first().map(|p| p.date),
    }
}

/// The series a view plots.
#[derive(Clone, Copy)]
pub enum ActiveSeries<'a> {
    Daily(&'a [ForecastPoint]),
    Hourly(&'a [HourlyPoint]),
    History(&'a [HistoricalPoint]),
}

impl ActiveSeries<'_> {
    pub fn len(&self) -> usize {
        match self {
            ActiveSeries::Daily(s) => s.len(),
            ActiveSeries::Hourly(s) => s.len(),
            ActiveSeries::History(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows of (label, value) for `metric`, missing values as `None`.
    pub fn values(&self, metric: Metric) -> Vec<(String, Option<f64>)> {
        fn rows<S: Sample>(s: &[S], m: Metric) -> Vec<(String, Option<f64>)> {
            s.iter().map(|p| (p.label(), p.value(m))).collect()
        }
        match self {
            ActiveSeries::Daily(s) => rows(s, metric),
            ActiveSeries::Hourly(s) => rows(s, metric),
            ActiveSeries::History(s) => rows(s, metric),
        }
    }
}
