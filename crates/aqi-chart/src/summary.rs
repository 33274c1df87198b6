// File: crates/aqi-chart/src/summary.rs
// Summary: Supplementary breakdowns: quality-category tally and per-day pollutant rows.

use std::collections::BTreeMap;

use aqi_core::{ForecastPoint, Quality, Sample};

/// How many records fall into each category; categories with no records are absent.
pub fn distribution_summary<S: Sample>(series: &[S]) -> BTreeMap<Quality, usize> {
    let mut counts = BTreeMap::new();
    for s in series {
        *counts.entry(s.quality()).or_insert(0) += 1;
    }
    counts
}

/// One bar group of the pollutant comparison view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollutantRow {
    /// Three-letter day name.
    pub day: String,
    pub pm25: u32,
    pub pm10: u32,
    pub o3: u32,
    pub no2: u32,
}

pub fn pollutant_breakdown(forecast: &[ForecastPoint]) -> Vec<PollutantRow> {
    forecast
        .iter()
        .map(|d| PollutantRow {
            day: d.day_name.chars().take(3).collect(),
            pm25: d.pollutants.pm25,
            pm10: d.pollutants.pm10,
            o3: d.pollutants.o3,
            no2: d.pollutants.no2,
        })
        .collect()
}
