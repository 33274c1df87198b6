// File: crates/aqi-core/src/series.rs
// Summary: Series records (daily forecast, hourly, historical) and the `Sample` view the chart reads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pollutant::{Metric, PollutantSet};
use crate::quality::Quality;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub day_name: String,
    pub aqi: u32,
    pub quality: Quality,
    pub temperature: i32,
    pub humidity: u32,
    #[serde(flatten)]
    pub pollutants: PollutantSet,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPoint {
    /// "HH:00"
    pub hour: String,
    pub aqi: u32,
    pub quality: Quality,
    pub temperature: i32,
    pub humidity: u32,
    #[serde(flatten)]
    pub pollutants: PollutantSet,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub aqi: u32,
    pub quality: Quality,
}

/// Read access to one record of a plotted series.
pub trait Sample {
    /// Value of `metric`, or `None` when the record does not carry it.
    fn value(&self, metric: Metric) -> Option<f64>;
    /// Short axis label ("Monday", "08:00", "Dec 14").
    fn label(&self) -> String;
    fn quality(&self) -> Quality;
}

impl Sample for ForecastPoint {
    fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Aqi => Some(self.aqi as f64),
            Metric::Temperature => Some(self.temperature as f64),
            Metric::Humidity => Some(self.humidity as f64),
            m => self.pollutants.get(m).map(f64::from),
        }
    }
    fn label(&self) -> String { self.day_name.clone() }
    fn quality(&self) -> Quality { self.quality }
}

impl Sample for HourlyPoint {
    fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Aqi => Some(self.aqi as f64),
            Metric::Temperature => Some(self.temperature as f64),
            Metric::Humidity => Some(self.humidity as f64),
            m => self.pollutants.get(m).map(f64::from),
        }
    }
    fn label(&self) -> String { self.hour.clone() }
    fn quality(&self) -> Quality { self.quality }
}

impl Sample for HistoricalPoint {
    fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Aqi => Some(self.aqi as f64),
            _ => None,
        }
    }
    fn label(&self) -> String { self.date.format("%b %-d").to_string() }
    fn quality(&self) -> Quality { self.quality }
}
