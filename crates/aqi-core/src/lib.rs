// File: crates/aqi-core/src/lib.rs
// Summary: Core library entry point; city table, synthetic series generator and health advice.

pub mod error;
pub mod quality;
pub mod pollutant;
pub mod season;
pub mod city;
pub mod series;
pub mod generator;
pub mod advice;
pub mod calculator;

pub use error::{AqiError, Result};
pub use quality::Quality;
pub use pollutant::{Metric, PollutantSet};
pub use season::{Season, SeasonPolicy, SeasonalPattern};
pub use city::{CityMatch, CityProfile, CityTable};
pub use series::{ForecastPoint, HistoricalPoint, HourlyPoint, Sample};
pub use generator::{CitySnapshot, Generator};
pub use advice::{ai_insight, health_measures, recommendation, AgeProfile, HealthMeasures, Insight};
pub use calculator::{calculate_aqi, CalculatedAqi, PollutantReading};
