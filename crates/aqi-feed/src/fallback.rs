// File: crates/aqi-feed/src/fallback.rs
// Summary: Fallback policy: try the live feed, substitute generator output on any error.
// Notes:
// - `Source` is only reported in logs; callers render live and synthetic data the same way.

use std::fmt;
use std::sync::Arc;

use aqi_core::{
    calculate_aqi, CalculatedAqi, CityTable, ForecastPoint, Generator, HourlyPoint, PollutantReading, SeasonPolicy,
};
use chrono::NaiveDate;

use crate::client::FeedClient;
use crate::error::FetchError;
use crate::reading::CityReading;

/// Base AQI for the hourly fallback when the day is not in the forecast.
pub const HOURLY_FALLBACK_BASE: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Live,
    Synthetic,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::Live => "live",
            Source::Synthetic => "synthetic",
        })
    }
}

/// Data tagged with where it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct Sourced<T> {
    pub data: T,
    pub source: Source,
}

impl<T> Sourced<T> {
    pub fn live(data: T) -> Self {
        Self { data, source: Source::Live }
    }

    pub fn synthetic(data: T) -> Self {
        Self { data, source: Source::Synthetic }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

/// Keep `result` if it succeeded, otherwise log and use `synth()`.
pub fn or_synthetic<T>(what: &str, result: Result<T, FetchError>, synth: impl FnOnce() -> T) -> Sourced<T> {
    match result {
        Ok(data) => Sourced::live(data),
        Err(e) => {
            log::warn!("{what}: {e}; using synthetic data");
            Sourced::synthetic(synth())
        }
    }
}

/// Base AQI for a day's hourly fallback: that day's forecast value, else 100.
pub fn hourly_base(forecast: &[ForecastPoint], date: NaiveDate) -> u32 {
    forecast.iter().find(|d| d.date == date).map_or(HOURLY_FALLBACK_BASE, |d| d.aqi)
}

/// Feed front end. With no client (offline mode) every call is synthetic.
#[derive(Clone, Debug)]
pub struct Feed {
    client: Option<FeedClient>,
    cities: Arc<CityTable>,
    season: SeasonPolicy,
}

impl Feed {
    pub fn new(client: Option<FeedClient>, cities: Arc<CityTable>, season: SeasonPolicy) -> Self {
        Self { client, cities, season }
    }

    pub fn offline(cities: Arc<CityTable>, season: SeasonPolicy) -> Self {
        Self::new(None, cities, season)
    }

    pub fn is_offline(&self) -> bool {
        self.client.is_none()
    }

    pub fn cities(&self) -> &CityTable {
        &self.cities
    }

    /// Generator anchored on today's date.
    pub fn generator(&self) -> Generator<'_> {
        Generator::new(&self.cities).with_season(self.season)
    }

    pub async fn city_readings(&self) -> Sourced<Vec<CityReading>> {
        let synth = || {
            let g = self.generator();
            self.cities.iter().map(|c| CityReading::synthetic(c, &g)).collect()
        };
        match &self.client {
            Some(c) => or_synthetic("city list", c.cities().await, synth),
            None => Sourced::synthetic(synth()),
        }
    }

    pub async fn forecast(&self, city: &str) -> Sourced<Vec<ForecastPoint>> {
        let synth = || {
            let profile = self.cities.resolve(city);
            self.generator().forecast(profile.base_aqi, &profile.name)
        };
        match &self.client {
            Some(c) => or_synthetic(&format!("forecast for {city}"), c.forecast(city).await, synth),
            None => Sourced::synthetic(synth()),
        }
    }

    /// Hourly breakdown of `date`; the fallback is seeded from that day in `forecast`.
    pub async fn hourly(&self, city: &str, date: NaiveDate, forecast: &[ForecastPoint]) -> Sourced<Vec<HourlyPoint>> {
        let synth = || self.generator().hourly(hourly_base(forecast, date), city);
        match &self.client {
            Some(c) => or_synthetic(&format!("hourly data for {city} on {date}"), c.hourly(city, date).await, synth),
            None => Sourced::synthetic(synth()),
        }
    }

    pub async fn calculate(&self, reading: &PollutantReading) -> Sourced<CalculatedAqi> {
        let synth = || calculate_aqi(reading);
        match &self.client {
            Some(c) => or_synthetic("AQI calculation", c.calculate(reading).await, synth),
            None => Sourced::synthetic(synth()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hourly_base_uses_the_matching_day() {
        let t = CityTable::builtin().unwrap();
        let g = Generator::new(&t).with_today(NaiveDate::from_ymd_opt(2024, 12, 14).unwrap());
        let f = g.forecast(168, "Delhi");
        assert_eq!(hourly_base(&f, NaiveDate::from_ymd_opt(2024, 12, 17).unwrap()), f[3].aqi);
        assert_eq!(hourly_base(&f, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()), 100);
    }

    #[test]
    fn or_synthetic_keeps_success() {
        let s = or_synthetic("x", Ok(1), || 2);
        assert_eq!(s, Sourced::live(1));
    }
}
