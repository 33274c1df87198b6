// File: crates/aqi-core/src/generator.rs
// Summary: Synthetic series generator: 7-day forecast, 24-hour breakdown, 30-day history.
// Notes:
// - Every series is a closed-form function of (base AQI, city, reference date, season)
//   except the historical jitter, which draws from the caller's RNG.
// - Rounding follows "half up" so x.5 always rounds toward +inf.

use std::f64::consts::PI;

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};
use rand::Rng;
use serde::Serialize;

use crate::advice::recommendation;
use crate::city::{CityTable, DEFAULT_HUMIDITY, DEFAULT_TEMPERATURE};
use crate::pollutant::PollutantSet;
use crate::quality::Quality;
use crate::season::{Season, SeasonPolicy};
use crate::series::{ForecastPoint, HistoricalPoint, HourlyPoint};

/// Day-index multipliers for the 7-day forecast; day 0 is today.
pub const DAY_MULTIPLIERS: [f64; 7] = [1.0, 0.93, 0.87, 0.83, 0.85, 0.92, 0.96];

/// Bimodal rush-hour curve: troughs at 02–03h, peaks at 08h and 19h.
pub const HOURLY_MULTIPLIERS: [f64; 24] = [
    0.7, 0.65, 0.6, 0.6, 0.65, 0.7, 0.85, 1.1, 1.2, 1.15, 1.0, 0.95,
    0.9, 0.85, 0.8, 0.85, 0.9, 1.0, 1.15, 1.25, 1.1, 0.95, 0.85, 0.75,
];

pub const FORECAST_AQI_MIN: u32 = 25;
pub const SERIES_AQI_MIN: u32 = 20;
pub const AQI_MAX: u32 = 300;

/// Days of history before today; the series holds `HISTORY_DAYS + 1` points.
pub const HISTORY_DAYS: i64 = 30;

const HUMIDITY_MIN: f64 = 30.0;
const HUMIDITY_MAX: f64 = 90.0;
/// Hour of the daily temperature peak (and humidity trough).
const PEAK_HOUR: f64 = 14.0;

/// Multiplier applied to history points by how many days ago they are.
pub fn trend_multiplier(days_ago: i64) -> f64 {
    if days_ago > 20 { 1.15 }
    else if days_ago > 15 { 1.10 }
    else if days_ago > 10 { 1.05 }
    else if days_ago > 5 { 1.00 }
    else { 0.95 }
}

#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

#[inline]
fn bounded_aqi(v: f64, min: u32) -> u32 {
    (round_half_up(v).max(0.0) as u32).clamp(min, AQI_MAX)
}

/// Combined per-city record shown on the dashboard.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CitySnapshot {
    pub city: String,
    pub aqi: u32,
    pub quality: Quality,
    pub pollutants: PollutantSet,
    pub recommendation: &'static str,
    pub last_updated: DateTime<Utc>,
    pub forecast: Vec<ForecastPoint>,
    pub historical: Vec<HistoricalPoint>,
}

/// Series generator over an immutable city table.
#[derive(Clone, Copy, Debug)]
pub struct Generator<'a> {
    cities: &'a CityTable,
    season: SeasonPolicy,
    today: NaiveDate,
}

impl<'a> Generator<'a> {
    pub fn new(cities: &'a CityTable) -> Self {
        Self { cities, season: SeasonPolicy::default(), today: Local::now().date_naive() }
    }

    pub fn with_season(mut self, policy: SeasonPolicy) -> Self {
        self.season = policy;
        self
    }

    /// Pin the reference date ("today") the series are anchored on.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn cities(&self) -> &'a CityTable { self.cities }
    pub fn today(&self) -> NaiveDate { self.today }
    pub fn season(&self) -> Season { self.season.resolve(self.today) }

    /// Multiplier for the active season; unknown cities use the default city's pattern.
    pub fn seasonal_factor(&self, city: &str) -> f64 {
        self.cities.resolve(city).seasonal.factor(self.season())
    }

    /// Daily temperature in °C, `day_offset` days from today.
    pub fn temperature(&self, city: &str, day_offset: u32) -> i32 {
        let base = self.cities.find(city).map_or(DEFAULT_TEMPERATURE, |c| c.temperature);
        round_half_up(base + (day_offset as f64 * 0.5).sin() * 2.0) as i32
    }

    /// Daily relative humidity in %, bounded to [30, 90].
    pub fn humidity(&self, city: &str, day_offset: u32) -> u32 {
        let base = self.cities.find(city).map_or(DEFAULT_HUMIDITY, |c| c.humidity);
        let v = base + (day_offset as f64 * 0.3).cos() * 5.0;
        round_half_up(v.clamp(HUMIDITY_MIN, HUMIDITY_MAX)) as u32
    }

    /// Hourly temperature: cosine curve peaking at 14:00.
    pub fn hourly_temperature(&self, city: &str, hour: u32) -> i32 {
        let base = self.temperature(city, 0) as f64;
        let swing = -5.0 * ((hour as f64 - PEAK_HOUR) * PI / 12.0).cos();
        round_half_up(base + swing) as i32
    }

    /// Hourly humidity: cosine curve bottoming at 14:00, bounded to [30, 90].
    pub fn hourly_humidity(&self, city: &str, hour: u32) -> u32 {
        let base = self.humidity(city, 0) as f64;
        let swing = 10.0 * ((hour as f64 - PEAK_HOUR) * PI / 12.0).cos();
        round_half_up((base + swing).clamp(HUMIDITY_MIN, HUMIDITY_MAX)) as u32
    }

    /// Seven daily points starting today.
    pub fn forecast(&self, base_aqi: u32, city: &str) -> Vec<ForecastPoint> {
        let seasonal = self.seasonal_factor(city);
        DAY_MULTIPLIERS
            .iter()
            .enumerate()
            .map(|(i, day)| {
                let date = self.today + Duration::days(i as i64);
                let aqi = bounded_aqi(base_aqi as f64 * seasonal * day, FORECAST_AQI_MIN);
                ForecastPoint {
                    date,
                    day_name: date.format("%A").to_string(),
                    aqi,
                    quality: Quality::from_aqi(aqi as f64),
                    temperature: self.temperature(city, i as u32),
                    humidity: self.humidity(city, i as u32),
                    pollutants: PollutantSet::from_aqi(aqi),
                }
            })
            .collect()
    }

    /// Twenty-four hourly points, "00:00" through "23:00".
    pub fn hourly(&self, base_aqi: u32, city: &str) -> Vec<HourlyPoint> {
        let seasonal = self.seasonal_factor(city);
        HOURLY_MULTIPLIERS
            .iter()
            .enumerate()
            .map(|(hour, m)| {
                let hour = hour as u32;
                let aqi = bounded_aqi(base_aqi as f64 * m * seasonal, SERIES_AQI_MIN);
                HourlyPoint {
                    hour: format!("{hour:02}:00"),
                    aqi,
                    quality: Quality::from_aqi(aqi as f64),
                    temperature: self.hourly_temperature(city, hour),
                    humidity: self.hourly_humidity(city, hour),
                    pollutants: PollutantSet::from_aqi(aqi),
                }
            })
            .collect()
    }

    /// Thirty-one daily points from 30 days ago through today, chronological.
    /// Each point gets a uniform jitter in [0.9, 1.1) from `rng`.
    pub fn historical<R: Rng + ?Sized>(&self, base_aqi: u32, city: &str, rng: &mut R) -> Vec<HistoricalPoint> {
        let seasonal = self.seasonal_factor(city);
        (0..=HISTORY_DAYS)
            .rev()
            .map(|days_ago| {
                let jitter: f64 = rng.gen_range(0.9..1.1);
                let aqi = bounded_aqi(base_aqi as f64 * seasonal * trend_multiplier(days_ago) * jitter, SERIES_AQI_MIN);
                HistoricalPoint {
                    date: self.today - Duration::days(days_ago),
                    aqi,
                    quality: Quality::from_aqi(aqi as f64),
                }
            })
            .collect()
    }

    /// Current reading, forecast and history for `city` (default city when unknown).
    pub fn snapshot<R: Rng + ?Sized>(&self, city: &str, rng: &mut R) -> CitySnapshot {
        let profile = self.cities.resolve(city);
        let quality = Quality::from_aqi(profile.base_aqi as f64);
        CitySnapshot {
            city: profile.name.clone(),
            aqi: profile.base_aqi,
            quality,
            pollutants: PollutantSet::from_aqi(profile.base_aqi),
            recommendation: recommendation(quality),
            last_updated: Utc::now(),
            forecast: self.forecast(profile.base_aqi, &profile.name),
            historical: self.historical(profile.base_aqi, &profile.name, rng),
        }
    }
}
