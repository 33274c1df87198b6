// File: crates/aqi-core/src/pollutant.rs
// Summary: Pollutant sub-values derived from AQI, and the selectable chart metrics.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-pollutant values shown alongside an AQI.
/// Derived with fixed display ratios, not a physical conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollutantSet {
    pub pm25: u32,
    pub pm10: u32,
    pub o3: u32,
    pub no2: u32,
    pub so2: u32,
    pub co: u32,
}

pub const PM25_RATIO: f64 = 0.6;
pub const PM10_RATIO: f64 = 0.8;
pub const O3_RATIO: f64 = 0.4;
pub const NO2_RATIO: f64 = 0.3;
pub const SO2_RATIO: f64 = 0.2;
pub const CO_RATIO: f64 = 0.1;

impl PollutantSet {
    pub fn from_aqi(aqi: u32) -> Self {
        let part = |ratio: f64| (aqi as f64 * ratio).floor() as u32;
        Self {
            pm25: part(PM25_RATIO),
            pm10: part(PM10_RATIO),
            o3: part(O3_RATIO),
            no2: part(NO2_RATIO),
            so2: part(SO2_RATIO),
            co: part(CO_RATIO),
        }
    }

    pub fn get(&self, metric: Metric) -> Option<u32> {
        match metric {
            Metric::Pm25 => Some(self.pm25),
            Metric::Pm10 => Some(self.pm10),
            Metric::O3 => Some(self.o3),
            Metric::No2 => Some(self.no2),
            Metric::So2 => Some(self.so2),
            Metric::Co => Some(self.co),
            Metric::Aqi | Metric::Temperature | Metric::Humidity => None,
        }
    }
}

/// A plottable field of a series record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Aqi,
    Pm25,
    Pm10,
    O3,
    No2,
    So2,
    Co,
    Temperature,
    Humidity,
}

impl Metric {
    pub const ALL: [Metric; 9] = [
        Metric::Aqi,
        Metric::Pm25,
        Metric::Pm10,
        Metric::O3,
        Metric::No2,
        Metric::So2,
        Metric::Co,
        Metric::Temperature,
        Metric::Humidity,
    ];

    /// Field name as used in the JSON records and on the command line.
    pub const fn field(self) -> &'static str {
        match self {
            Metric::Aqi => "aqi",
            Metric::Pm25 => "pm25",
            Metric::Pm10 => "pm10",
            Metric::O3 => "o3",
            Metric::No2 => "no2",
            Metric::So2 => "so2",
            Metric::Co => "co",
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Metric::Aqi => "AQI",
            Metric::Pm25 => "PM2.5",
            Metric::Pm10 => "PM10",
            Metric::O3 => "O3",
            Metric::No2 => "NO2",
            Metric::So2 => "SO2",
            Metric::Co => "CO",
            Metric::Temperature => "Temperature",
            Metric::Humidity => "Humidity",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Metric::Aqi => "",
            Metric::Pm25 | Metric::Pm10 => "μg/m³",
            Metric::O3 | Metric::No2 | Metric::So2 => "ppb",
            Metric::Co => "ppm",
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

impl FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let want = s.trim().to_ascii_lowercase().replace('.', "");
        Metric::ALL
            .into_iter()
            .find(|m| m.field() == want)
            .ok_or_else(|| format!("unknown metric '{s}' (expected one of aqi, pm25, pm10, o3, no2, so2, co, temperature, humidity)"))
    }
}
