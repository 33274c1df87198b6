// File: crates/aqi-core/src/city.rs
// Summary: Reference city table (base AQI, coordinates, climate, seasonal pattern) and lookups.

use serde::{Deserialize, Serialize};

use crate::error::{AqiError, Result};
use crate::season::SeasonalPattern;

/// Embedded reference data, one row per supported city. The first row is the default city.
pub static CITIES_CSV: &str = include_str!("../fixtures/cities.csv");

/// Base temperature (°C) used for names missing from the table.
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
/// Base relative humidity (%) used for names missing from the table.
pub const DEFAULT_HUMIDITY: f64 = 65.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CityProfile {
    pub name: String,
    pub base_aqi: u32,
    pub lat: f64,
    pub lng: f64,
    /// Typical December temperature in °C.
    pub temperature: f64,
    /// Typical December relative humidity in %.
    pub humidity: f64,
    pub seasonal: SeasonalPattern,
}

#[derive(Debug, Deserialize)]
struct CityRow {
    name: String,
    base_aqi: u32,
    lat: f64,
    lng: f64,
    temperature: f64,
    humidity: f64,
    winter: f64,
    summer: f64,
    monsoon: f64,
    post_monsoon: f64,
}

impl From<CityRow> for CityProfile {
    fn from(r: CityRow) -> Self {
        Self {
            name: r.name,
            base_aqi: r.base_aqi,
            lat: r.lat,
            lng: r.lng,
            temperature: r.temperature,
            humidity: r.humidity,
            seasonal: SeasonalPattern {
                winter: r.winter,
                summer: r.summer,
                monsoon: r.monsoon,
                post_monsoon: r.post_monsoon,
            },
        }
    }
}

/// Result of a name lookup: either the named city or the default it degraded to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CityMatch<'a> {
    Known(&'a CityProfile),
    Fallback(&'a CityProfile),
}

impl<'a> CityMatch<'a> {
    pub fn profile(&self) -> &'a CityProfile {
        match *self {
            CityMatch::Known(p) | CityMatch::Fallback(p) => p,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, CityMatch::Fallback(_))
    }
}

/// Immutable lookup structure over the reference cities.
/// Contract: never empty; `cities[0]` is the default profile.
#[derive(Clone, Debug)]
pub struct CityTable {
    cities: Vec<CityProfile>,
}

impl CityTable {
    /// Parse the embedded table.
    pub fn builtin() -> Result<Self> {
        Self::from_csv(CITIES_CSV)
    }

    /// Parse a table with the same header as `fixtures/cities.csv`.
    pub fn from_csv(data: &str) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());
        let mut cities = Vec::new();
        for row in rdr.deserialize::<CityRow>() {
            cities.push(CityProfile::from(row?));
        }
        if cities.is_empty() {
            return Err(AqiError::EmptyCityTable);
        }
        Ok(Self { cities })
    }

    pub fn default_city(&self) -> &CityProfile {
        &self.cities[0]
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CityProfile> {
        self.cities.iter()
    }

    /// Case-insensitive exact match.
    pub fn find(&self, name: &str) -> Option<&CityProfile> {
        let name = name.trim();
        self.cities.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Lookup that reports whether it had to fall back to the default city.
    pub fn lookup(&self, name: &str) -> CityMatch<'_> {
        match self.find(name) {
            Some(p) => CityMatch::Known(p),
            None => {
                log::debug!("city '{}' not in table; using {}", name, self.default_city().name);
                CityMatch::Fallback(self.default_city())
            }
        }
    }

    /// Silent-fallback lookup.
    pub fn resolve(&self, name: &str) -> &CityProfile {
        self.lookup(name).profile()
    }

    /// Strict lookup for callers that want the unknown-city condition surfaced.
    pub fn require(&self, name: &str) -> Result<&CityProfile> {
        self.find(name).ok_or_else(|| AqiError::UnknownCity(name.to_string()))
    }

    /// Substring search used by the city picker.
    pub fn search(&self, query: &str) -> Vec<&CityProfile> {
        let q = query.trim().to_lowercase();
        self.cities.iter().filter(|c| c.name.to_lowercase().contains(&q)).collect()
    }
}
