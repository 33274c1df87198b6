// File: crates/aqi-feed/src/reading.rs
// Summary: City-list record served by `/api/cities`, and its synthetic stand-in.

use aqi_core::{CityProfile, Generator, PollutantSet, Quality};
use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// `source` value carried by locally generated readings.
pub const SYNTHETIC_SOURCE: &str = "Synthetic";

/// Concentrations passed through from the upstream provider; fractional, and
/// absent fields read as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Concentrations {
    pub pm25: f64,
    pub pm10: f64,
    pub o3: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
}

impl From<PollutantSet> for Concentrations {
    fn from(p: PollutantSet) -> Self {
        Self {
            pm25: p.pm25 as f64,
            pm10: p.pm10 as f64,
            o3: p.o3 as f64,
            no2: p.no2 as f64,
            so2: p.so2 as f64,
            co: p.co as f64,
        }
    }
}

/// Whole AQI from a JSON number that may carry a fraction; rounds half up, negatives read as 0.
fn rounded_aqi<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
    let v = f64::deserialize(d)?;
    Ok(if v.is_finite() && v > 0.0 { (v + 0.5).floor() as u32 } else { 0 })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityReading {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(deserialize_with = "rounded_aqi")]
    pub aqi: u32,
    pub quality: Quality,
    #[serde(flatten)]
    pub pollutants: Concentrations,
    pub temperature: i32,
    pub humidity: u32,
    /// Timestamp as reported by the server; RFC 3339 for synthetic readings.
    pub last_updated: String,
    /// Upstream provider name.
    pub source: String,
}

impl CityReading {
    pub fn synthetic(profile: &CityProfile, generator: &Generator<'_>) -> Self {
        Self {
            name: profile.name.clone(),
            lat: profile.lat,
            lng: profile.lng,
            aqi: profile.base_aqi,
            quality: Quality::from_aqi(profile.base_aqi as f64),
            pollutants: PollutantSet::from_aqi(profile.base_aqi).into(),
            temperature: generator.temperature(&profile.name, 0),
            humidity: generator.humidity(&profile.name, 0),
            last_updated: Utc::now().to_rfc3339(),
            source: SYNTHETIC_SOURCE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aqi_core::CityTable;

    #[test]
    fn decodes_server_shape() {
        let body = r#"{"name":"Delhi","lat":28.6139,"lng":77.209,"aqi":168,"quality":"Unhealthy",
            "pm25":100,"pm10":134,"o3":67,"no2":50,"so2":33,"co":16,
            "temperature":31,"humidity":44,"lastUpdated":"2024-12-14T10:00:00","source":"Ambee API"}"#;
        let r: CityReading = serde_json::from_str(body).unwrap();
        assert_eq!(r.quality, Quality::Unhealthy);
        assert_eq!(r.pollutants.pm10, 134.0);
        assert_eq!(r.source, "Ambee API");
    }

    #[test]
    fn decodes_fractional_concentrations() {
        let body = r#"{"name":"Delhi","lat":28.6139,"lng":77.209,"aqi":168.6,"quality":"Unhealthy",
            "pm25":98.37,"pm10":134.2,"o3":21.5,"no2":40.08,"so2":7.9,"co":0.42,
            "temperature":31,"humidity":44,"lastUpdated":"2024-12-14T10:00:00","source":"Ambee API"}"#;
        let r: CityReading = serde_json::from_str(body).unwrap();
        assert_eq!(r.aqi, 169);
        assert_eq!(r.pollutants.pm25, 98.37);
        assert_eq!(r.pollutants.co, 0.42);
    }

    #[test]
    fn missing_concentrations_read_as_zero() {
        let body = r#"{"name":"Pune","lat":18.52,"lng":73.85,"aqi":90,"quality":"Moderate",
            "pm25":31.0,"temperature":28,"humidity":60,"lastUpdated":"now","source":"Ambee API"}"#;
        let r: CityReading = serde_json::from_str(body).unwrap();
        assert_eq!(r.pollutants, Concentrations { pm25: 31.0, ..Default::default() });
    }

    #[test]
    fn synthetic_reading_mirrors_profile() {
        let t = CityTable::builtin().unwrap();
        let g = Generator::new(&t);
        let r = CityReading::synthetic(t.default_city(), &g);
        assert_eq!(r.name, "Delhi");
        assert_eq!(r.aqi, 168);
        assert_eq!(r.pollutants, Concentrations::from(PollutantSet::from_aqi(168)));
        assert_eq!(r.source, SYNTHETIC_SOURCE);
    }
}
