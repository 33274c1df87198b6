// File: crates/aqi-core/src/calculator.rs
// Summary: AQI from raw pollutant concentrations (EPA PM sub-indices plus linear gas terms).

use serde::{Deserialize, Serialize};

use crate::error::{AqiError, Result};
use crate::quality::Quality;

/// Upper score used when a PM concentration falls outside every segment.
pub const AQI_CEILING: f64 = 500.0;

/// (conc_lo, conc_hi, aqi_lo, aqi_hi), PM2.5 in μg/m³.
const PM25_BREAKPOINTS: [(f64, f64, f64, f64); 6] = [
    (0.0, 12.0, 0.0, 50.0),
    (12.1, 35.4, 51.0, 100.0),
    (35.5, 55.4, 101.0, 150.0),
    (55.5, 150.4, 151.0, 200.0),
    (150.5, 250.4, 201.0, 300.0),
    (250.5, 500.4, 301.0, 500.0),
];

/// PM10 in μg/m³.
const PM10_BREAKPOINTS: [(f64, f64, f64, f64); 6] = [
    (0.0, 54.0, 0.0, 50.0),
    (55.0, 154.0, 51.0, 100.0),
    (155.0, 254.0, 101.0, 150.0),
    (255.0, 354.0, 151.0, 200.0),
    (355.0, 424.0, 201.0, 300.0),
    (425.0, 604.0, 301.0, 500.0),
];

/// Raw concentrations entered by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading {
    pub pm25: f64,
    pub pm10: f64,
    pub o3: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
}

/// Text fields as typed, in the order pm25, pm10, o3, no2, so2, co.
pub type ReadingFields<'a> = [&'a str; 6];

const FIELD_NAMES: [&str; 6] = ["pm25", "pm10", "o3", "no2", "so2", "co"];

impl PollutantReading {
    fn from_values(v: [f64; 6]) -> Self {
        Self { pm25: v[0], pm10: v[1], o3: v[2], no2: v[3], so2: v[4], co: v[5] }
    }

    /// Blank or non-numeric fields become 0.
    pub fn parse_lenient(fields: ReadingFields<'_>) -> Self {
        Self::from_values(fields.map(|f| f.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)))
    }

    /// Blank fields become 0; anything else must be a finite, non-negative number.
    pub fn parse_strict(fields: ReadingFields<'_>) -> Result<Self> {
        let mut out = [0.0; 6];
        for (i, raw) in fields.iter().enumerate() {
            let s = raw.trim();
            if s.is_empty() { continue; }
            out[i] = s
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(|| AqiError::InvalidNumericInput { field: FIELD_NAMES[i], value: raw.to_string() })?;
        }
        Ok(Self::from_values(out))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalculatedAqi {
    pub aqi: u32,
    pub quality: Quality,
    pub pollutants: PollutantReading,
}

fn sub_index(concentration: f64, table: &[(f64, f64, f64, f64)]) -> f64 {
    table
        .iter()
        .find(|(lo, hi, _, _)| *lo <= concentration && concentration <= *hi)
        .map(|&(lo, hi, a_lo, a_hi)| (a_hi - a_lo) / (hi - lo) * (concentration - lo) + a_lo)
        .unwrap_or(AQI_CEILING)
}

/// Raw (unrounded) overall index: the worst pollutant decides.
pub fn overall_index(r: &PollutantReading) -> f64 {
    [
        sub_index(r.pm25, &PM25_BREAKPOINTS),
        sub_index(r.pm10, &PM10_BREAKPOINTS),
        (r.o3 * 1.5).min(AQI_CEILING),
        (r.no2 * 2.0).min(AQI_CEILING),
        (r.so2 * 3.0).min(AQI_CEILING),
        (r.co * 10.0).min(AQI_CEILING),
    ]
    .into_iter()
    .fold(0.0, f64::max)
}

/// Whole AQI rounds half to even, matching the live calculator endpoint.
pub fn calculate_aqi(reading: &PollutantReading) -> CalculatedAqi {
    let raw = overall_index(reading);
    CalculatedAqi {
        aqi: raw.round_ties_even() as u32,
        quality: Quality::from_aqi(raw),
        pollutants: *reading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pm25_segment_edges() {
        let r = PollutantReading { pm25: 35.4, ..Default::default() };
        assert_eq!(calculate_aqi(&r).aqi, 100);
        let r = PollutantReading { pm25: 12.0, ..Default::default() };
        assert_eq!(calculate_aqi(&r).aqi, 50);
        let r = PollutantReading { pm25: 6.0, ..Default::default() };
        assert_eq!(calculate_aqi(&r).quality, Quality::Good);
    }

    #[test]
    fn worst_pollutant_dominates() {
        let r = PollutantReading { pm25: 10.0, pm10: 20.0, o3: 100.0, ..Default::default() };
        let c = calculate_aqi(&r);
        assert_eq!(c.aqi, 150);
        assert_eq!(c.quality, Quality::UnhealthyForSensitive);
    }

    #[test]
    fn halves_round_to_even() {
        let r = PollutantReading { o3: 67.0, ..Default::default() };
        assert_eq!(overall_index(&r), 100.5);
        assert_eq!(calculate_aqi(&r).aqi, 100);
        let r = PollutantReading { no2: 50.75, ..Default::default() };
        assert_eq!(calculate_aqi(&r).aqi, 102);
    }

    #[test]
    fn out_of_range_pm_scores_ceiling() {
        let r = PollutantReading { pm25: 900.0, ..Default::default() };
        assert_eq!(calculate_aqi(&r).aqi, 500);
        assert_eq!(calculate_aqi(&r).quality, Quality::Hazardous);
    }

    #[test]
    fn lenient_parse_coerces_garbage_to_zero() {
        let r = PollutantReading::parse_lenient(["12.5", "abc", "", " 7 ", "NaN", "-1"]);
        assert_eq!(r, PollutantReading { pm25: 12.5, pm10: 0.0, o3: 0.0, no2: 7.0, so2: 0.0, co: -1.0 });
    }

    #[test]
    fn strict_parse_reports_the_field() {
        let err = PollutantReading::parse_strict(["1", "2", "x", "", "", ""]).unwrap_err();
        assert!(matches!(err, AqiError::InvalidNumericInput { field: "o3", .. }));
        assert!(PollutantReading::parse_strict(["1", "", "", "", "", "-3"]).is_err());
        assert_eq!(PollutantReading::parse_strict(["", "", "", "", "", ""]).unwrap(), PollutantReading::default());
    }
}
