// File: crates/aqi-core/src/quality.rs
// Summary: AQI quality categories and the fixed breakpoint table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Qualitative AQI category, ordered from least to most severe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quality {
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Unhealthy for Sensitive Groups")]
    UnhealthyForSensitive,
    #[serde(rename = "Unhealthy")]
    Unhealthy,
    #[serde(rename = "Very Unhealthy")]
    VeryUnhealthy,
    #[serde(rename = "Hazardous")]
    Hazardous,
}

/// Inclusive upper bounds of each category except `Hazardous`.
/// Plain "<= threshold" cutoffs, not EPA sub-index interpolation.
pub const BREAKPOINTS: [(f64, Quality); 5] = [
    (50.0, Quality::Good),
    (100.0, Quality::Moderate),
    (150.0, Quality::UnhealthyForSensitive),
    (200.0, Quality::Unhealthy),
    (300.0, Quality::VeryUnhealthy),
];

impl Quality {
    pub const ALL: [Quality; 6] = [
        Quality::Good,
        Quality::Moderate,
        Quality::UnhealthyForSensitive,
        Quality::Unhealthy,
        Quality::VeryUnhealthy,
        Quality::Hazardous,
    ];

    pub fn from_aqi(aqi: f64) -> Self {
        for (upper, q) in BREAKPOINTS {
            if aqi <= upper { return q; }
        }
        Quality::Hazardous
    }

    pub const fn label(self) -> &'static str {
        match self {
            Quality::Good => "Good",
            Quality::Moderate => "Moderate",
            Quality::UnhealthyForSensitive => "Unhealthy for Sensitive Groups",
            Quality::Unhealthy => "Unhealthy",
            Quality::VeryUnhealthy => "Very Unhealthy",
            Quality::Hazardous => "Hazardous",
        }
    }

    /// 0 for `Good` up to 5 for `Hazardous`.
    pub fn severity(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Quality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Quality::ALL
            .into_iter()
            .find(|q| q.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown quality category: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive() {
        assert_eq!(Quality::from_aqi(0.0), Quality::Good);
        assert_eq!(Quality::from_aqi(50.0), Quality::Good);
        assert_eq!(Quality::from_aqi(51.0), Quality::Moderate);
        assert_eq!(Quality::from_aqi(100.0), Quality::Moderate);
        assert_eq!(Quality::from_aqi(150.0), Quality::UnhealthyForSensitive);
        assert_eq!(Quality::from_aqi(151.0), Quality::Unhealthy);
        assert_eq!(Quality::from_aqi(200.0), Quality::Unhealthy);
        assert_eq!(Quality::from_aqi(235.0), Quality::VeryUnhealthy);
        assert_eq!(Quality::from_aqi(300.0), Quality::VeryUnhealthy);
        assert_eq!(Quality::from_aqi(301.0), Quality::Hazardous);
    }

    #[test]
    fn severity_never_decreases() {
        let mut last = Quality::Good;
        for aqi in 0..=600 {
            let q = Quality::from_aqi(aqi as f64);
            assert!(q >= last, "aqi {aqi} went from {last} to {q}");
            last = q;
        }
        assert_eq!(last.severity(), 5);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        assert_eq!("unhealthy for sensitive groups".parse::<Quality>(), Ok(Quality::UnhealthyForSensitive));
        assert!("smoky".parse::<Quality>().is_err());
    }
}
