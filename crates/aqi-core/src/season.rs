// File: crates/aqi-core/src/season.rs
// Summary: Seasons, per-city seasonal multipliers and the season resolution policy.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Winter,
    Summer,
    Monsoon,
    PostMonsoon,
}

impl Season {
    /// Indian meteorological seasons: Dec–Feb, Mar–May, Jun–Sep, Oct–Nov.
    pub fn of_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Summer,
            6..=9 => Season::Monsoon,
            _ => Season::PostMonsoon,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Summer => "summer",
            Season::Monsoon => "monsoon",
            Season::PostMonsoon => "post-monsoon",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Four multipliers describing how a city's pollution varies over the year.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPattern {
    pub winter: f64,
    pub summer: f64,
    pub monsoon: f64,
    pub post_monsoon: f64,
}

impl SeasonalPattern {
    pub fn factor(&self, season: Season) -> f64 {
        match season {
            Season::Winter => self.winter,
            Season::Summer => self.summer,
            Season::Monsoon => self.monsoon,
            Season::PostMonsoon => self.post_monsoon,
        }
    }
}

/// How the generator decides which season it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonPolicy {
    /// Always the same season. `Fixed(Winter)` is the historical default.
    Fixed(Season),
    /// Derived from the month of the reference date.
    Calendar,
}

impl Default for SeasonPolicy {
    fn default() -> Self {
        SeasonPolicy::Fixed(Season::Winter)
    }
}

impl SeasonPolicy {
    pub fn resolve(&self, today: NaiveDate) -> Season {
        match *self {
            SeasonPolicy::Fixed(season) => season,
            SeasonPolicy::Calendar => Season::of_month(today.month()),
        }
    }
}

impl FromStr for SeasonPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar" | "auto" => Ok(SeasonPolicy::Calendar),
            "winter" => Ok(SeasonPolicy::Fixed(Season::Winter)),
            "summer" => Ok(SeasonPolicy::Fixed(Season::Summer)),
            "monsoon" => Ok(SeasonPolicy::Fixed(Season::Monsoon)),
            "post-monsoon" | "postmonsoon" | "post_monsoon" => Ok(SeasonPolicy::Fixed(Season::PostMonsoon)),
            other => Err(format!("unknown season policy: {other}")),
        }
    }
}
