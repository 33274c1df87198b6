// File: crates/aqi-core/src/advice.rs
// Summary: Canned forecast insight, per-category recommendation and age-aware health measures.

use serde::Serialize;
use std::fmt;

use crate::quality::Quality;
use crate::series::ForecastPoint;

/// One of six canned forecast messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Insight {
    Excellent,
    CleanerAhead,
    Moderate,
    StableImproving,
    Concerning,
    Mixed,
}

impl Insight {
    pub const fn message(self) -> &'static str {
        match self {
            Insight::Excellent => "Excellent news! Air quality analysis shows significant improvement over the next week. Perfect time for outdoor activities, morning walks, and family outings in parks.",
            Insight::CleanerAhead => "Weather patterns and wind forecasts indicate cleaner air ahead. Light winds and atmospheric conditions will help disperse pollutants effectively.",
            Insight::Moderate => "Air quality models predict moderate pollution levels. Consider indoor workouts during peak hours and keep windows closed during heavy traffic times.",
            Insight::StableImproving => "Stable air quality expected with gradual improvements. Morning hours will be optimal for outdoor exercise and activities.",
            Insight::Concerning => "Pollution forecasting indicates concerning levels ahead. Stock up on N95 masks and consider investing in HEPA air purifiers for your home.",
            Insight::Mixed => "Mixed conditions expected with fluctuating pollution levels. Early morning and late evening will offer the cleanest air for outdoor activities.",
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Pick a message from the window's mean AQI and its trend (last − first).
/// Returns `None` for an empty window.
pub fn ai_insight(window: &[ForecastPoint]) -> Option<Insight> {
    let (first, last) = (window.first()?, window.last()?);
    let mean = window.iter().map(|d| d.aqi as f64).sum::<f64>() / window.len() as f64;
    let improving = (last.aqi as i64 - first.aqi as i64) < 0;

    let insight = if mean <= 50.0 {
        Insight::Excellent
    } else if mean <= 75.0 {
        if improving { Insight::CleanerAhead } else { Insight::StableImproving }
    } else if mean <= 100.0 {
        if improving { Insight::StableImproving } else { Insight::Moderate }
    } else if mean <= 130.0 {
        if improving { Insight::Moderate } else { Insight::Mixed }
    } else {
        Insight::Concerning
    };
    Some(insight)
}

/// One-line guidance for the current category.
pub fn recommendation(quality: Quality) -> &'static str {
    match quality {
        Quality::Good => "Excellent air quality! Perfect day for outdoor activities, jogging, and spending time in parks.",
        Quality::Moderate => "Air quality is acceptable for most people. Sensitive individuals should consider limiting prolonged outdoor exertion.",
        Quality::UnhealthyForSensitive => "Members of sensitive groups may experience health effects. Consider wearing N95 masks outdoors and using air purifiers indoors.",
        Quality::Unhealthy => "Everyone may begin to experience health effects. Avoid outdoor activities, use air purifiers indoors, and wear N95 masks when going outside.",
        Quality::VeryUnhealthy => "Health warnings of emergency conditions. Stay indoors, use high-quality air purifiers, and avoid all outdoor activities.",
        Quality::Hazardous => "Health alert: everyone may experience serious health effects. Avoid outdoor activities completely and use multiple air purifiers indoors.",
    }
}

// ---- age profile -------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AgeCategory {
    Youth,
    YoungAdult,
    Adult,
    SeniorAdult,
    Elder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskLevel {
    Standard,
    Moderate,
    High,
}

/// Age brackets that drive advice selection. Age 0 counts as "not given".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AgeProfile {
    pub age: Option<u32>,
    pub category: AgeCategory,
    pub risk: RiskLevel,
}

impl AgeProfile {
    pub fn from_age(age: Option<u32>) -> Self {
        let age = age.filter(|&a| a > 0);
        let category = match age {
            None => AgeCategory::Adult,
            Some(a) if a < 18 => AgeCategory::Youth,
            Some(a) if a < 35 => AgeCategory::YoungAdult,
            Some(a) if a < 55 => AgeCategory::Adult,
            Some(a) if a < 70 => AgeCategory::SeniorAdult,
            Some(_) => AgeCategory::Elder,
        };
        let risk = match age {
            Some(a) if a < 18 || a > 65 => RiskLevel::High,
            Some(a) if a > 55 => RiskLevel::Moderate,
            _ => RiskLevel::Standard,
        };
        Self { age, category, risk }
    }

    /// Under 18 or over 65.
    pub fn is_vulnerable(&self) -> bool { self.risk == RiskLevel::High }
    pub fn is_child(&self) -> bool { matches!(self.age, Some(a) if a < 18) }
    pub fn is_elder(&self) -> bool { matches!(self.age, Some(a) if a > 65) }

    fn closing<'s>(&self, child: &'s str, elder: &'s str, other: &'s str) -> &'s str {
        if self.is_child() { child } else if self.is_elder() { elder } else { other }
    }
}

// ---- health measures -----------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MaskOption {
    pub name: &'static str,
    pub effectiveness: &'static str,
    pub price: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurifierOption {
    pub name: &'static str,
    pub room_size: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthMeasures {
    pub masks: Vec<MaskOption>,
    pub purifiers: Vec<PurifierOption>,
    pub general: Vec<&'static str>,
}

const MASKS_MODERATE: &[MaskOption] = &[
    MaskOption { name: "Cotton Cloth Mask", effectiveness: "Basic protection for light pollution", price: "₹50-100" },
    MaskOption { name: "Surgical Mask (3-layer)", effectiveness: "Moderate protection for daily use", price: "₹5-15 per piece" },
];

const MASKS_SENSITIVE: &[MaskOption] = &[
    MaskOption { name: "N95 Mask (NIOSH Certified)", effectiveness: "High protection (95%) - Essential for your age group", price: "₹25-50 per piece" },
    MaskOption { name: "KN95 Mask (FFP2)", effectiveness: "High protection (95%) - Comfortable fit", price: "₹20-40 per piece" },
    MaskOption { name: "P2 Respirator Mask", effectiveness: "Very high protection for sensitive individuals", price: "₹100-200" },
];

const MASKS_SEVERE: &[MaskOption] = &[
    MaskOption { name: "N99 Mask (Medical Grade)", effectiveness: "Maximum protection (99%) - Critical for your age group", price: "₹150-300 per piece" },
    MaskOption { name: "P3 Respirator (FFP3)", effectiveness: "Professional grade protection", price: "₹500-1000" },
    MaskOption { name: "Full Face Respirator", effectiveness: "Complete protection for high-risk individuals", price: "₹2000-5000" },
];

const PURIFIERS_MODERATE: &[PurifierOption] = &[
    PurifierOption { name: "Xiaomi Air Purifier 3H", room_size: "Up to 484 sq ft", price: "₹12,999", features: &["True HEPA filter", "App control", "Real-time monitoring", "Auto mode"] },
    PurifierOption { name: "Honeywell Air Touch A5", room_size: "Up to 500 sq ft", price: "₹15,999", features: &["Pre-filter + HEPA", "Touch panel", "Auto mode", "3-year warranty"] },
];

const PURIFIERS_SENSITIVE: &[PurifierOption] = &[
    PurifierOption { name: "Dyson Pure Cool TP04", room_size: "Up to 800 sq ft", price: "₹45,900", features: &["HEPA + Carbon filter", "Air multiplier technology", "App control", "Real-time reports"] },
    PurifierOption { name: "Blueair Blue Pure 211+", room_size: "Up to 540 sq ft", price: "₹25,999", features: &["3-stage filtration", "Energy efficient", "Quiet operation", "Washable pre-filter"] },
    PurifierOption { name: "Coway Airmega 150", room_size: "Up to 214 sq ft", price: "₹18,999", features: &["4-stage filtration", "Smart mode", "Filter indicator", "Eco mode"] },
];

const PURIFIERS_SEVERE: &[PurifierOption] = &[
    PurifierOption { name: "IQAir HealthPro Plus", room_size: "Up to 1125 sq ft", price: "₹89,999", features: &["Medical grade HEPA", "V5-Cell gas filter", "Swiss engineering", "Hospital grade"] },
    PurifierOption { name: "Austin Air HealthMate Plus", room_size: "Up to 1500 sq ft", price: "₹65,999", features: &["4-stage filtration", "5-year warranty", "Medical grade", "24/7 operation"] },
    PurifierOption { name: "Rabbit Air MinusA2", room_size: "Up to 815 sq ft", price: "₹55,999", features: &["6-stage filtration", "Wall mountable", "Customizable", "Ultra quiet"] },
];

/// Equipment and advice for an AQI level, tailored by age.
/// Tiers: ≤50, ≤100, ≤150, >150.
pub fn health_measures(aqi: u32, age: Option<u32>) -> HealthMeasures {
    let who = AgeProfile::from_age(age);

    if aqi <= 50 {
        HealthMeasures {
            masks: Vec::new(),
            purifiers: Vec::new(),
            general: vec![
                "Enjoy outdoor activities freely - air quality is excellent",
                "Perfect for morning jogs, cycling, and outdoor sports",
                "Great day for outdoor family time and picnics",
                who.closing(
                    "Excellent day for outdoor sports and playground activities",
                    "Safe for all outdoor activities and gentle exercise",
                    "Ideal conditions for all physical activities",
                ),
            ],
        }
    } else if aqi <= 100 {
        HealthMeasures {
            masks: MASKS_MODERATE.to_vec(),
            purifiers: PURIFIERS_MODERATE.to_vec(),
            general: vec![
                if who.is_vulnerable() {
                    "Monitor air quality closely and limit prolonged outdoor exposure"
                } else {
                    "Outdoor activities are generally safe for healthy individuals"
                },
                "Close windows during peak traffic hours (7-9 AM, 6-8 PM)",
                "Use air purifier in bedroom for better sleep quality",
                "Consider indoor exercise during midday hours",
                who.closing(
                    "Limit outdoor sports during peak pollution hours",
                    "Take regular breaks during outdoor activities",
                    "Maintain normal activities with basic precautions",
                ),
            ],
        }
    } else if aqi <= 150 {
        HealthMeasures {
            masks: MASKS_SENSITIVE.to_vec(),
            purifiers: PURIFIERS_SENSITIVE.to_vec(),
            general: vec![
                if who.is_vulnerable() {
                    "Stay indoors as much as possible - high risk for your age"
                } else {
                    "Wear N95 masks outdoors and avoid prolonged exposure"
                },
                "Avoid all outdoor exercise and sports activities",
                "Keep air purifiers running continuously in living areas",
                "Stay well hydrated and eat antioxidant-rich foods",
                "Avoid opening windows - use air purifiers for ventilation",
                who.closing(
                    "No outdoor school activities - inform teachers about air quality concerns",
                    "Consult doctor immediately if experiencing breathing difficulties",
                    "Work from home if possible to minimize exposure",
                ),
            ],
        }
    } else {
        HealthMeasures {
            masks: MASKS_SEVERE.to_vec(),
            purifiers: PURIFIERS_SEVERE.to_vec(),
            general: vec![
                "EMERGENCY CONDITIONS - Stay indoors completely",
                "Seal windows and doors with tape if necessary",
                "Use multiple air purifiers in different rooms",
                "Avoid all outdoor activities without exception",
                "Keep emergency medications readily available",
                if who.is_vulnerable() {
                    "Seek immediate medical attention if experiencing any breathing difficulties"
                } else {
                    "Monitor health symptoms very closely"
                },
                who.closing(
                    "Keep children indoors - no exceptions for school or outdoor play",
                    "Have emergency medications ready and maintain contact with healthcare provider",
                    "Work from home mandatory - avoid all unnecessary travel",
                ),
            ],
        }
    }
}
