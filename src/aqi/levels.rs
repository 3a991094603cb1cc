//! Air quality level classification.
//!
//! Partitions the integer AQI line into four contiguous bands. The upper
//! bound of each band is inclusive:
//!
//!   aqi <= 50        → Good
//!   51  ..= 100      → Moderate
//!   101 ..= 150      → Unhealthy
//!   aqi > 150        → Hazardous

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Highest AQI still classified as `Good`.
pub const GOOD_MAX: i64 = 50;

/// Highest AQI still classified as `Moderate`.
pub const MODERATE_MAX: i64 = 100;

/// Highest AQI still classified as `Unhealthy`. Anything above is `Hazardous`.
pub const UNHEALTHY_MAX: i64 = 150;

// ---------------------------------------------------------------------------
// Level type
// ---------------------------------------------------------------------------

/// Air quality levels, in ascending order of severity.
///
/// The derived `Ord` follows declaration order, so `Good < Hazardous`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirQualityLevel {
    Good,
    Moderate,
    Unhealthy,
    Hazardous,
}

impl AirQualityLevel {
    /// Every level, least severe first.
    pub const ALL: [AirQualityLevel; 4] = [
        AirQualityLevel::Good,
        AirQualityLevel::Moderate,
        AirQualityLevel::Unhealthy,
        AirQualityLevel::Hazardous,
    ];

    /// Lowercase identifier used on the wire and in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            AirQualityLevel::Good => "good",
            AirQualityLevel::Moderate => "moderate",
            AirQualityLevel::Unhealthy => "unhealthy",
            AirQualityLevel::Hazardous => "hazardous",
        }
    }
}

impl fmt::Display for AirQualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four level identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown air quality level: '{0}'")]
pub struct ParseLevelError(pub String);

impl FromStr for AirQualityLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AirQualityLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classifies a numeric AQI into its level.
///
/// Total over `i64`: negative values land in `Good` and arbitrarily large
/// values in `Hazardous`.
pub fn classify(aqi: i64) -> AirQualityLevel {
    if aqi <= GOOD_MAX {
        AirQualityLevel::Good
    } else if aqi <= MODERATE_MAX {
        AirQualityLevel::Moderate
    } else if aqi <= UNHEALTHY_MAX {
        AirQualityLevel::Unhealthy
    } else {
        AirQualityLevel::Hazardous
    }
}

/// Position of a level on the severity scale, 0 (Good) through 3 (Hazardous).
pub fn severity_rank(level: AirQualityLevel) -> u8 {
    match level {
        AirQualityLevel::Good => 0,
        AirQualityLevel::Moderate => 1,
        AirQualityLevel::Unhealthy => 2,
        AirQualityLevel::Hazardous => 3,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
