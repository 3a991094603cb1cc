//! Per-level neighborhood counts shown on the dashboard overview cards.

use crate::aqi::AirQualityLevel;
use crate::model::Neighborhood;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LevelCounts {
    pub total: usize,
    pub good: usize,
    pub moderate: usize,
    pub unhealthy: usize,
    pub hazardous: usize,
}

impl LevelCounts {
    pub fn from_neighborhoods<'a>(neighborhoods: impl IntoIterator<Item = &'a Neighborhood>) -> Self {
        let mut counts = Self::default();
        for n in neighborhoods {
            counts.total += 1;
            match n.current_quality {
                AirQualityLevel::Good => counts.good += 1,
                AirQualityLevel::Moderate => counts.moderate += 1,
                AirQualityLevel::Unhealthy => counts.unhealthy += 1,
                AirQualityLevel::Hazardous => counts.hazardous += 1,
            }
        }
        counts
    }

    pub fn count(&self, level: AirQualityLevel) -> usize {
        match level {
            AirQualityLevel::Good => self.good,
            AirQualityLevel::Moderate => self.moderate,
            AirQualityLevel::Unhealthy => self.unhealthy,
            AirQualityLevel::Hazardous => self.hazardous,
        }
    }
}
