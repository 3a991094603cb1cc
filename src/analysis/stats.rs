//! Summary statistics over a neighborhood's measurement history.
//!
//! Trend compares the mean AQI of the later half of the series with the
//! earlier half. With an odd number of points the middle one is ignored.
//! A shift of more than `TREND_TOLERANCE` points in either direction counts
//! as a trend; anything smaller is `Stable`.

use crate::model::AirQualityMeasurement;
use serde::Serialize;

/// Mean-AQI difference (in index points) that still counts as stable.
pub const TREND_TOLERANCE: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Stable,
    Worsening,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityStats {
    pub average: f64,
    pub min: i64,
    pub max: i64,
    pub trend: Trend,
}

impl AirQualityStats {
    /// Computes statistics over `measurements`, which must be oldest first.
    /// Returns `None` for an empty history.
    pub fn from_measurements(measurements: &[AirQualityMeasurement]) -> Option<Self> {
        let values: Vec<i64> = measurements.iter().map(|m| m.aqi).collect();
        let min = *values.iter().min()?;
        let max = *values.iter().max()?;

        Some(Self {
            average: mean(&values)?,
            min,
            max,
            trend: trend(&values),
        })
    }
}

fn mean(values: &[i64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<i64>() as f64 / values.len() as f64)
}

fn trend(values: &[i64]) -> Trend {
    let half = values.len() / 2;
    let earlier = mean(&values[..half]);
    let later = mean(&values[values.len() - half..]);

    match (earlier, later) {
        (Some(earlier), Some(later)) if later - earlier > TREND_TOLERANCE => Trend::Worsening,
        (Some(earlier), Some(later)) if earlier - later > TREND_TOLERANCE => Trend::Improving,
        _ => Trend::Stable,
    }
}
