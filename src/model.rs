//! Core data types for the neighborhood air quality service.
//!
//! This module defines the shared domain model imported by all other modules.
//! It contains no classification logic and no I/O, only types and their
//! serialized shape. Field names on the wire follow the dashboard's JSON
//! (`currentAQI`, `lastUpdate`, `o3`, ...).

use crate::aqi::AirQualityLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// WGS84 position of a neighborhood's monitoring point, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// True when both components fall inside the WGS84 domain.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

// ---------------------------------------------------------------------------
// Reading types
// ---------------------------------------------------------------------------

/// Pollutant concentrations captured at one instant.
///
/// Particulates are in µg/m³, gases in ppm. Only PM2.5, PM10 and ozone feed
/// the composite index; the other gases are informational and may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutantReading {
    pub pm25: f64,
    pub pm10: f64,
    pub o3: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub so2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub co: Option<f64>,
}

impl PollutantReading {
    /// A reading with only the three index pollutants.
    pub fn new(pm25: f64, pm10: f64, o3: f64) -> Self {
        Self {
            pm25,
            pm10,
            o3,
            no2: None,
            so2: None,
            co: None,
        }
    }
}

/// One point in a neighborhood's history: a reading plus the index that
/// was recorded for it. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityMeasurement {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub reading: PollutantReading,
    pub aqi: i64,
}

// ---------------------------------------------------------------------------
// Neighborhood
// ---------------------------------------------------------------------------

/// A monitored neighborhood with its current status and recent history.
///
/// `current_quality` must equal `classify(current_aqi)`. The dataset builder
/// enforces this through `mock_data::normalize_quality`; anything that
/// changes `current_aqi` afterwards has to do the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood {
    pub id: String,
    pub name: String,
    pub zone: String,
    pub coordinates: Coordinates,
    #[serde(rename = "currentQuality")]
    pub current_quality: AirQualityLevel,
    #[serde(rename = "currentAQI")]
    pub current_aqi: i64,
    #[serde(rename = "lastUpdate")]
    pub last_update: DateTime<Utc>,
    /// Oldest first.
    pub measurements: Vec<AirQualityMeasurement>,
}

impl Neighborhood {
    /// Most recent measurement, if any.
    pub fn latest_measurement(&self) -> Option<&AirQualityMeasurement> {
        self.measurements.last()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
