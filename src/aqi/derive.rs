//! Composite AQI derivation from pollutant concentrations.
//!
//! Each pollutant is scaled linearly against a reference concentration so
//! that the reference maps to a sub-index of exactly 100. The composite is
//! the largest sub-index: the worst pollutant decides the overall level and
//! is never averaged down by cleaner ones.
//!
//! `derive_aqi` does not validate its inputs. Negative concentrations give
//! negative sub-indices and very large ones give very large indices, which
//! `classify` still buckets. Callers holding raw external data should go
//! through `derive_aqi_checked` instead.

use crate::model::PollutantReading;
use serde::Serialize;
use std::fmt;

// ---------------------------------------------------------------------------
// Reference concentrations
// ---------------------------------------------------------------------------

/// PM2.5 concentration (µg/m³) that maps to sub-index 100.
pub const PM25_REFERENCE: f64 = 35.4;

/// PM10 concentration (µg/m³) that maps to sub-index 100.
pub const PM10_REFERENCE: f64 = 154.0;

/// Ozone concentration (ppm) that maps to sub-index 100.
pub const OZONE_REFERENCE: f64 = 0.070;

// ---------------------------------------------------------------------------
// Sub-indices
// ---------------------------------------------------------------------------

/// The pollutants that contribute to the composite index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pollutant {
    Pm25,
    Pm10,
    Ozone,
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pollutant::Pm25 => write!(f, "PM2.5"),
            Pollutant::Pm10 => write!(f, "PM10"),
            Pollutant::Ozone => write!(f, "O3"),
        }
    }
}

/// Per-pollutant scores on the nominal 0–100 scale, before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubIndices {
    pub pm25: f64,
    pub pm10: f64,
    pub ozone: f64,
}

impl SubIndices {
    pub fn from_concentrations(pm25: f64, pm10: f64, ozone: f64) -> Self {
        Self {
            pm25: pm25 / PM25_REFERENCE * 100.0,
            pm10: pm10 / PM10_REFERENCE * 100.0,
            ozone: ozone / OZONE_REFERENCE * 100.0,
        }
    }

    /// Largest of the three sub-indices.
    pub fn max(&self) -> f64 {
        self.pm25.max(self.pm10).max(self.ozone)
    }

    /// Pollutant with the largest sub-index. Ties go to PM2.5, then PM10.
    pub fn dominant(&self) -> Pollutant {
        if self.pm25 >= self.pm10 && self.pm25 >= self.ozone {
            Pollutant::Pm25
        } else if self.pm10 >= self.ozone {
            Pollutant::Pm10
        } else {
            Pollutant::Ozone
        }
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Computes the composite AQI: the rounded maximum of the three sub-indices.
///
/// Halves round toward positive infinity, so 50.5 → 51 and -0.5 → 0.
pub fn derive_aqi(pm25: f64, pm10: f64, ozone: f64) -> i64 {
    round_half_up(SubIndices::from_concentrations(pm25, pm10, ozone).max())
}

/// The pollutant that decides `derive_aqi` for these concentrations.
pub fn dominant_pollutant(pm25: f64, pm10: f64, ozone: f64) -> Pollutant {
    SubIndices::from_concentrations(pm25, pm10, ozone).dominant()
}

/// `derive_aqi` over the particulate and ozone fields of a reading.
pub fn derive_aqi_for(reading: &PollutantReading) -> i64 {
    derive_aqi(reading.pm25, reading.pm10, reading.o3)
}

fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

// ---------------------------------------------------------------------------
// Boundary validation
// ---------------------------------------------------------------------------

/// A concentration that cannot come from a real sensor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReadingError {
    #[error("{pollutant} concentration is negative: {value}")]
    Negative { pollutant: &'static str, value: f64 },
    #[error("{pollutant} concentration is not a finite number")]
    NotFinite { pollutant: &'static str },
}

/// Rejects negative or non-finite concentrations, including the optional gases.
pub fn validate_reading(reading: &PollutantReading) -> Result<(), ReadingError> {
    let required = [("PM2.5", Some(reading.pm25)), ("PM10", Some(reading.pm10)), ("O3", Some(reading.o3))];
    let optional = [("NO2", reading.no2), ("SO2", reading.so2), ("CO", reading.co)];

    for (pollutant, value) in required.into_iter().chain(optional) {
        let Some(value) = value else { continue };
        if !value.is_finite() {
            return Err(ReadingError::NotFinite { pollutant });
        }
        if value < 0.0 {
            return Err(ReadingError::Negative { pollutant, value });
        }
    }
    Ok(())
}

/// Validates the reading, then derives its AQI.
pub fn derive_aqi_checked(reading: &PollutantReading) -> Result<i64, ReadingError> {
    validate_reading(reading)?;
    Ok(derive_aqi_for(reading))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
