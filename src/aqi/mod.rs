//! Air Quality Index classification library.
//!
//! Pure, stateless functions shared by every other module in the service:
//! - `levels`      : numeric AQI → categorical level.
//! - `presentation`: level → labels and color tokens.
//! - `derive`      : pollutant concentrations → composite AQI.
//!
//! Nothing in here performs I/O or holds state, so callers may use it from
//! any number of request handlers at once.

pub mod derive;
pub mod levels;
pub mod presentation;

pub use derive::{
    derive_aqi, derive_aqi_checked, derive_aqi_for, dominant_pollutant, validate_reading, Pollutant, ReadingError,
    SubIndices,
};
pub use levels::{classify, severity_rank, AirQualityLevel, ParseLevelError};
pub use presentation::{
    border_color_token, color_token, description, description_in, label, label_in,
    marker_color_hex, text_color_token, LevelPresentation, Locale,
};
