//! Aggregations over the neighborhood dataset.
//!
//! This module provides the small summaries the dashboard displays next to
//! the raw records. Nothing here changes the records it reads.
//!
//! Submodules:
//! - `stats`  : average/min/max/trend of one neighborhood's history.
//! - `summary`: per-level neighborhood counts for the overview cards.

pub mod stats;
pub mod summary;

pub use stats::{AirQualityStats, Trend};
pub use summary::LevelCounts;
