//! In-memory neighborhood store.
//!
//! Holds the dataset the HTTP layer serves. The collection is normalized
//! once at construction and never mutated afterwards, so request handlers
//! share it through an `Arc` without locking.

use crate::analysis::{AirQualityStats, LevelCounts};
use crate::mock_data::{normalize_quality, MockGenerator};
use crate::model::Neighborhood;
use crate::query::NeighborhoodFilter;
use chrono::{DateTime, Utc};
use thiserror::Error;

/// Store error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No neighborhood has the requested id
    #[error("Neighborhood not found: {0}")]
    NotFound(String),
}

/// Read-only collection of neighborhoods, in registry order.
#[derive(Debug, Clone)]
pub struct NeighborhoodStore {
    records: Vec<Neighborhood>,
    corrected: usize,
}

impl NeighborhoodStore {
    /// Takes ownership of `records` and normalizes their quality levels.
    pub fn from_records(mut records: Vec<Neighborhood>) -> Self {
        let corrected = normalize_quality(&mut records);
        Self { records, corrected }
    }

    /// Builds the mock dataset as of `now`.
    pub fn generate(generator: &MockGenerator, now: DateTime<Utc>) -> Self {
        Self::from_records(generator.build_neighborhoods(now))
    }

    /// Number of records whose level was corrected at construction.
    pub fn corrected_count(&self) -> usize {
        self.corrected
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn measurement_count(&self) -> usize {
        self.records.iter().map(|n| n.measurements.len()).sum()
    }

    pub fn all(&self) -> &[Neighborhood] {
        &self.records
    }

    /// Neighborhoods passing `filter`, in registry order.
    pub fn list(&self, filter: &NeighborhoodFilter) -> Vec<&Neighborhood> {
        self.records.iter().filter(|n| filter.matches(n)).collect()
    }

    /// Looks up a neighborhood by id.
    pub fn get(&self, id: &str) -> Result<&Neighborhood, StoreError> {
        self.records
            .iter()
            .find(|n| n.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// History statistics for one neighborhood. `Ok(None)` if it has no
    /// measurements.
    pub fn stats(&self, id: &str) -> Result<Option<AirQualityStats>, StoreError> {
        self.get(id)
            .map(|n| AirQualityStats::from_measurements(&n.measurements))
    }

    pub fn summary(&self, filter: &NeighborhoodFilter) -> LevelCounts {
        LevelCounts::from_neighborhoods(self.list(filter))
    }
}
