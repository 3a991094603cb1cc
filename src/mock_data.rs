//! Mock measurement generation for the neighborhood dataset.
//!
//! There is no sensor feed behind this service. Every neighborhood in the
//! registry gets a synthetic daily history that wanders around its baseline
//! AQI, with pollutant concentrations scaled back from that AQI.
//!
//! # Clock and seed injection
//! The generator takes `now` explicitly and an optional RNG seed, so tests
//! get the same dataset on every run without touching the system clock.

use crate::aqi::{classify, derive};
use crate::model::{AirQualityMeasurement, Neighborhood, PollutantReading};
use crate::neighborhoods::{NeighborhoodSite, NEIGHBORHOOD_REGISTRY};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Half-width of the random walk applied to the baseline AQI.
const AQI_VARIATION: f64 = 10.0;

/// Generated AQIs are clamped to this ceiling.
const MAX_GENERATED_AQI: f64 = 200.0;

/// Concentrations that correspond to AQI 100 for the informational gases (ppm).
const NO2_REFERENCE: f64 = 0.100;
const SO2_REFERENCE: f64 = 0.075;
const CO_REFERENCE: f64 = 9.4;

/// Configuration for synthetic dataset generation
pub struct MockGenerator {
    /// Number of daily measurements per neighborhood (default: 7)
    pub days: u32,
    /// Fixed RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl MockGenerator {
    /// Create a generator producing `days` measurements per neighborhood
    pub fn new(days: u32) -> Self {
        Self { days, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Daily measurements ending at `now`, oldest first.
    ///
    /// Each day's AQI is `baseline ± 10`, clamped to 0..=200. Pollutants are
    /// that AQI's share of their reference concentration, jittered by ±20%.
    pub fn generate_measurements(
        &self,
        baseline_aqi: i64,
        now: DateTime<Utc>,
        rng: &mut impl Rng,
    ) -> Vec<AirQualityMeasurement> {
        (0..self.days)
            .rev()
            .map(|days_ago| {
                let timestamp = now - Duration::days(i64::from(days_ago));
                let variation = rng.gen_range(-AQI_VARIATION..AQI_VARIATION);
                let aqi = (baseline_aqi as f64 + variation).clamp(0.0, MAX_GENERATED_AQI);
                let scale = aqi / 100.0;

                let mut jitter = || rng.gen_range(0.8..1.2);
                let reading = PollutantReading {
                    pm25: round_to(scale * derive::PM25_REFERENCE * jitter(), 1),
                    pm10: round_to(scale * derive::PM10_REFERENCE * jitter(), 1),
                    o3: round_to(scale * derive::OZONE_REFERENCE * jitter(), 3),
                    no2: Some(round_to(scale * NO2_REFERENCE * jitter(), 3)),
                    so2: Some(round_to(scale * SO2_REFERENCE * jitter(), 3)),
                    co: Some(round_to(scale * CO_REFERENCE * jitter(), 1)),
                };

                AirQualityMeasurement {
                    timestamp,
                    reading,
                    aqi: aqi.round() as i64,
                }
            })
            .collect()
    }

    fn build_one(&self, site: &NeighborhoodSite, now: DateTime<Utc>, rng: &mut impl Rng) -> Neighborhood {
        Neighborhood {
            id: site.id.to_string(),
            name: site.name.to_string(),
            zone: site.zone.to_string(),
            coordinates: site.coordinates(),
            current_quality: classify(site.baseline_aqi),
            current_aqi: site.baseline_aqi,
            last_update: now,
            measurements: self.generate_measurements(site.baseline_aqi, now, rng),
        }
    }

    /// Builds the full dataset from `NEIGHBORHOOD_REGISTRY`, normalized.
    pub fn build_neighborhoods(&self, now: DateTime<Utc>) -> Vec<Neighborhood> {
        let mut rng = self.rng();
        let mut records: Vec<Neighborhood> = NEIGHBORHOOD_REGISTRY
            .iter()
            .map(|site| self.build_one(site, now, &mut rng))
            .collect();
        normalize_quality(&mut records);
        records
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new(7)
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ---------------------------------------------------------------------------
// Normalization
// ---------------------------------------------------------------------------

/// Sets every record's `current_quality` to `classify(current_aqi)`.
///
/// Returns how many records were changed. Whoever owns the collection calls
/// this after building or editing it.
pub fn normalize_quality(records: &mut [Neighborhood]) -> usize {
    let mut corrected = 0;
    for record in records.iter_mut() {
        let level = classify(record.current_aqi);
        if record.current_quality != level {
            record.current_quality = level;
            corrected += 1;
        }
    }
    corrected
}
