//! Dataset Verification Module
//!
//! Checks every neighborhood record against the invariants the API relies
//! on and produces a serializable report. Run at startup and from the
//! `--verify` command-line flag.

use crate::aqi::classify;
use crate::model::Neighborhood;
use crate::neighborhoods::is_known_zone;
use chrono::Utc;
use serde::{Deserialize, Serialize};

// ============================================================================
// Verification Results
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub timestamp: String,
    pub results: Vec<NeighborhoodVerification>,
    pub summary: VerificationSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NeighborhoodVerification {
    pub id: String,
    pub name: String,
    pub status: VerificationStatus,
    pub quality_consistent: bool,
    pub coordinates_valid: bool,
    pub zone_known: bool,
    pub measurement_count: usize,
    pub measurements_ordered: bool,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VerificationStatus {
    Success,
    Failed,
}

impl VerificationReport {
    pub fn is_success(&self) -> bool {
        self.summary.failed == 0
    }
}

// ============================================================================
// Checks
// ============================================================================

pub fn verify_neighborhood(neighborhood: &Neighborhood) -> NeighborhoodVerification {
    let mut issues = Vec::new();

    let expected = classify(neighborhood.current_aqi);
    let quality_consistent = neighborhood.current_quality == expected;
    if !quality_consistent {
        issues.push(format!(
            "currentQuality is {} but AQI {} classifies as {}",
            neighborhood.current_quality, neighborhood.current_aqi, expected
        ));
    }

    let coordinates_valid = neighborhood.coordinates.is_valid();
    if !coordinates_valid {
        issues.push(format!(
            "coordinates ({}, {}) are outside WGS84 range",
            neighborhood.coordinates.lat, neighborhood.coordinates.lng
        ));
    }

    let zone_known = is_known_zone(&neighborhood.zone);
    if !zone_known {
        issues.push(format!("unknown zone '{}'", neighborhood.zone));
    }

    let measurement_count = neighborhood.measurements.len();
    if measurement_count == 0 {
        issues.push("no measurements".to_string());
    }

    let measurements_ordered = neighborhood
        .measurements
        .windows(2)
        .all(|pair| pair[0].timestamp < pair[1].timestamp);
    if !measurements_ordered {
        issues.push("measurement timestamps are not strictly ascending".to_string());
    }

    for m in &neighborhood.measurements {
        if m.aqi < 0 {
            issues.push(format!("negative AQI {} at {}", m.aqi, m.timestamp.to_rfc3339()));
        }
    }

    let status = if issues.is_empty() {
        VerificationStatus::Success
    } else {
        VerificationStatus::Failed
    };

    NeighborhoodVerification {
        id: neighborhood.id.clone(),
        name: neighborhood.name.clone(),
        status,
        quality_consistent,
        coordinates_valid,
        zone_known,
        measurement_count,
        measurements_ordered,
        issues,
    }
}

pub fn verify_dataset(neighborhoods: &[Neighborhood]) -> VerificationReport {
    let results: Vec<_> = neighborhoods.iter().map(verify_neighborhood).collect();
    let passed = results
        .iter()
        .filter(|r| r.status == VerificationStatus::Success)
        .count();

    VerificationReport {
        timestamp: Utc::now().to_rfc3339(),
        summary: VerificationSummary {
            total: results.len(),
            passed,
            failed: results.len() - passed,
        },
        results,
    }
}
