//! Neighborhood list filters.
//!
//! Both filters are exact-match. A missing value, an empty string, or the
//! sentinel `"all"` disables a filter. A quality value that is not one of
//! the four level names matches no neighborhood at all, so the list comes
//! back empty rather than erroring.

use crate::aqi::AirQualityLevel;
use crate::model::Neighborhood;
use serde::Deserialize;

/// Query-string value that disables a filter.
pub const ALL_SENTINEL: &str = "all";

/// Raw query parameters as they arrive on `GET /api/neighborhoods`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborhoodQuery {
    pub zone: Option<String>,
    pub quality_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityFilter {
    Any,
    Only(AirQualityLevel),
    /// An unrecognised level name; matches nothing.
    Unknown(String),
}

/// Parsed filter applied to the neighborhood list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborhoodFilter {
    pub zone: Option<String>,
    pub quality: QualityFilter,
}

fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != ALL_SENTINEL)
}

impl NeighborhoodFilter {
    /// A filter that lets every neighborhood through.
    pub fn any() -> Self {
        Self {
            zone: None,
            quality: QualityFilter::Any,
        }
    }

    pub fn from_query(query: &NeighborhoodQuery) -> Self {
        let zone = active(query.zone.as_deref()).map(str::to_string);
        let quality = match active(query.quality_level.as_deref()) {
            None => QualityFilter::Any,
            Some(raw) => match raw.parse::<AirQualityLevel>() {
                Ok(level) => QualityFilter::Only(level),
                Err(_) => QualityFilter::Unknown(raw.to_string()),
            },
        };
        Self { zone, quality }
    }

    pub fn matches(&self, neighborhood: &Neighborhood) -> bool {
        let zone_ok = self
            .zone
            .as_deref()
            .is_none_or(|zone| neighborhood.zone == zone);
        let quality_ok = match &self.quality {
            QualityFilter::Any => true,
            QualityFilter::Only(level) => neighborhood.current_quality == *level,
            QualityFilter::Unknown(_) => false,
        };
        zone_ok && quality_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(zone: Option<&str>, quality: Option<&str>) -> NeighborhoodQuery {
        NeighborhoodQuery {
            zone: zone.map(String::from),
            quality_level: quality.map(String::from),
        }
    }

    #[test]
    fn test_missing_empty_and_all_disable_filters() {
        for raw in [None, Some(""), Some("all")] {
            assert_eq!(NeighborhoodFilter::from_query(&query(raw, raw)), NeighborhoodFilter::any());
        }
    }

    #[test]
    fn test_known_values_become_active_filters() {
        let filter = NeighborhoodFilter::from_query(&query(Some("Zona Sul"), Some("moderate")));
        assert_eq!(filter.zone.as_deref(), Some("Zona Sul"));
        assert_eq!(filter.quality, QualityFilter::Only(AirQualityLevel::Moderate));
    }

    #[test]
    fn test_unknown_quality_is_kept_as_unknown() {
        let filter = NeighborhoodFilter::from_query(&query(None, Some("very-unhealthy")));
        assert_eq!(filter.quality, QualityFilter::Unknown("very-unhealthy".to_string()));
    }

    #[test]
    fn test_query_deserializes_camel_case_keys() {
        let q: NeighborhoodQuery =
            serde_json::from_str(r#"{"zone":"Centro","qualityLevel":"good"}"#).unwrap();
        assert_eq!(q.zone.as_deref(), Some("Centro"));
        assert_eq!(q.quality_level.as_deref(), Some("good"));
    }
}
