//! Neighborhood registry for the Rio de Janeiro air quality dashboard.
//!
//! Defines the canonical list of monitored neighborhoods with their zone,
//! location, and the baseline AQI the mock dataset is generated around.
//! This is the single source of truth for neighborhood ids: all other
//! modules should reference neighborhoods from here rather than hardcoding
//! ids.

use crate::model::Coordinates;

// ---------------------------------------------------------------------------
// Zones
// ---------------------------------------------------------------------------

pub const ZONE_SUL: &str = "Zona Sul";
pub const ZONE_NORTE: &str = "Zona Norte";
pub const ZONE_OESTE: &str = "Zona Oeste";
pub const ZONE_CENTRO: &str = "Centro";

/// Every zone a neighborhood may belong to, in dashboard filter order.
pub const ZONES: &[&str] = &[ZONE_SUL, ZONE_NORTE, ZONE_OESTE, ZONE_CENTRO];

// ---------------------------------------------------------------------------
// Site metadata
// ---------------------------------------------------------------------------

/// Static metadata for one monitored neighborhood.
pub struct NeighborhoodSite {
    /// Stable identifier used in API paths.
    pub id: &'static str,
    /// Display name. Not unique: two Campo Grande monitoring points exist.
    pub name: &'static str,
    pub zone: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Current AQI reported for the site; generated history varies around it.
    pub baseline_aqi: i64,
}

impl NeighborhoodSite {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

/// All monitored neighborhoods, ordered by id.
pub static NEIGHBORHOOD_REGISTRY: &[NeighborhoodSite] = &[
    NeighborhoodSite { id: "1", name: "Copacabana", zone: ZONE_SUL, latitude: -22.9711, longitude: -43.1822, baseline_aqi: 45 },
    NeighborhoodSite { id: "2", name: "Ipanema", zone: ZONE_SUL, latitude: -22.9838, longitude: -43.2044, baseline_aqi: 52 },
    NeighborhoodSite { id: "3", name: "Leblon", zone: ZONE_SUL, latitude: -22.9844, longitude: -43.2205, baseline_aqi: 38 },
    NeighborhoodSite { id: "4", name: "Barra da Tijuca", zone: ZONE_OESTE, latitude: -23.0050, longitude: -43.3647, baseline_aqi: 68 },
    NeighborhoodSite { id: "5", name: "Centro", zone: ZONE_CENTRO, latitude: -22.9035, longitude: -43.2096, baseline_aqi: 95 },
    NeighborhoodSite { id: "6", name: "Tijuca", zone: ZONE_NORTE, latitude: -22.9249, longitude: -43.2344, baseline_aqi: 72 },
    NeighborhoodSite { id: "7", name: "Botafogo", zone: ZONE_SUL, latitude: -22.9519, longitude: -43.1875, baseline_aqi: 58 },
    NeighborhoodSite { id: "8", name: "Flamengo", zone: ZONE_SUL, latitude: -22.9322, longitude: -43.1759, baseline_aqi: 62 },
    NeighborhoodSite { id: "9", name: "Jacarepaguá", zone: ZONE_OESTE, latitude: -22.9333, longitude: -43.3667, baseline_aqi: 88 },
    NeighborhoodSite { id: "10", name: "Méier", zone: ZONE_NORTE, latitude: -22.9025, longitude: -43.2781, baseline_aqi: 105 },
    NeighborhoodSite { id: "11", name: "Campo Grande", zone: ZONE_OESTE, latitude: -22.9017, longitude: -43.5625, baseline_aqi: 118 },
    NeighborhoodSite { id: "12", name: "Bangu", zone: ZONE_OESTE, latitude: -22.8711, longitude: -43.4656, baseline_aqi: 132 },
    NeighborhoodSite { id: "13", name: "Santa Cruz", zone: ZONE_OESTE, latitude: -22.9197, longitude: -43.6869, baseline_aqi: 178 },
    NeighborhoodSite { id: "14", name: "Ilha do Governador", zone: ZONE_NORTE, latitude: -22.8100, longitude: -43.2089, baseline_aqi: 78 },
    NeighborhoodSite { id: "15", name: "Recreio", zone: ZONE_OESTE, latitude: -23.0197, longitude: -43.4464, baseline_aqi: 42 },
    NeighborhoodSite { id: "16", name: "Campo Grande", zone: ZONE_OESTE, latitude: -22.9006, longitude: -43.5617, baseline_aqi: 215 },
];

/// Returns the ids of all monitored neighborhoods.
pub fn all_ids() -> Vec<&'static str> {
    NEIGHBORHOOD_REGISTRY.iter().map(|s| s.id).collect()
}

/// Returns the sites located in `zone` (exact match).
pub fn sites_in_zone(zone: &str) -> Vec<&'static NeighborhoodSite> {
    NEIGHBORHOOD_REGISTRY.iter().filter(|s| s.zone == zone).collect()
}

/// Looks up a site by id. Returns `None` if not found.
pub fn find_site(id: &str) -> Option<&'static NeighborhoodSite> {
    NEIGHBORHOOD_REGISTRY.iter().find(|s| s.id == id)
}

pub fn is_known_zone(zone: &str) -> bool {
    ZONES.contains(&zone)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
