//! Neighborhood air quality service.
//!
//! Serves simulated air quality readings for Rio de Janeiro neighborhoods
//! over a small read-only JSON API. The `aqi` module is the core: pure
//! functions that classify index values, derive an index from pollutant
//! concentrations, and map levels to labels and colors. Everything else
//! builds the mock dataset and exposes it over HTTP.

pub mod analysis;
pub mod api;
pub mod aqi;
pub mod config;
pub mod logging;
pub mod mock_data;
pub mod model;
pub mod neighborhoods;
pub mod query;
pub mod store;
pub mod verify;
