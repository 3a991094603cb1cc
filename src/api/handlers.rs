//! HTTP request handlers for the air quality API.
//!
//! Read-only JSON endpoints over the in-memory neighborhood store, using
//! axum.

use crate::analysis::{AirQualityStats, LevelCounts};
use crate::aqi::{LevelPresentation, Locale};
use crate::logging::{self, Component};
use crate::model::Neighborhood;
use crate::query::{NeighborhoodFilter, NeighborhoodQuery};
use crate::store::{NeighborhoodStore, StoreError};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Dataset served by every endpoint; never mutated after startup
    pub store: Arc<NeighborhoodStore>,
    /// Artificial latency for the neighborhood endpoints
    pub response_delay: Duration,
    /// Language of the presentation table
    pub locale: Locale,
}

impl AppState {
    pub fn new(store: NeighborhoodStore) -> Self {
        Self {
            store: Arc::new(store),
            response_delay: Duration::ZERO,
            locale: Locale::default(),
        }
    }

    async fn simulate_latency(&self) {
        if !self.response_delay.is_zero() {
            tokio::time::sleep(self.response_delay).await;
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub neighborhood_count: usize,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Application error type
#[derive(Debug)]
pub enum AppError {
    /// Requested neighborhood does not exist
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(id) => {
                logging::log_lookup_miss(&id);
                (StatusCode::NOT_FOUND, "Neighborhood not found".to_string())
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(id) => AppError::NotFound(id),
        }
    }
}

/// GET /api/neighborhoods?zone=&qualityLevel=
async fn list_neighborhoods(
    State(state): State<AppState>,
    Query(query): Query<NeighborhoodQuery>,
) -> Json<Vec<Neighborhood>> {
    let filter = NeighborhoodFilter::from_query(&query);
    let neighborhoods: Vec<Neighborhood> = state.store.list(&filter).into_iter().cloned().collect();

    logging::debug(
        Component::Api,
        None,
        &format!("list {:?} -> {} neighborhoods", filter, neighborhoods.len()),
    );

    state.simulate_latency().await;
    Json(neighborhoods)
}

/// GET /api/neighborhoods/:id
async fn get_neighborhood(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Neighborhood>, AppError> {
    let neighborhood = state.store.get(&id)?.clone();
    state.simulate_latency().await;
    Ok(Json(neighborhood))
}

/// GET /api/neighborhoods/:id/stats
///
/// `null` when the neighborhood has no history.
async fn get_neighborhood_stats(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<AirQualityStats>>, AppError> {
    Ok(Json(state.store.stats(&id)?))
}

/// GET /api/summary?zone=&qualityLevel=
async fn summary(
    State(state): State<AppState>,
    Query(query): Query<NeighborhoodQuery>,
) -> Json<LevelCounts> {
    Json(state.store.summary(&NeighborhoodFilter::from_query(&query)))
}

/// GET /api/levels - legend table for the configured locale
async fn levels(State(state): State<AppState>) -> Json<Vec<LevelPresentation>> {
    Json(LevelPresentation::table(state.locale))
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let status = if state.store.is_empty() { "degraded" } else { "healthy" };
    Json(HealthCheckResponse {
        status: status.to_string(),
        neighborhood_count: state.store.len(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/neighborhoods", get(list_neighborhoods))
        .route("/api/neighborhoods/:id", get(get_neighborhood))
        .route("/api/neighborhoods/:id/stats", get(get_neighborhood_stats))
        .route("/api/summary", get(summary))
        .route("/api/levels", get(levels))
        .route("/health", get(health_check))
        .with_state(state)
}
