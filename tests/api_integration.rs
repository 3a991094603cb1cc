//! Integration tests for the HTTP API

use airmon_service::{
    analysis::LevelCounts,
    api::handlers::{create_router, AppState, ErrorResponse, HealthCheckResponse},
    aqi::{classify, AirQualityLevel, Locale},
    mock_data::MockGenerator,
    model::Neighborhood,
    store::NeighborhoodStore,
};
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tower::ServiceExt; // for oneshot

/// Helper to create test application state
fn create_test_state() -> AppState {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 13, 0, 0).unwrap();
    let store = NeighborhoodStore::generate(&MockGenerator::new(7).with_seed(2024), now);
    AppState::new(store)
}

fn create_test_app() -> Router {
    create_router(create_test_state())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_json<T: DeserializeOwned>(uri: &str) -> (StatusCode, T) {
    let (status, body) = get(create_test_app(), uri).await;
    let parsed = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("{} returned unparseable body: {}", uri, e));
    (status, parsed)
}

// ---------------------------------------------------------------------------
// List endpoint
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_list_returns_all_neighborhoods() {
    let (status, list): (_, Vec<Neighborhood>) = get_json("/api/neighborhoods").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.len(), 16);
    for n in &list {
        assert_eq!(n.current_quality, classify(n.current_aqi), "{} is not normalized", n.name);
        assert_eq!(n.measurements.len(), 7);
    }
}

#[tokio::test]
async fn test_all_sentinel_is_no_filter() {
    let (_, list): (_, Vec<Neighborhood>) =
        get_json("/api/neighborhoods?zone=all&qualityLevel=all").await;
    assert_eq!(list.len(), 16);
}

#[tokio::test]
async fn test_zone_filter_with_encoded_space() {
    let (status, list): (_, Vec<Neighborhood>) =
        get_json("/api/neighborhoods?zone=Zona%20Sul").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.len(), 5);
    assert!(list.iter().all(|n| n.zone == "Zona Sul"));
}

#[tokio::test]
async fn test_quality_filter() {
    let (_, list): (_, Vec<Neighborhood>) =
        get_json("/api/neighborhoods?qualityLevel=good").await;
    let names: Vec<_> = list.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Copacabana", "Leblon", "Recreio"]);
}

#[tokio::test]
async fn test_zone_match_is_exact() {
    let (status, list): (_, Vec<Neighborhood>) =
        get_json("/api/neighborhoods?zone=zona%20sul").await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_unknown_quality_level_returns_empty_list() {
    let (status, list): (_, Vec<Neighborhood>) =
        get_json("/api/neighborhoods?qualityLevel=very-unhealthy").await;
    assert_eq!(status, StatusCode::OK);
    assert!(list.is_empty());
}

#[tokio::test]
async fn test_list_uses_dashboard_field_names() {
    let (_, list): (_, serde_json::Value) = get_json("/api/neighborhoods?zone=Centro").await;
    let centro = &list[0];
    assert_eq!(centro["id"], "5");
    assert_eq!(centro["currentAQI"], 95);
    assert_eq!(centro["currentQuality"], "moderate");
    assert!(centro["lastUpdate"].is_string());
    assert!(centro["measurements"][0]["pm25"].is_number());
}

// ---------------------------------------------------------------------------
// Detail endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_neighborhood_by_id() {
    let (status, n): (_, Neighborhood) = get_json("/api/neighborhoods/13").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(n.name, "Santa Cruz");
    assert_eq!(n.current_aqi, 178);
    assert_eq!(n.current_quality, AirQualityLevel::Hazardous);
}

#[tokio::test]
async fn test_missing_neighborhood_is_404_with_error_body() {
    let (status, body): (_, ErrorResponse) = get_json("/api/neighborhoods/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.error, "Neighborhood not found");
}

#[tokio::test]
async fn test_stats_endpoint() {
    let (status, stats): (_, serde_json::Value) = get_json("/api/neighborhoods/10/stats").await;
    assert_eq!(status, StatusCode::OK);
    let min = stats["min"].as_i64().unwrap();
    let max = stats["max"].as_i64().unwrap();
    let average = stats["average"].as_f64().unwrap();
    assert!(min as f64 <= average && average <= max as f64);
    assert!(["improving", "stable", "worsening"].contains(&stats["trend"].as_str().unwrap()));
}

// ---------------------------------------------------------------------------
// Summary, legend, health
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_summary_counts() {
    let (status, counts): (_, serde_json::Value) = get_json("/api/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(counts["total"], 16);
    assert_eq!(counts["good"], 3);
    assert_eq!(counts["moderate"], 8);
    assert_eq!(counts["unhealthy"], 3);
    assert_eq!(counts["hazardous"], 2);

    let (_, west): (_, serde_json::Value) = get_json("/api/summary?zone=Zona%20Oeste").await;
    assert_eq!(west["total"], 7);
}

#[tokio::test]
async fn test_levels_legend_follows_locale() {
    let (_, legend): (_, serde_json::Value) = get_json("/api/levels").await;
    assert_eq!(legend.as_array().unwrap().len(), 4);
    assert_eq!(legend[0]["level"], "good");
    assert_eq!(legend[0]["label"], "Bom");
    assert_eq!(legend[3]["color"], "bg-purple-900");

    let mut state = create_test_state();
    state.locale = Locale::En;
    let (_, body) = get(create_router(state), "/api/levels").await;
    let legend: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(legend[3]["label"], "Hazardous");
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let (status, health): (_, HealthCheckResponse) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health.status, "healthy");
    assert_eq!(health.neighborhood_count, 16);
}

#[tokio::test]
async fn test_summary_type_matches_library_counts() {
    let state = create_test_state();
    let expected = LevelCounts::from_neighborhoods(state.store.all());
    let (_, counts): (_, serde_json::Value) = get_json("/api/summary").await;
    assert_eq!(counts["total"], expected.total);
}

// ---------------------------------------------------------------------------
// Latency and live socket
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_response_delay_is_applied() {
    let mut state = create_test_state();
    state.response_delay = Duration::from_millis(50);
    let app = create_router(state);

    let started = Instant::now();
    let (status, _) = get(app, "/api/neighborhoods/1").await;
    assert_eq!(status, StatusCode::OK);
    assert!(started.elapsed() >= Duration::from_millis(50));
}

#[tokio::test]
async fn test_live_server_over_tcp() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_test_app();
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let list: Vec<Neighborhood> = client
        .get(format!("http://{}/api/neighborhoods?zone=Zona%20Norte", addr))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list.len(), 3);

    let missing = client
        .get(format!("http://{}/api/neighborhoods/0", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status().as_u16(), 404);

    server.abort();
}
