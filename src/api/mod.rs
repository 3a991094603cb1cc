//! HTTP surface of the service.
//!
//! Builds the dataset, verifies it, and serves it through the axum router
//! in `handlers`.

pub mod handlers;

use crate::config::{ConfigError, ServiceConfig};
use crate::logging::{self, Component, LoggingError};
use crate::mock_data::MockGenerator;
use crate::store::NeighborhoodStore;
use crate::verify::verify_dataset;
use chrono::Utc;
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;

/// Service error
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logger could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Generates the dataset described by `config` and wraps it in app state.
pub fn build_state(config: &ServiceConfig) -> AppState {
    let mut generator = MockGenerator::new(config.measurement_days);
    generator.seed = config.seed;

    let store = NeighborhoodStore::generate(&generator, Utc::now());
    logging::log_dataset_summary(store.len(), store.measurement_count(), store.corrected_count());

    let report = verify_dataset(store.all());
    logging::log_verification_summary(
        report.summary.total,
        report.summary.passed,
        report.summary.failed,
    );
    for result in report.results.iter().filter(|r| !r.issues.is_empty()) {
        logging::warn(Component::Dataset, Some(&result.id), &result.issues.join("; "));
    }

    AppState {
        store: Arc::new(store),
        response_delay: config.response_delay(),
        locale: config.locale,
    }
}

/// Start the HTTP server
///
/// Builds the dataset and serves it until the process is stopped. The
/// logger must already be installed.
pub async fn start_server(config: ServiceConfig) -> Result<(), ServiceError> {
    logging::info(Component::System, None, "Starting air quality service");
    logging::info(
        Component::Config,
        None,
        &format!(
            "Bind address: {}, response delay: {} ms, history: {} days",
            config.bind_addr(),
            config.response_delay_ms,
            config.measurement_days
        ),
    );

    let app = create_router(build_state(&config));

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    logging::info(
        Component::System,
        None,
        &format!("Listening on {}", listener.local_addr()?),
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| ServiceError::Server(e.to_string()))?;

    Ok(())
}
