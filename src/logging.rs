//! Structured logging for the air quality service
//!
//! Provides context-rich logging tagged with the emitting component and,
//! where relevant, the neighborhood id. Built on `tracing`; the subscriber
//! writes to the console and optionally appends to a log file.

use std::fmt;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{prelude::*, EnvFilter, Layer, Registry};

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    #[serde(alias = "warn")]
    Warning,
    Error,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Components
// ---------------------------------------------------------------------------

/// Part of the service a log line comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Api,
    Dataset,
    Config,
    System,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Api => write!(f, "API"),
            Component::Dataset => write!(f, "DATA"),
            Component::Config => write!(f, "CFG"),
            Component::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Initialization
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("global logger already installed: {0}")]
    AlreadyInitialized(String),
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `min_level` when set. With
/// `console_timestamps` off the console shows level and message only; the
/// file sink always carries timestamps and never uses ANSI colors.
pub fn init_logger(
    min_level: LogLevel,
    log_file: Option<&str>,
    console_timestamps: bool,
) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(min_level.as_directive()));

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if console_timestamps {
        layers.push(tracing_subscriber::fmt::layer().with_target(false).boxed());
    } else {
        layers.push(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .boxed(),
        );
    }

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|source| LoggingError::FileOpen {
                path: path.to_string(),
                source,
            })?;
        layers.push(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Log a general informational message
pub fn info(component: Component, neighborhood_id: Option<&str>, message: &str) {
    tracing::info!(
        component = %component,
        neighborhood = neighborhood_id.unwrap_or("-"),
        "{}",
        message
    );
}

/// Log a warning message
pub fn warn(component: Component, neighborhood_id: Option<&str>, message: &str) {
    tracing::warn!(
        component = %component,
        neighborhood = neighborhood_id.unwrap_or("-"),
        "{}",
        message
    );
}

/// Log an error message
pub fn error(component: Component, neighborhood_id: Option<&str>, message: &str) {
    tracing::error!(
        component = %component,
        neighborhood = neighborhood_id.unwrap_or("-"),
        "{}",
        message
    );
}

/// Log a debug message
pub fn debug(component: Component, neighborhood_id: Option<&str>, message: &str) {
    tracing::debug!(
        component = %component,
        neighborhood = neighborhood_id.unwrap_or("-"),
        "{}",
        message
    );
}

// ---------------------------------------------------------------------------
// Summary Logging
// ---------------------------------------------------------------------------

/// Log a request for a neighborhood id that does not exist.
pub fn log_lookup_miss(neighborhood_id: &str) {
    warn(Component::Api, Some(neighborhood_id), "Neighborhood not found");
}

/// Log the outcome of building the dataset.
///
/// `corrected` counts records whose stored level disagreed with their AQI
/// before normalization.
pub fn log_dataset_summary(total: usize, measurements: usize, corrected: usize) {
    let message = format!(
        "Dataset ready: {} neighborhoods, {} measurements, {} levels corrected",
        total, measurements, corrected
    );

    if corrected == 0 {
        info(Component::Dataset, None, &message);
    } else {
        warn(Component::Dataset, None, &message);
    }
}

/// Log a summary of a dataset verification pass.
pub fn log_verification_summary(total: usize, passed: usize, failed: usize) {
    let message = format!(
        "Verification complete: {}/{} passed, {} failed",
        passed, total, failed
    );

    if failed == 0 {
        info(Component::Dataset, None, &message);
    } else if passed == 0 {
        error(Component::Dataset, None, &message);
    } else {
        warn(Component::Dataset, None, &message);
    }
}
