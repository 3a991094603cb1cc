//! Air quality service CLI
//!
//! Starts the HTTP server, or verifies the generated dataset and exits.

use airmon_service::api::{start_server, ServiceError};
use airmon_service::config::{ConfigError, ServiceConfig};
use airmon_service::logging::{self, init_logger};
use airmon_service::mock_data::MockGenerator;
use airmon_service::verify::verify_dataset;
use chrono::Utc;
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServiceError> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help") {
        print_help();
        return Ok(());
    }

    let config = match args.iter().position(|a| a == "--config") {
        Some(i) => {
            let path = args.get(i + 1).ok_or_else(|| ConfigError::Invalid {
                field: "--config".to_string(),
                reason: "requires a file path".to_string(),
            })?;
            ServiceConfig::from_file(path)?
        }
        None => ServiceConfig::load()?,
    };

    init_logger(
        config.log.level,
        config.log.file.as_deref(),
        config.log.console_timestamps,
    )?;

    if args.iter().any(|a| a == "--verify") {
        return verify(&config);
    }

    start_server(config).await
}

/// Builds the dataset, prints the verification report as JSON, and exits
/// non-zero when any neighborhood fails.
fn verify(config: &ServiceConfig) -> Result<(), ServiceError> {
    let mut generator = MockGenerator::new(config.measurement_days);
    generator.seed = config.seed;
    let records = generator.build_neighborhoods(Utc::now());

    let report = verify_dataset(&records);
    logging::log_verification_summary(
        report.summary.total,
        report.summary.passed,
        report.summary.failed,
    );

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| ServiceError::Server(e.to_string()))?;
    println!("{}", json);

    if !report.is_success() {
        process::exit(2);
    }
    Ok(())
}

fn print_help() {
    println!("airmon_service - Neighborhood air quality API");
    println!();
    println!("USAGE:");
    println!("    airmon_service [--config <path-to-config.toml>] [--verify]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("                       (default: $AIRMON_CONFIG, then built-in defaults)");
    println!("    --verify           Check the generated dataset, print a JSON report, and exit");
    println!("    --help             Print this help message");
    println!();
    println!("ENDPOINTS:");
    println!("    GET /api/neighborhoods?zone=<zone>&qualityLevel=<level>");
    println!("    GET /api/neighborhoods/<id>");
    println!("    GET /api/neighborhoods/<id>/stats");
    println!("    GET /api/summary");
    println!("    GET /api/levels");
    println!("    GET /health");
    println!();
}
