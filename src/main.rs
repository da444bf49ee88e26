//! Caseboard API Server
//!
//! Run with: cargo run --bin caseboard
//!
//! # Configuration
//!
//! Reads `config.toml` from the usual locations (see `config::Config`);
//! environment variables override:
//! - `CASEBOARD_DATASET`: Path of the case CSV (default: data/covid_cases.csv)
//! - `CASEBOARD_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `CASEBOARD_API_PORT`: Port to listen on (default: 8090)
//! - `CASEBOARD_LOG_LEVEL` / `CASEBOARD_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log filter entirely

use caseboard::api::{serve, ApiConfig, AppState};
use caseboard::config::Config;
use caseboard::dataset::DatasetLoader;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_default();

    init_tracing(&config);

    tracing::info!("Starting Caseboard API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {}", config.dataset.path);

    let api_config = ApiConfig {
        host: config.api.host.clone(),
        port: config.api.port,
        dataset_path: PathBuf::from(&config.dataset.path),
        preview_rows: config.dataset.preview_rows,
    };

    let loader = Arc::new(DatasetLoader::new());

    // Warm the cache so the first interaction doesn't pay the disk read.
    // A missing file is not fatal here: every render reports it instead.
    let state = AppState::new(Arc::clone(&loader), api_config.clone());
    match state.load_clean() {
        Ok((table, report)) => {
            tracing::info!(
                rows = table.len(),
                dropped = report.rows_dropped,
                "Dataset ready"
            );
        }
        Err(e) => {
            tracing::warn!("Dataset not loadable at startup: {}", e);
        }
    }

    serve(state, &api_config).await?;

    tracing::info!("Caseboard API server stopped");
    Ok(())
}

/// Initialize tracing from the logging config
fn init_tracing(config: &Config) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "caseboard={},tower_http=debug",
            config.logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
