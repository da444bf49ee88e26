//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::dataset::{normalize, CaseTable, DatasetLoader, DatasetResult, NormalizeReport};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Memoized dataset loader
    pub loader: Arc<DatasetLoader>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState
    pub fn new(loader: Arc<DatasetLoader>, config: ApiConfig) -> Self {
        Self {
            loader,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Run the Loader -> Normalizer leg of the pipeline.
    ///
    /// The raw load is served from the memoized cache; normalization is a
    /// linear pass that re-runs per request, so the cache stays read-only.
    pub fn load_clean(&self) -> DatasetResult<(CaseTable, NormalizeReport)> {
        let raw = self.loader.load(&self.config.dataset_path)?;
        normalize(&raw)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Path of the case CSV; fixed for the process lifetime
    pub dataset_path: PathBuf,
    /// Rows shown by the preview endpoint
    pub preview_rows: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8090,
            dataset_path: PathBuf::from("data/covid_cases.csv"),
            preview_rows: 20,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
