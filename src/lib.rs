//! # Caseboard
//!
//! A COVID-19 case dashboard service. Loads a daily case CSV, cleans its
//! free-text date column, and renders one of seven chart recipes for a
//! selected metric - over HTTP or from the CLI.
//!
//! ## Pipeline
//!
//! Every request runs the same explicit cycle:
//! Loader (memoized per path) -> Date Normalizer -> Chart Dispatcher.
//! The loader's cache is the only state shared between requests.
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and date normalization
//! - [`chart`]: selections, the seven recipes, and dispatch
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use caseboard::chart::{render, ChartKind, Metric};
//! use caseboard::dataset::{normalize, DatasetLoader};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let loader = DatasetLoader::new();
//!     let raw = loader.load(Path::new("data/covid_cases.csv"))?;
//!
//!     let (table, report) = normalize(&raw)?;
//!     if report.has_failures() {
//!         eprintln!("dropped {} rows", report.rows_dropped);
//!     }
//!
//!     let chart = render(&table, Metric::DailyNewCases, ChartKind::Line)?;
//!     println!("{}", serde_json::to_string_pretty(&chart)?);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod chart;
pub mod config;
pub mod dataset;

// Re-export top-level types for convenience
pub use dataset::{
    normalize, CaseRow, CaseTable, ColumnKind, DatasetError, DatasetLoader, DatasetResult,
    NormalizeReport, RawTable,
};

pub use chart::{
    render, AxisSide, ChartArtifact, ChartDataset, ChartError, ChartKind, ChartResult, Metric,
};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{Config, ConfigError, LoggingConfig};
