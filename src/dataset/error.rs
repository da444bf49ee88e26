//! Dataset error types
//!
//! Defines all errors that can occur while loading and cleaning the case table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the dataset layer
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Reading or decoding the CSV file failed
    #[error("Failed to read dataset {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the table
    #[error("Column '{column}' not found in data. Available columns: {}", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
