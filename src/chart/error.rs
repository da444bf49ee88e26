//! Chart error types
//!
//! Errors raised while resolving a selection against the cleaned table or
//! assembling a chart. All of these halt the current render only; they are
//! user-visible stops, not crashes.

use thiserror::Error;

/// Errors that can occur while dispatching a chart
#[derive(Error, Debug)]
pub enum ChartError {
    /// The selected metric's column is absent from the cleaned table
    #[error("Column '{column}' not found in data. Available columns: {}", .available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    /// The dual-axis recipe needs both case and death columns
    #[error("Dual axis requires 'Daily_New_Cases' and 'Daily_New_Death' columns. Missing: {}", .missing.join(", "))]
    DualAxisColumns { missing: Vec<String> },

    /// A metric cell did not parse as a number
    #[error("Column '{column}' contains non-numeric value '{value}'")]
    NonNumeric { column: String, value: String },
}

/// Result type alias for chart operations
pub type ChartResult<T> = Result<T, ChartError>;
