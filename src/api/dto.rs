//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::chart::ChartArtifact;
use crate::dataset::{CaseTable, ColumnKind, NormalizeReport};

// ============================================
// CHART DTOs
// ============================================

/// Chart render request: the two user selections
#[derive(Debug, Deserialize)]
pub struct RenderChartRequest {
    /// Metric label or snake_case name (e.g. "Daily New Cases")
    pub metric: String,
    /// Chart type label or snake_case name (e.g. "Line Chart")
    pub chart_type: String,
}

/// Chart render response
#[derive(Debug, Serialize)]
pub struct RenderChartResponse {
    /// The renderable chart artifact
    pub chart: ChartArtifact,
    /// Source table metadata, including the cleaning report
    pub meta: TableMeta,
}

/// Metadata about the cleaned table behind a response
#[derive(Debug, Serialize)]
pub struct TableMeta {
    /// Rows in the cleaned table
    pub row_count: usize,
    /// Rows dropped for unparseable dates
    pub rows_dropped: usize,
    /// Up to 20 distinct date strings that failed to parse
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unparseable_samples: Vec<String>,
}

impl TableMeta {
    /// Build from a cleaned table and its normalize report
    pub fn new(table: &CaseTable, report: &NormalizeReport) -> Self {
        Self {
            row_count: table.len(),
            rows_dropped: report.rows_dropped,
            unparseable_samples: report.failure_samples.clone(),
        }
    }
}

// ============================================
// PREVIEW DTOs
// ============================================

/// Preview query parameters
#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    /// Number of rows to show (default: configured preview size)
    #[serde(default)]
    pub rows: Option<usize>,
}

/// Preview response: a truncated view of the cleaned table
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    /// Column names with inferred kinds, `Date` first
    pub columns: Vec<ColumnDto>,
    /// First rows of the cleaned table, cells aligned with `columns`
    pub rows: Vec<Vec<String>>,
    /// Source table metadata, including the cleaning report
    pub meta: TableMeta,
}

/// One column with its inferred kind
#[derive(Debug, Serialize)]
pub struct ColumnDto {
    /// Column name
    pub name: String,
    /// Inferred kind: date, integer, float, text
    pub kind: ColumnKind,
}

// ============================================
// OPTIONS DTOs
// ============================================

/// The two fixed enumerations behind the selection controls
#[derive(Debug, Serialize)]
pub struct OptionsResponse {
    /// Selectable metrics
    pub metrics: Vec<OptionDto>,
    /// Selectable chart types
    pub chart_types: Vec<OptionDto>,
}

/// One selectable option
#[derive(Debug, Serialize)]
pub struct OptionDto {
    /// Stable machine value (snake_case)
    pub value: String,
    /// Human-readable label
    pub label: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Dataset status: ok or an error summary
    pub dataset: String,
    /// Rows in the cleaned table (0 when the dataset is unreadable)
    pub row_count: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
