//! Preview Routes
//!
//! A truncated view of the cleaned table with inferred column types,
//! mirroring the source dashboard's "data preview & types" panel.
//!
//! - GET /api/v1/preview - First rows of the cleaned table

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{ColumnDto, PreviewParams, PreviewResponse, TableMeta};
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/v1/preview
///
/// Returns the first N cleaned rows (default 20) plus per-column kinds and
/// the cleaning report.
pub async fn preview(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PreviewParams>,
) -> ApiResult<Json<PreviewResponse>> {
    let (table, report) = state.load_clean()?;

    let limit = params.rows.unwrap_or(state.config.preview_rows);

    let columns = table
        .column_kinds()
        .into_iter()
        .map(|(name, kind)| ColumnDto { name, kind })
        .collect();

    let rows = table
        .rows()
        .iter()
        .take(limit)
        .map(|row| {
            let mut cells = Vec::with_capacity(row.cells.len() + 1);
            cells.push(row.date.format("%Y-%m-%d").to_string());
            cells.extend(row.cells.iter().cloned());
            cells
        })
        .collect();

    Ok(Json(PreviewResponse {
        columns,
        rows,
        meta: TableMeta::new(&table, &report),
    }))
}
