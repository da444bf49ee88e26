//! Chart Routes
//!
//! Endpoint for rendering a chart from the two user selections.
//!
//! - POST /api/v1/charts - Render one chart

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{RenderChartRequest, RenderChartResponse, TableMeta};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::chart::{self, ChartKind, Metric};

/// POST /api/v1/charts
///
/// Run the full pipeline for one selection pair:
/// Loader (cached) -> Normalizer -> Dispatcher.
pub async fn render_chart(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RenderChartRequest>,
) -> ApiResult<Json<RenderChartResponse>> {
    let metric = parse_metric(&req.metric)?;
    let kind = parse_chart_kind(&req.chart_type)?;

    let (table, report) = state.load_clean()?;
    let chart = chart::render(&table, metric, kind)?;

    tracing::debug!(
        metric = %metric,
        chart_type = %kind,
        rows = table.len(),
        "Rendered chart"
    );

    Ok(Json(RenderChartResponse {
        chart,
        meta: TableMeta::new(&table, &report),
    }))
}

/// Parse a metric selection, listing valid options on failure
fn parse_metric(s: &str) -> ApiResult<Metric> {
    Metric::parse(s).ok_or_else(|| {
        ApiError::Validation(format!(
            "Unknown metric '{}'. Valid options: {}",
            s,
            Metric::all()
                .iter()
                .map(|m| m.label())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}

/// Parse a chart type selection, listing valid options on failure
fn parse_chart_kind(s: &str) -> ApiResult<ChartKind> {
    ChartKind::parse(s).ok_or_else(|| {
        ApiError::Validation(format!(
            "Unknown chart type '{}'. Valid options: {}",
            s,
            ChartKind::all()
                .iter()
                .map(|k| k.label())
                .collect::<Vec<_>>()
                .join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_metric() {
        assert!(matches!(
            parse_metric("Daily New Cases"),
            Ok(Metric::DailyNewCases)
        ));
        assert!(matches!(
            parse_metric("daily_new_deaths"),
            Ok(Metric::DailyNewDeaths)
        ));
        assert!(parse_metric("population").is_err());
    }

    #[test]
    fn test_parse_chart_kind() {
        assert!(matches!(parse_chart_kind("heatmap"), Ok(ChartKind::Heatmap)));
        assert!(matches!(
            parse_chart_kind("Box Plot"),
            Ok(ChartKind::BoxPlot)
        ));
        assert!(parse_chart_kind("pie").is_err());
    }
}
