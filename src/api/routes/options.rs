//! Options Routes
//!
//! The two fixed enumerations behind the selection controls, so a UI can
//! populate its dropdowns without hardcoding them.
//!
//! - GET /api/v1/options - Selectable metrics and chart types

use axum::Json;

use crate::api::dto::{OptionDto, OptionsResponse};
use crate::chart::{ChartKind, Metric};

/// GET /api/v1/options
pub async fn options() -> Json<OptionsResponse> {
    let metrics = Metric::all()
        .iter()
        .map(|m| OptionDto {
            value: m.label().to_lowercase().replace(' ', "_"),
            label: m.label().to_string(),
        })
        .collect();

    let chart_types = ChartKind::all()
        .iter()
        .map(|k| OptionDto {
            value: k.short_name().to_string(),
            label: k.label().to_string(),
        })
        .collect();

    Json(OptionsResponse {
        metrics,
        chart_types,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_options_cover_both_enumerations() {
        let Json(body) = options().await;
        assert_eq!(body.metrics.len(), 4);
        assert_eq!(body.chart_types.len(), 7);
        assert!(body.chart_types.iter().any(|o| o.value == "dual_axis"));
    }
}
