//! User selections
//!
//! The two enumerations a request carries: which metric to chart and which
//! chart recipe to run. Both are plain `Copy` values rebuilt per request;
//! nothing about a selection outlives the request that made it.

use serde::{Deserialize, Serialize};

use crate::dataset::{
    ACTIVE_CASES_COLUMN, CUMULATIVE_TOTAL_CASES_COLUMN, DAILY_NEW_CASES_COLUMN,
    DAILY_NEW_DEATHS_COLUMN,
};

/// Which case statistic to chart.
///
/// Each metric maps 1:1 to a physical column in the dataset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    DailyNewCases,
    ActiveCases,
    CumulativeTotalCases,
    DailyNewDeaths,
}

impl Metric {
    /// All metrics, in display order
    pub fn all() -> &'static [Metric] {
        &[
            Metric::DailyNewCases,
            Metric::ActiveCases,
            Metric::CumulativeTotalCases,
            Metric::DailyNewDeaths,
        ]
    }

    /// Human-readable label, as shown in the selection control
    pub fn label(&self) -> &'static str {
        match self {
            Metric::DailyNewCases => "Daily New Cases",
            Metric::ActiveCases => "Active Cases",
            Metric::CumulativeTotalCases => "Cumulative Total Cases",
            Metric::DailyNewDeaths => "Daily New Deaths",
        }
    }

    /// Physical column name in the dataset
    pub fn column(&self) -> &'static str {
        match self {
            Metric::DailyNewCases => DAILY_NEW_CASES_COLUMN,
            Metric::ActiveCases => ACTIVE_CASES_COLUMN,
            Metric::CumulativeTotalCases => CUMULATIVE_TOTAL_CASES_COLUMN,
            Metric::DailyNewDeaths => DAILY_NEW_DEATHS_COLUMN,
        }
    }

    /// Parse a metric from its label, column name, or snake_case form.
    /// Case-insensitive.
    pub fn parse(input: &str) -> Option<Metric> {
        let needle = input.trim().to_lowercase();
        Metric::all().iter().copied().find(|m| {
            needle == m.label().to_lowercase()
                || needle == m.column().to_lowercase()
                || needle == m.label().to_lowercase().replace(' ', "_")
        })
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::parse(s).ok_or_else(|| {
            format!(
                "unknown metric '{}'. Valid options: {}",
                s,
                Metric::all()
                    .iter()
                    .map(|m| m.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

/// Which of the seven chart recipes to run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Line,
    Bar,
    Area,
    Histogram,
    BoxPlot,
    DualAxis,
    Heatmap,
}

impl ChartKind {
    /// All chart kinds, in display order
    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::Line,
            ChartKind::Bar,
            ChartKind::Area,
            ChartKind::Histogram,
            ChartKind::BoxPlot,
            ChartKind::DualAxis,
            ChartKind::Heatmap,
        ]
    }

    /// Human-readable label, as shown in the selection control
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line Chart",
            ChartKind::Bar => "Bar Chart",
            ChartKind::Area => "Area Chart",
            ChartKind::Histogram => "Histogram",
            ChartKind::BoxPlot => "Box Plot",
            ChartKind::DualAxis => "Dual Axis Chart (Cases & Deaths)",
            ChartKind::Heatmap => "Heatmap",
        }
    }

    /// Parse a chart kind from its label or snake_case form. Case-insensitive.
    pub fn parse(input: &str) -> Option<ChartKind> {
        let needle = input.trim().to_lowercase();
        ChartKind::all().iter().copied().find(|k| {
            needle == k.label().to_lowercase()
                || needle == k.short_name()
                || needle == k.short_name().replace('_', " ")
        })
    }

    /// Stable snake_case name, matching the serde representation
    pub fn short_name(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Area => "area",
            ChartKind::Histogram => "histogram",
            ChartKind::BoxPlot => "box_plot",
            ChartKind::DualAxis => "dual_axis",
            ChartKind::Heatmap => "heatmap",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::parse(s).ok_or_else(|| {
            format!(
                "unknown chart type '{}'. Valid options: {}",
                s,
                ChartKind::all()
                    .iter()
                    .map(|k| k.label())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}
