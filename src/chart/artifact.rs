//! Chart artifact types
//!
//! The renderable output of a chart recipe. One shape covers all seven
//! recipes: x-axis labels plus one or more datasets, each dataset carrying
//! its own style and axis assignment. A heatmap is a dataset per pivot row;
//! a histogram's labels are its bin ranges.

use serde::Serialize;

use super::selection::ChartKind;

/// Suggested series colors, cycled by dataset index.
pub const PALETTE: &[&str] = &["#4CAF50", "#2196F3", "#FF9800", "#9C27B0", "#F44336"];

/// Pick a palette color for a dataset index
pub fn palette_color(index: usize) -> String {
    PALETTE[index % PALETTE.len()].to_string()
}

/// Which vertical axis a dataset is plotted against
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AxisSide {
    Left,
    Right,
}

/// A renderable chart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartArtifact {
    /// Which recipe produced this artifact
    pub kind: ChartKind,
    /// Chart title
    pub title: String,
    /// Horizontal axis label
    pub x_label: String,
    /// Left vertical axis label
    pub y_label: String,
    /// Right vertical axis label (dual-axis only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y2_label: Option<String>,
    /// Labels along the horizontal axis (dates, bin ranges, days of month)
    pub labels: Vec<String>,
    /// Data series. All series share one legend, whichever axis they use.
    pub datasets: Vec<ChartDataset>,
}

/// A single data series within an artifact
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartDataset {
    /// Legend label
    pub label: String,
    /// One value per x-axis label
    pub data: Vec<f64>,
    /// Suggested color
    pub color: String,
    /// Render with a dashed stroke
    pub dashed: bool,
    /// Which vertical axis this series belongs to
    pub axis: AxisSide,
}

impl ChartDataset {
    /// Create a solid, left-axis dataset with a palette color
    pub fn new(label: impl Into<String>, data: Vec<f64>, index: usize) -> Self {
        Self {
            label: label.into(),
            data,
            color: palette_color(index),
            dashed: false,
            axis: AxisSide::Left,
        }
    }

    /// Builder method: dashed stroke
    pub fn dashed(mut self) -> Self {
        self.dashed = true;
        self
    }

    /// Builder method: plot against the right axis
    pub fn right_axis(mut self) -> Self {
        self.axis = AxisSide::Right;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), PALETTE[0]);
        assert_eq!(palette_color(PALETTE.len()), PALETTE[0]);
        assert_eq!(palette_color(PALETTE.len() + 2), PALETTE[2]);
    }

    #[test]
    fn test_dataset_builder() {
        let ds = ChartDataset::new("deaths", vec![1.0, 2.0], 1)
            .dashed()
            .right_axis();
        assert!(ds.dashed);
        assert_eq!(ds.axis, AxisSide::Right);
        assert_eq!(ds.color, PALETTE[1]);
    }
}
