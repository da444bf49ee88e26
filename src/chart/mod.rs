//! Chart layer
//!
//! Selections, recipes, and the dispatcher that ties them together:
//!
//! - [`selection`]: the metric and chart-type enumerations
//! - [`dispatch`]: one-of-seven dispatch over the cleaned table
//! - [`recipes`]: the seven artifact builders
//! - [`pivot`]: the month-by-day grid behind the heatmap
//! - [`artifact`]: the serializable render artifact

pub mod artifact;
pub mod dispatch;
pub mod error;
pub mod pivot;
pub mod recipes;
pub mod selection;

pub use artifact::{AxisSide, ChartArtifact, ChartDataset};
pub use dispatch::render;
pub use error::{ChartError, ChartResult};
pub use pivot::{pivot_by_month, PivotTable};
pub use selection::{ChartKind, Metric};
