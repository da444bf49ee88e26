//! The seven chart recipes
//!
//! Each recipe turns prepared series data into a [`ChartArtifact`]. Column
//! resolution and numeric extraction happen in the dispatcher; recipes only
//! shape data. All recipes accept empty input and produce an empty artifact.

use chrono::NaiveDate;

use super::artifact::{ChartArtifact, ChartDataset};
use super::pivot::{pivot_by_month, DAYS_PER_MONTH};
use super::selection::{ChartKind, Metric};

/// Date on the x-axis, one continuous line of the metric.
pub fn line(dates: &[NaiveDate], values: &[f64], metric: Metric) -> ChartArtifact {
    time_series(
        ChartKind::Line,
        format!("{} Over Time", metric.label()),
        dates,
        values,
        metric,
    )
}

/// Same axes as [`line`], discrete bars per date.
pub fn bar(dates: &[NaiveDate], values: &[f64], metric: Metric) -> ChartArtifact {
    time_series(
        ChartKind::Bar,
        format!("{} (Bar Chart)", metric.label()),
        dates,
        values,
        metric,
    )
}

/// Same axes as [`line`], filled area under the curve.
pub fn area(dates: &[NaiveDate], values: &[f64], metric: Metric) -> ChartArtifact {
    time_series(
        ChartKind::Area,
        format!("{} (Area Chart)", metric.label()),
        dates,
        values,
        metric,
    )
}

fn time_series(
    kind: ChartKind,
    title: String,
    dates: &[NaiveDate],
    values: &[f64],
    metric: Metric,
) -> ChartArtifact {
    ChartArtifact {
        kind,
        title,
        x_label: "Date".to_string(),
        y_label: metric.label().to_string(),
        y2_label: None,
        labels: date_labels(dates),
        datasets: vec![ChartDataset::new(metric.label(), values.to_vec(), 0)],
    }
}

/// Distribution of the metric's values; the date axis is ignored.
///
/// Bin count follows Sturges' rule, with a single bin when all values are
/// equal. Labels are the bin ranges, data are the counts.
pub fn histogram(values: &[f64], metric: Metric) -> ChartArtifact {
    let title = format!("Distribution of {}", metric.label());

    if values.is_empty() {
        return ChartArtifact {
            kind: ChartKind::Histogram,
            title,
            x_label: metric.label().to_string(),
            y_label: "Count".to_string(),
            y2_label: None,
            labels: Vec::new(),
            datasets: vec![ChartDataset::new(metric.label(), Vec::new(), 0)],
        };
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let bins = sturges_bins(values.len());
    let width = if max > min { (max - min) / bins as f64 } else { 1.0 };

    let mut counts = vec![0.0; bins];
    for &value in values {
        let mut idx = ((value - min) / width) as usize;
        if idx >= bins {
            idx = bins - 1; // max lands in the last bin
        }
        counts[idx] += 1.0;
    }

    let labels = (0..bins)
        .map(|i| {
            let lo = min + i as f64 * width;
            format!("{:.1} - {:.1}", lo, lo + width)
        })
        .collect();

    ChartArtifact {
        kind: ChartKind::Histogram,
        title,
        x_label: metric.label().to_string(),
        y_label: "Count".to_string(),
        y2_label: None,
        labels,
        datasets: vec![ChartDataset::new(metric.label(), counts, 0)],
    }
}

/// Single-variable box-and-whisker summary across all dates.
pub fn box_plot(values: &[f64], metric: Metric) -> ChartArtifact {
    let title = format!("{} (Box Plot)", metric.label());

    let (labels, data) = if values.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        (
            ["Min", "Q1", "Median", "Q3", "Max"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            vec![
                sorted[0],
                quantile(&sorted, 0.25),
                quantile(&sorted, 0.5),
                quantile(&sorted, 0.75),
                sorted[sorted.len() - 1],
            ],
        )
    };

    ChartArtifact {
        kind: ChartKind::BoxPlot,
        title,
        x_label: String::new(),
        y_label: metric.label().to_string(),
        y2_label: None,
        labels,
        datasets: vec![ChartDataset::new(metric.label(), data, 0)],
    }
}

/// Cases on the left axis, deaths dashed on the right axis, shared dates.
///
/// Both series sit in one `datasets` list, so a renderer drawing one legend
/// per artifact gets the combined legend for free.
pub fn dual_axis(dates: &[NaiveDate], cases: &[f64], deaths: &[f64]) -> ChartArtifact {
    ChartArtifact {
        kind: ChartKind::DualAxis,
        title: "Daily New Cases & Daily New Deaths".to_string(),
        x_label: "Date".to_string(),
        y_label: Metric::DailyNewCases.label().to_string(),
        y2_label: Some(Metric::DailyNewDeaths.label().to_string()),
        labels: date_labels(dates),
        datasets: vec![
            ChartDataset::new(Metric::DailyNewCases.label(), cases.to_vec(), 0),
            ChartDataset::new(Metric::DailyNewDeaths.label(), deaths.to_vec(), 1)
                .dashed()
                .right_axis(),
        ],
    }
}

/// Color-intensity grid: day of month across, year-month down, summed cells.
pub fn heatmap(dates: &[NaiveDate], values: &[f64], metric: Metric) -> ChartArtifact {
    let pivot = pivot_by_month(dates, values);

    let datasets = pivot
        .row_labels
        .iter()
        .zip(pivot.cells)
        .enumerate()
        .map(|(i, (label, row))| ChartDataset::new(label.clone(), row, i))
        .collect();

    ChartArtifact {
        kind: ChartKind::Heatmap,
        title: format!("Heatmap of {} Over Time", metric.label()),
        x_label: "Day of Month".to_string(),
        y_label: "Month-Year".to_string(),
        y2_label: None,
        labels: (1..=DAYS_PER_MONTH).map(|d| d.to_string()).collect(),
        datasets,
    }
}

/// Format dates for the x-axis
fn date_labels(dates: &[NaiveDate]) -> Vec<String> {
    dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect()
}

/// Sturges' rule: ceil(log2(n)) + 1 bins
fn sturges_bins(n: usize) -> usize {
    ((n as f64).log2().ceil() as usize + 1).max(1)
}

/// Linear-interpolation quantile over a sorted, non-empty slice
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::artifact::AxisSide;

    fn dates(days: &[u32]) -> Vec<NaiveDate> {
        days.iter()
            .map(|&d| NaiveDate::from_ymd_opt(2020, 3, d).unwrap())
            .collect()
    }

    #[test]
    fn test_line_artifact() {
        let chart = line(&dates(&[13, 14]), &[12.0, 15.0], Metric::DailyNewCases);
        assert_eq!(chart.kind, ChartKind::Line);
        assert_eq!(chart.title, "Daily New Cases Over Time");
        assert_eq!(chart.labels, vec!["2020-03-13", "2020-03-14"]);
        assert_eq!(chart.datasets.len(), 1);
        assert_eq!(chart.datasets[0].data, vec![12.0, 15.0]);
    }

    #[test]
    fn test_bar_and_area_titles() {
        let d = dates(&[13]);
        assert_eq!(
            bar(&d, &[1.0], Metric::ActiveCases).title,
            "Active Cases (Bar Chart)"
        );
        assert_eq!(
            area(&d, &[1.0], Metric::ActiveCases).title,
            "Active Cases (Area Chart)"
        );
    }

    #[test]
    fn test_sturges_bins() {
        assert_eq!(sturges_bins(1), 1);
        assert_eq!(sturges_bins(8), 4);
        assert_eq!(sturges_bins(100), 8);
    }

    #[test]
    fn test_histogram_counts_sum_to_n() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let chart = histogram(&values, Metric::DailyNewCases);

        let total: f64 = chart.datasets[0].data.iter().sum();
        assert_eq!(total, 100.0);
        assert_eq!(chart.labels.len(), chart.datasets[0].data.len());
    }

    #[test]
    fn test_histogram_constant_values_single_bin() {
        let chart = histogram(&[5.0, 5.0, 5.0], Metric::DailyNewCases);
        // All mass in the first bin; no division by zero on a flat series.
        assert_eq!(chart.datasets[0].data[0], 3.0);
    }

    #[test]
    fn test_histogram_empty() {
        let chart = histogram(&[], Metric::DailyNewCases);
        assert!(chart.labels.is_empty());
        assert!(chart.datasets[0].data.is_empty());
    }

    #[test]
    fn test_box_plot_stats() {
        let chart = box_plot(&[4.0, 1.0, 3.0, 2.0, 5.0], Metric::ActiveCases);
        assert_eq!(chart.labels, vec!["Min", "Q1", "Median", "Q3", "Max"]);
        assert_eq!(chart.datasets[0].data, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_box_plot_interpolates_quartiles() {
        let chart = box_plot(&[1.0, 2.0, 3.0, 4.0], Metric::ActiveCases);
        assert_eq!(chart.datasets[0].data[1], 1.75); // q1
        assert_eq!(chart.datasets[0].data[2], 2.5); // median
        assert_eq!(chart.datasets[0].data[3], 3.25); // q3
    }

    #[test]
    fn test_dual_axis_styles() {
        let chart = dual_axis(&dates(&[13, 14]), &[100.0, 120.0], &[1.0, 2.0]);

        assert_eq!(chart.datasets.len(), 2);
        let cases = &chart.datasets[0];
        let deaths = &chart.datasets[1];
        assert_eq!(cases.axis, AxisSide::Left);
        assert!(!cases.dashed);
        assert_eq!(deaths.axis, AxisSide::Right);
        assert!(deaths.dashed);
        assert_eq!(chart.y2_label.as_deref(), Some("Daily New Deaths"));
    }

    #[test]
    fn test_heatmap_rows_and_columns() {
        let dates = [
            NaiveDate::from_ymd_opt(2020, 3, 13).unwrap(),
            NaiveDate::from_ymd_opt(2020, 3, 14).unwrap(),
            NaiveDate::from_ymd_opt(2020, 4, 1).unwrap(),
        ];
        let chart = heatmap(&dates, &[12.0, 15.0, 7.0], Metric::DailyNewCases);

        assert_eq!(chart.labels.len(), 31);
        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.datasets[0].label, "2020-03");
        assert_eq!(chart.datasets[0].data[12], 12.0);
        assert_eq!(chart.datasets[0].data[13], 15.0);
        assert_eq!(chart.datasets[1].label, "2020-04");
        assert_eq!(chart.datasets[1].data[0], 7.0);
    }

    #[test]
    fn test_recipes_accept_empty_table() {
        let chart = line(&[], &[], Metric::DailyNewCases);
        assert!(chart.labels.is_empty());
        let chart = box_plot(&[], Metric::DailyNewCases);
        assert!(chart.datasets[0].data.is_empty());
        let chart = heatmap(&[], &[], Metric::DailyNewCases);
        assert!(chart.datasets.is_empty());
    }
}
