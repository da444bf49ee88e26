//! Chart dispatch
//!
//! Resolves a selection against the cleaned table and runs exactly one of
//! the seven recipes. The selected metric's column must resolve before any
//! recipe runs, even for recipes that ignore the metric; the dual-axis
//! recipe then imposes its own column requirements on top.

use chrono::NaiveDate;

use super::artifact::ChartArtifact;
use super::error::{ChartError, ChartResult};
use super::recipes;
use super::selection::{ChartKind, Metric};
use crate::dataset::{CaseTable, DAILY_NEW_CASES_COLUMN, DAILY_NEW_DEATHS_COLUMN};

/// Render one chart for the given selection.
pub fn render(table: &CaseTable, metric: Metric, kind: ChartKind) -> ChartResult<ChartArtifact> {
    // The metric must resolve to a real column before anything renders.
    if !table.has_column(metric.column()) {
        return Err(ChartError::MissingColumn {
            column: metric.column().to_string(),
            available: table.column_names(),
        });
    }

    let dates: Vec<NaiveDate> = table.dates().collect();

    let artifact = match kind {
        ChartKind::Line => {
            let values = numeric_column(table, metric.column())?;
            recipes::line(&dates, &values, metric)
        }
        ChartKind::Bar => {
            let values = numeric_column(table, metric.column())?;
            recipes::bar(&dates, &values, metric)
        }
        ChartKind::Area => {
            let values = numeric_column(table, metric.column())?;
            recipes::area(&dates, &values, metric)
        }
        ChartKind::Histogram => {
            let values = numeric_column(table, metric.column())?;
            recipes::histogram(&values, metric)
        }
        ChartKind::BoxPlot => {
            let values = numeric_column(table, metric.column())?;
            recipes::box_plot(&values, metric)
        }
        ChartKind::DualAxis => {
            // Both columns must exist regardless of the selected metric.
            let missing: Vec<String> = [DAILY_NEW_CASES_COLUMN, DAILY_NEW_DEATHS_COLUMN]
                .iter()
                .filter(|c| !table.has_column(c))
                .map(|c| c.to_string())
                .collect();
            if !missing.is_empty() {
                return Err(ChartError::DualAxisColumns { missing });
            }

            let cases = numeric_column(table, DAILY_NEW_CASES_COLUMN)?;
            let deaths = numeric_column(table, DAILY_NEW_DEATHS_COLUMN)?;
            recipes::dual_axis(&dates, &cases, &deaths)
        }
        ChartKind::Heatmap => {
            let values = numeric_column(table, metric.column())?;
            recipes::heatmap(&dates, &values, metric)
        }
    };

    Ok(artifact)
}

/// Extract a column as numbers, row by row.
fn numeric_column(table: &CaseTable, column: &str) -> ChartResult<Vec<f64>> {
    let idx = table
        .column_index(column)
        .ok_or_else(|| ChartError::MissingColumn {
            column: column.to_string(),
            available: table.column_names(),
        })?;

    table
        .rows()
        .iter()
        .map(|row| {
            let cell = row.cells[idx].trim();
            cell.parse::<f64>().map_err(|_| ChartError::NonNumeric {
                column: column.to_string(),
                value: cell.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{normalize, RawTable};

    fn table(headers: &[&str], rows: &[&[&str]]) -> CaseTable {
        let raw = RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        };
        normalize(&raw).unwrap().0
    }

    fn full_table() -> CaseTable {
        table(
            &[
                "Date",
                "Daily_New_Cases",
                "Active_Cases",
                "Cumulative_Total_Cases",
                "Daily_New_Death",
            ],
            &[
                &["13/3/2020", "12", "100", "212", "1"],
                &["14/3/2020", "15", "110", "227", "0"],
            ],
        )
    }

    #[test]
    fn test_each_kind_dispatches() {
        let table = full_table();
        for &kind in ChartKind::all() {
            let chart = render(&table, Metric::DailyNewCases, kind).unwrap();
            assert_eq!(chart.kind, kind);
        }
    }

    #[test]
    fn test_missing_metric_column_lists_available() {
        let table = table(&["Date", "Daily_New_Cases"], &[&["13/3/2020", "12"]]);

        let err = render(&table, Metric::DailyNewDeaths, ChartKind::Line).unwrap_err();
        match err {
            ChartError::MissingColumn { column, available } => {
                assert_eq!(column, "Daily_New_Death");
                assert_eq!(available, vec!["Date", "Daily_New_Cases"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_dual_axis_requires_deaths_regardless_of_metric() {
        let table = table(
            &["Date", "Daily_New_Cases", "Active_Cases"],
            &[&["13/3/2020", "12", "100"]],
        );

        // Metric resolves fine; the recipe's own requirement still fails.
        let err = render(&table, Metric::ActiveCases, ChartKind::DualAxis).unwrap_err();
        match err {
            ChartError::DualAxisColumns { missing } => {
                assert_eq!(missing, vec!["Daily_New_Death"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_numeric_cell_is_reported() {
        let table = table(
            &["Date", "Daily_New_Cases"],
            &[&["13/3/2020", "twelve"]],
        );

        let err = render(&table, Metric::DailyNewCases, ChartKind::Line).unwrap_err();
        match err {
            ChartError::NonNumeric { column, value } => {
                assert_eq!(column, "Daily_New_Cases");
                assert_eq!(value, "twelve");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_table_renders_empty_chart() {
        let table = table(
            &["Date", "Daily_New_Cases"],
            &[&["not-a-date", "12"]],
        );
        assert!(table.is_empty());

        let chart = render(&table, Metric::DailyNewCases, ChartKind::Line).unwrap();
        assert!(chart.labels.is_empty());
        assert!(chart.datasets[0].data.is_empty());
    }
}
