//! Month-by-day pivot for the heatmap
//!
//! Reshapes the (date, value) series into a grid: one row per year-month,
//! one column per day of month (1-31), cell = sum of the metric on that day.
//! Built fresh per render and discarded afterwards; the cleaned table is
//! never mutated.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Days in the pivot's column axis
pub const DAYS_PER_MONTH: usize = 31;

/// The derived heatmap grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    /// Year-month row keys ("%Y-%m"), chronological order
    pub row_labels: Vec<String>,
    /// One row of 31 day sums per row label; absent days are 0
    pub cells: Vec<Vec<f64>>,
}

impl PivotTable {
    /// Whether the pivot has no rows
    pub fn is_empty(&self) -> bool {
        self.row_labels.is_empty()
    }
}

/// Build the pivot from parallel date/value slices.
///
/// Row keys come from chrono's `%Y-%m` formatting, which zero-pads the month
/// and writes four-digit years for the whole AD range this data can hold, so
/// lexicographic key order IS chronological order. That property belongs to
/// the formatter, not the input data; the BTreeMap relies on it.
pub fn pivot_by_month(dates: &[NaiveDate], values: &[f64]) -> PivotTable {
    debug_assert_eq!(dates.len(), values.len());

    let mut rows: BTreeMap<String, Vec<f64>> = BTreeMap::new();

    for (date, value) in dates.iter().zip(values) {
        let key = date.format("%Y-%m").to_string();
        let row = rows
            .entry(key)
            .or_insert_with(|| vec![0.0; DAYS_PER_MONTH]);
        row[date.day() as usize - 1] += value;
    }

    let (row_labels, cells) = rows.into_iter().unzip();
    PivotTable { row_labels, cells }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_month_lands_in_one_row() {
        let dates = [date(2020, 3, 13), date(2020, 3, 14)];
        let values = [12.0, 15.0];

        let pivot = pivot_by_month(&dates, &values);
        assert_eq!(pivot.row_labels, vec!["2020-03"]);
        assert_eq!(pivot.cells[0][12], 12.0); // day 13
        assert_eq!(pivot.cells[0][13], 15.0); // day 14
        assert_eq!(pivot.cells[0][0], 0.0);
    }

    #[test]
    fn test_months_are_separate_rows_in_order() {
        // Insert out of order; the pivot must still come out chronological.
        let dates = [date(2021, 1, 5), date(2020, 12, 5), date(2020, 3, 5)];
        let values = [1.0, 2.0, 3.0];

        let pivot = pivot_by_month(&dates, &values);
        assert_eq!(pivot.row_labels, vec!["2020-03", "2020-12", "2021-01"]);
        assert_eq!(pivot.cells[0][4], 3.0);
        assert_eq!(pivot.cells[1][4], 2.0);
        assert_eq!(pivot.cells[2][4], 1.0);
    }

    #[test]
    fn test_duplicate_days_are_summed() {
        let dates = [date(2020, 3, 13), date(2020, 3, 13)];
        let values = [10.0, 5.0];

        let pivot = pivot_by_month(&dates, &values);
        assert_eq!(pivot.cells[0][12], 15.0);
    }

    #[test]
    fn test_empty_input() {
        let pivot = pivot_by_month(&[], &[]);
        assert!(pivot.is_empty());
    }
}
