//! Date normalization
//!
//! Turns the raw table's free-text `Date` column into typed calendar dates.
//! The source data writes dates day-first ("13/3/2020" is 13 March 2020), so
//! parsing tries day-first formats before ISO. A value that parses under no
//! format marks its row as missing; missing rows are counted, reported, and
//! dropped. The surviving rows are sorted ascending by date.

use chrono::NaiveDate;

use super::error::{DatasetError, DatasetResult};
use super::table::{CaseRow, CaseTable, RawTable, DATE_COLUMN};

/// Day-first format ladder. Order matters: `%d/%m/%y` must come after
/// `%d/%m/%Y` so "13/3/2020" is not read as year 20.
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d/%m/%y", "%d-%m-%Y", "%Y-%m-%d"];

/// Cap on distinct unparseable samples carried in the report.
const MAX_FAILURE_SAMPLES: usize = 20;

/// Outcome of a normalization pass.
///
/// `rows_dropped > 0` is a warning, not an error: rendering continues with
/// the surviving rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizeReport {
    /// Rows in the raw table
    pub rows_total: usize,
    /// Rows dropped for an unparseable date
    pub rows_dropped: usize,
    /// Up to 20 distinct original strings that failed to parse, in
    /// encounter order
    pub failure_samples: Vec<String>,
}

impl NormalizeReport {
    /// Whether any rows were dropped
    pub fn has_failures(&self) -> bool {
        self.rows_dropped > 0
    }
}

/// Parse a single date cell using the day-first format ladder.
pub fn parse_day_first(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

/// Clean the raw table: parse dates, drop failures, sort chronologically.
///
/// Fails only if the `Date` column itself is absent. A table whose every
/// date fails to parse normalizes to an empty `CaseTable` - downstream
/// recipes render empty rather than crash.
pub fn normalize(raw: &RawTable) -> DatasetResult<(CaseTable, NormalizeReport)> {
    let date_idx = raw
        .column_index(DATE_COLUMN)
        .ok_or_else(|| DatasetError::MissingColumn {
            column: DATE_COLUMN.to_string(),
            available: raw.headers.clone(),
        })?;

    let columns: Vec<String> = raw
        .headers
        .iter()
        .enumerate()
        .filter(|(idx, _)| *idx != date_idx)
        .map(|(_, name)| name.clone())
        .collect();

    let mut rows = Vec::with_capacity(raw.len());
    let mut report = NormalizeReport {
        rows_total: raw.len(),
        ..Default::default()
    };

    for raw_row in &raw.rows {
        let cell = raw_row.get(date_idx).map(String::as_str).unwrap_or("");
        match parse_day_first(cell) {
            Some(date) => {
                let cells = raw_row
                    .iter()
                    .enumerate()
                    .filter(|(idx, _)| *idx != date_idx)
                    .map(|(_, value)| value.clone())
                    .collect();
                rows.push(CaseRow { date, cells });
            }
            None => {
                report.rows_dropped += 1;
                let original = cell.to_string();
                if report.failure_samples.len() < MAX_FAILURE_SAMPLES
                    && !report.failure_samples.contains(&original)
                {
                    report.failure_samples.push(original);
                }
            }
        }
    }

    // Stable sort keeps same-date rows in file order.
    rows.sort_by_key(|row| row.date);

    if report.has_failures() {
        tracing::warn!(
            dropped = report.rows_dropped,
            total = report.rows_total,
            samples = ?report.failure_samples,
            "Dropped rows with unparseable dates"
        );
    }

    Ok((CaseTable::new(columns, rows), report))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn test_day_first_parsing() {
        // 13/3/2020 is 13 March, not month-first.
        assert_eq!(
            parse_day_first("13/3/2020"),
            NaiveDate::from_ymd_opt(2020, 3, 13)
        );
        assert_eq!(
            parse_day_first("01/02/2021"),
            NaiveDate::from_ymd_opt(2021, 2, 1)
        );
        assert_eq!(
            parse_day_first("5-4-2020"),
            NaiveDate::from_ymd_opt(2020, 4, 5)
        );
        assert_eq!(
            parse_day_first("2020-03-13"),
            NaiveDate::from_ymd_opt(2020, 3, 13)
        );
        assert_eq!(parse_day_first("not-a-date"), None);
        assert_eq!(parse_day_first(""), None);
    }

    #[test]
    fn test_normalize_sorts_ascending() {
        let raw = raw(
            &["Date", "Daily_New_Cases"],
            &[
                &["15/3/2020", "20"],
                &["13/3/2020", "12"],
                &["14/3/2020", "15"],
            ],
        );

        let (table, report) = normalize(&raw).unwrap();
        assert!(!report.has_failures());
        let dates: Vec<_> = table.dates().collect();
        assert!(dates.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(table.rows()[0].cells, vec!["12"]);
    }

    #[test]
    fn test_unparseable_rows_dropped_and_counted() {
        let raw = raw(
            &["Date", "Daily_New_Cases"],
            &[
                &["13/3/2020", "12"],
                &["not-a-date", "99"],
                &["14/3/2020", "15"],
            ],
        );

        let (table, report) = normalize(&raw).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(report.rows_total, 3);
        assert_eq!(report.rows_dropped, 1);
        assert_eq!(report.failure_samples, vec!["not-a-date"]);
    }

    #[test]
    fn test_failure_samples_are_distinct_and_capped() {
        let mut rows: Vec<Vec<String>> = Vec::new();
        for i in 0..30 {
            rows.push(vec![format!("bad-{}", i), "1".to_string()]);
            // Duplicates must not inflate the sample list.
            rows.push(vec![format!("bad-{}", i), "1".to_string()]);
        }
        let raw = RawTable {
            headers: vec!["Date".to_string(), "Cases".to_string()],
            rows,
        };

        let (table, report) = normalize(&raw).unwrap();
        assert!(table.is_empty());
        assert_eq!(report.rows_dropped, 60);
        assert_eq!(report.failure_samples.len(), MAX_FAILURE_SAMPLES);
        assert_eq!(report.failure_samples[0], "bad-0");
    }

    #[test]
    fn test_all_dates_unparseable_yields_empty_table() {
        let raw = raw(&["Date", "Cases"], &[&["??", "1"], &["!!", "2"]]);

        let (table, report) = normalize(&raw).unwrap();
        assert!(table.is_empty());
        assert_eq!(report.rows_dropped, 2);
    }

    #[test]
    fn test_missing_date_column_is_fatal() {
        let raw = raw(&["Day", "Cases"], &[&["13/3/2020", "1"]]);

        let err = normalize(&raw).unwrap_err();
        match err {
            DatasetError::MissingColumn { column, available } => {
                assert_eq!(column, "Date");
                assert_eq!(available, vec!["Day", "Cases"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_date_cell_removed_from_row() {
        let raw = raw(
            &["Daily_New_Cases", "Date", "Notes"],
            &[&["12", "13/3/2020", "x"]],
        );

        let (table, _) = normalize(&raw).unwrap();
        assert_eq!(table.columns(), &["Daily_New_Cases", "Notes"]);
        assert_eq!(table.rows()[0].cells, vec!["12", "x"]);
    }
}
