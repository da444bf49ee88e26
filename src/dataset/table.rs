//! Core table types for the caseboard dataset layer
//!
//! This module defines the two shapes the data takes on its way to a chart:
//! - `RawTable`: the CSV exactly as read, every cell still a string
//! - `CaseTable`: the cleaned table with a typed, sorted date column
//!
//! Columns other than `Date` are carried through untyped; they are only
//! interpreted when a chart recipe asks for them.

use chrono::NaiveDate;
use serde::Serialize;

/// Physical column names the source dataset is expected to carry.
pub const DATE_COLUMN: &str = "Date";
pub const DAILY_NEW_CASES_COLUMN: &str = "Daily_New_Cases";
pub const ACTIVE_CASES_COLUMN: &str = "Active_Cases";
pub const CUMULATIVE_TOTAL_CASES_COLUMN: &str = "Cumulative_Total_Cases";
pub const DAILY_NEW_DEATHS_COLUMN: &str = "Daily_New_Death";

/// A CSV file as read from disk: headers plus string cells, no coercion.
///
/// Kept unmodified so parse failures can be reported with the original text.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Column names from the header row
    pub headers: Vec<String>,
    /// Data rows, each aligned with `headers`
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Find the index of a column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One cleaned row: a parsed date plus the remaining cells.
///
/// `cells` is aligned with `CaseTable::columns` (the date cell is removed).
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRow {
    /// The parsed calendar date
    pub date: NaiveDate,
    /// Remaining cells in column order
    pub cells: Vec<String>,
}

/// The cleaned case table.
///
/// Invariants (established by the normalizer):
/// - rows are sorted non-decreasing by date
/// - every row has a valid date
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CaseTable {
    columns: Vec<String>,
    rows: Vec<CaseRow>,
}

impl CaseTable {
    /// Build a table from non-date column names and cleaned rows.
    ///
    /// Callers must hand in rows already sorted by date.
    pub fn new(columns: Vec<String>, rows: Vec<CaseRow>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].date <= w[1].date));
        Self { columns, rows }
    }

    /// Non-date column names, in original order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// All column names as a user would see them, `Date` first.
    ///
    /// Used for error messages that list what is actually available.
    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.columns.len() + 1);
        names.push(DATE_COLUMN.to_string());
        names.extend(self.columns.iter().cloned());
        names
    }

    /// Cleaned rows in date order
    pub fn rows(&self) -> &[CaseRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty (e.g. every date failed to parse)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the index of a non-date column by exact name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Whether a non-date column exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// The date of every row, in order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.rows.iter().map(|r| r.date)
    }

    /// Infer a display kind for every column, `Date` included.
    ///
    /// Mirrors the dtype panel of the source dashboard: a column is an
    /// integer if every non-empty cell parses as one, a float if every
    /// non-empty cell parses as a number, text otherwise.
    pub fn column_kinds(&self) -> Vec<(String, ColumnKind)> {
        let mut kinds = Vec::with_capacity(self.columns.len() + 1);
        kinds.push((DATE_COLUMN.to_string(), ColumnKind::Date));

        for (idx, name) in self.columns.iter().enumerate() {
            let mut kind = ColumnKind::Integer;
            let mut saw_value = false;

            for row in &self.rows {
                let cell = row.cells[idx].trim();
                if cell.is_empty() {
                    continue;
                }
                saw_value = true;

                if cell.parse::<i64>().is_ok() {
                    continue;
                }
                if cell.parse::<f64>().is_ok() {
                    kind = kind.widen(ColumnKind::Float);
                } else {
                    kind = ColumnKind::Text;
                    break;
                }
            }

            if !saw_value {
                kind = ColumnKind::Text;
            }
            kinds.push((name.clone(), kind));
        }

        kinds
    }
}

/// Inferred kind of a column, for the preview panel
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// The normalized date column
    Date,
    /// Every non-empty cell parses as i64
    Integer,
    /// Every non-empty cell parses as f64, at least one is not an integer
    Float,
    /// Anything else
    Text,
}

impl ColumnKind {
    fn widen(self, other: ColumnKind) -> ColumnKind {
        match (self, other) {
            (ColumnKind::Integer, ColumnKind::Float) => ColumnKind::Float,
            (current, _) => current,
        }
    }
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnKind::Date => write!(f, "date"),
            ColumnKind::Integer => write!(f, "integer"),
            ColumnKind::Float => write!(f, "float"),
            ColumnKind::Text => write!(f, "text"),
        }
    }
}
