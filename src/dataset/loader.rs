//! CSV loader with a per-path memoized cache
//!
//! The loader reads a CSV file into a `RawTable` with every cell left as a
//! string, so the normalizer can report original text for values it cannot
//! parse. Results are cached per path: the first load pays the disk I/O,
//! every later load of the same path is served from memory for the lifetime
//! of the process. The cache is write-once per path and never evicts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use super::error::{DatasetError, DatasetResult};
use super::table::RawTable;

/// Loads CSV files and memoizes the result per path.
#[derive(Debug, Default)]
pub struct DatasetLoader {
    cache: RwLock<HashMap<PathBuf, Arc<RawTable>>>,
}

impl DatasetLoader {
    /// Create an empty loader
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Load a CSV file, serving repeated loads of the same path from cache.
    ///
    /// A missing or malformed file is fatal to the caller; nothing is cached
    /// for a failed load, so a later request retries the disk.
    pub fn load(&self, path: &Path) -> DatasetResult<Arc<RawTable>> {
        if let Some(table) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
        {
            tracing::debug!(path = %path.display(), "Dataset served from cache");
            return Ok(Arc::clone(table));
        }

        let table = Arc::new(read_csv(path)?);
        tracing::info!(
            path = %path.display(),
            rows = table.len(),
            columns = table.headers.len(),
            "Dataset loaded"
        );

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // A concurrent load of the same path may have won the race; keep the
        // first entry so every caller shares one table.
        let entry = cache
            .entry(path.to_path_buf())
            .or_insert_with(|| Arc::clone(&table));
        Ok(Arc::clone(entry))
    }

    /// Number of cached datasets
    pub fn cached_count(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Read a CSV file into a `RawTable`, strings as-is.
fn read_csv(path: &Path) -> DatasetResult<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        // Short rows are padded so every row aligns with the header.
        let mut row: Vec<String> = record.iter().map(|c| c.to_string()).collect();
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    Ok(RawTable { headers, rows })
}
