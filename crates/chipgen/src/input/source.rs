//! Parsed matrix data and source metadata.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata about the vendor matrix file a run was generated from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of data rows (excluding preamble and header).
    pub row_count: usize,
    /// Number of columns.
    pub column_count: usize,
    /// When the conversion was performed.
    pub generated_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Create metadata for a matrix file that has been parsed.
    pub fn new(
        path: PathBuf,
        hash: String,
        size_bytes: u64,
        row_count: usize,
        column_count: usize,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            file,
            path,
            hash,
            size_bytes,
            row_count,
            column_count,
            generated_at: Utc::now(),
        }
    }
}

/// The tabular portion of a vendor matrix file.
#[derive(Debug, Clone)]
pub struct MatrixTable {
    /// Column headers from the third line of the file.
    pub headers: Vec<String>,
    /// Row data as strings (row-major order).
    pub rows: Vec<Vec<String>>,
}

impl MatrixTable {
    /// Create a new matrix table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col).map(|s| s.as_str()))
    }
}
