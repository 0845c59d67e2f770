//! Vendor matrix parser.
//!
//! The matrix is a comma-delimited export with two non-tabular preamble
//! lines ahead of the header row, encoded as ISO-8859-1 rather than UTF-8.
//! Peripheral and crypto columns carry single-byte glyphs (superscript two,
//! escaped dashes) that corrupt under a UTF-8 read, so the whole file is
//! decoded byte-for-byte before the CSV layer sees it.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use super::source::{MatrixTable, SourceMetadata};
use crate::error::{ChipgenError, Result};

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Non-tabular lines to skip before the header row.
    pub preamble_lines: usize,
    /// Field delimiter.
    pub delimiter: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            preamble_lines: 2,
            delimiter: b',',
        }
    }
}

/// Parses vendor matrix files.
pub struct MatrixParser {
    config: ParserConfig,
}

impl MatrixParser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a matrix file and return the table and source metadata.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(MatrixTable, SourceMetadata)> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| ChipgenError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| ChipgenError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let text = decode_latin1(&contents);
        let table = self.parse_text(&text)?;

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, metadata))
    }

    /// Parse already-decoded matrix text.
    pub fn parse_text(&self, text: &str) -> Result<MatrixTable> {
        let body = self.skip_preamble(text)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(body.as_bytes());

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(ChipgenError::EmptyData("no header row found".to_string()));
        }

        let expected_cols = headers.len();
        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result?;
            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();

            // Normalize ragged rows to the header width.
            while row.len() < expected_cols {
                row.push(String::new());
            }
            row.truncate(expected_cols);

            rows.push(row);
        }

        if rows.is_empty() {
            return Err(ChipgenError::EmptyData("no data rows found".to_string()));
        }

        Ok(MatrixTable::new(headers, rows))
    }

    /// Drop the fixed preamble lines ahead of the header row.
    fn skip_preamble<'a>(&self, text: &'a str) -> Result<&'a str> {
        let mut rest = text;
        for _ in 0..self.config.preamble_lines {
            match rest.find('\n') {
                Some(idx) => rest = &rest[idx + 1..],
                None => {
                    return Err(ChipgenError::EmptyData(
                        "file ends inside the preamble".to_string(),
                    ))
                }
            }
        }
        Ok(rest)
    }
}

impl Default for MatrixParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode ISO-8859-1 bytes. Each byte maps to the identical Unicode
/// code point, so no translation table is needed.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
