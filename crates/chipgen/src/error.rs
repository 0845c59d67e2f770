//! Error types for the chipgen library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for matrix conversion.
#[derive(Debug, Error)]
pub enum ChipgenError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing emitted records.
    #[error("output write error: {0}")]
    Output(#[from] std::io::Error),

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to convert.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// A cell violated the shape the column mapping assumes.
    #[error("Malformed cell in column '{column}' at data row {row}: {detail}")]
    MalformedCell {
        column: String,
        row: usize,
        detail: String,
    },

    /// A column the assembler depends on was never populated.
    #[error("Part '{part}' is missing required field '{column}'")]
    MissingColumn { column: String, part: String },

    /// No decoder rule matched the part name.
    #[error("Part '{part}' does not match any known family")]
    UnknownFamily { part: String },

    /// A decoder rule matched but its extraction pattern did not.
    #[error("Part '{part}' could not be parsed by its family pattern")]
    Unparseable { part: String },

    /// The decoded temperature-grade letter is not a recognized grade.
    #[error("Part '{part}' has unrecognized temperature grade '{grade}'")]
    UnknownTempGrade { part: String, grade: char },
}

/// Result type alias for chipgen operations.
pub type Result<T> = std::result::Result<T, ChipgenError>;
