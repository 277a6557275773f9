//! Dataset error types
//!
//! Every variant is a startup failure: the dashboard refuses to serve
//! without a fully loaded table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the economic dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The source file could not be opened or read
    #[error("Failed to read dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV parser rejected the input (bad quoting, ragged rows, bad UTF-8)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row
    #[error("Missing required column: {0:?}")]
    MissingColumn(String),

    /// A cell could not be converted to the column's type
    #[error("Line {line}: invalid {column} value {value:?}")]
    Parse {
        line: u64,
        column: String,
        value: String,
    },

    /// Header present but no data rows
    #[error("Dataset contains no records")]
    Empty,
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
