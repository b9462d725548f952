//! Error types for table loading operations.

use std::path::PathBuf;

use country_model::TableError;
use thiserror::Error;

/// Errors that can occur when loading the country table.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Data file not found.
    #[error("Data file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read the data file.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a CSV record.
    #[error("Failed to parse CSV {file}: {message}")]
    CsvParse { file: String, message: String },

    /// A declared column is missing from the CSV header.
    #[error("Column '{column}' missing from {file}")]
    MissingColumn { column: &'static str, file: String },

    /// Columns could not be assembled into a table.
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Result type for table loading operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
