//! Error types for source table construction.

use thiserror::Error;

/// Errors raised while assembling a [`SourceTable`](crate::SourceTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TableError {
    /// A column does not have the same number of cells as the table.
    #[error("Column '{column}' has {found} cells, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        found: usize,
    },

    /// The same column label was added twice.
    #[error("Duplicate column '{column}'")]
    DuplicateColumn { column: String },
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
