//! The parsed rectangular table handed over by a table provider.

use std::collections::BTreeMap;

use crate::error::{Result, TableError};

/// Column label → ordered raw cells, one cell per row.
///
/// All columns have the same number of cells; row `i` across all columns
/// describes the same entity.
///
/// # Example
///
/// ```
/// use country_model::SourceTable;
///
/// let table = SourceTable::from_columns([
///     ("Code", vec!["FR".to_string(), "DE".to_string()]),
///     ("Name", vec!["France".to_string(), "Germany".to_string()]),
/// ])
/// .expect("aligned columns");
///
/// assert_eq!(table.row_count(), 2);
/// assert_eq!(table.cell("Name", 1), Some("Germany"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    columns: BTreeMap<String, Vec<String>>,
    row_count: Option<usize>,
}

impl SourceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(label, cells)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::RaggedColumn`] if the columns differ in length,
    /// or [`TableError::DuplicateColumn`] if a label repeats.
    pub fn from_columns<I, L>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, Vec<String>)>,
        L: Into<String>,
    {
        let mut table = Self::new();
        for (label, cells) in columns {
            table.push_column(label, cells)?;
        }
        Ok(table)
    }

    /// Add a column. The first column fixes the row count.
    pub fn push_column(&mut self, label: impl Into<String>, cells: Vec<String>) -> Result<()> {
        let label = label.into();
        if self.columns.contains_key(&label) {
            return Err(TableError::DuplicateColumn { column: label });
        }
        match self.row_count {
            Some(expected) if expected != cells.len() => {
                return Err(TableError::RaggedColumn {
                    column: label,
                    expected,
                    found: cells.len(),
                });
            }
            Some(_) => {}
            None => self.row_count = Some(cells.len()),
        }
        self.columns.insert(label, cells);
        Ok(())
    }

    /// Number of rows (0 for a table without columns).
    pub fn row_count(&self) -> usize {
        self.row_count.unwrap_or(0)
    }

    /// Cells of a column, if present.
    pub fn column(&self, label: &str) -> Option<&[String]> {
        self.columns.get(label).map(Vec::as_slice)
    }

    /// A single cell by 0-based row position.
    pub fn cell(&self, label: &str, row: usize) -> Option<&str> {
        self.column(label)?.get(row).map(String::as_str)
    }

    /// True if the table has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn rejects_ragged_columns() {
        let result = SourceTable::from_columns([
            ("A", cells(&["1", "2"])),
            ("B", cells(&["x"])),
        ]);
        assert_eq!(
            result,
            Err(TableError::RaggedColumn {
                column: "B".to_string(),
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn rejects_duplicate_labels() {
        let mut table = SourceTable::new();
        table.push_column("A", cells(&["1"])).expect("first column");
        let err = table.push_column("A", cells(&["2"])).unwrap_err();
        assert!(matches!(err, TableError::DuplicateColumn { .. }));
    }

    #[test]
    fn empty_table_has_no_rows() {
        let table = SourceTable::new();
        assert!(table.is_empty());
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column("A"), None);
    }
}
