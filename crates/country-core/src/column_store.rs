//! Column-oriented storage for the parsed country table.
//!
//! # Architecture
//!
//! ```text
//! ColumnStore
//! ├── columns: Vec<Column>           (one per declared property, same order)
//! │   ├── alpha2    -> Symbol(Vec<Option<Symbol>>)
//! │   ├── numeric   -> Integer(Vec<Option<i64>>)
//! │   └── name_en   -> Text(Vec<Option<Box<str>>>)
//! └── symbols: SymbolTable           (interning for symbol columns)
//! ```
//!
//! Rows are addressed 1..=N. Absent cells (empty text, `0` integers) are
//! stored as `None`.

use country_model::{
    PropertyDescriptor, Representation, ScalarKind, Schema, SourceTable, Symbol, SymbolTable,
    Value,
};

use crate::error::{CountryError, Result};

/// A typed column, one entry per row.
#[derive(Debug)]
enum Column {
    Text(Vec<Option<Box<str>>>),
    Symbol(Vec<Option<Symbol>>),
    Integer(Vec<Option<i64>>),
}

/// Typed, row-aligned storage for every declared property.
#[derive(Debug)]
pub struct ColumnStore {
    columns: Vec<Column>,
    rows: usize,
    symbols: SymbolTable,
}

impl ColumnStore {
    /// Build the store from a source table.
    ///
    /// # Errors
    ///
    /// - [`CountryError::MissingColumn`] if a declared column is absent
    /// - [`CountryError::InvalidValue`] if an integer cell does not parse
    pub fn build(table: &SourceTable, schema: &Schema) -> Result<Self> {
        let rows = table.row_count();
        let mut symbols = SymbolTable::new();
        let mut columns = Vec::with_capacity(schema.properties.len());

        for property in schema.properties {
            let cells = table
                .column(property.column)
                .ok_or(CountryError::MissingColumn {
                    column: property.column,
                })?;
            columns.push(parse_column(property, cells, &mut symbols)?);
        }

        tracing::debug!(
            rows,
            columns = columns.len(),
            interned = symbols.len(),
            "Built column store"
        );

        Ok(Self {
            columns,
            rows,
            symbols,
        })
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of distinct interned symbols.
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Value at `row` (1-based) of the column in `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` or `row` is out of range. Handles are bounds-checked
    /// before they reach the store.
    pub fn get(&self, slot: usize, row: usize) -> Option<Value<'_>> {
        let position = row - 1;
        match &self.columns[slot] {
            Column::Text(cells) => cells[position].as_deref().map(Value::Text),
            Column::Symbol(cells) => cells[position].as_ref().map(Value::Symbol),
            Column::Integer(cells) => cells[position].map(Value::Integer),
        }
    }

    /// `(row, text)` pairs of a text or symbol column, rows 1-based.
    pub fn text_cells(&self, slot: usize) -> Vec<(usize, Option<&str>)> {
        match &self.columns[slot] {
            Column::Text(cells) => cells
                .iter()
                .enumerate()
                .map(|(i, cell)| (i + 1, cell.as_deref()))
                .collect(),
            Column::Symbol(cells) => cells
                .iter()
                .enumerate()
                .map(|(i, cell)| (i + 1, cell.as_ref().map(Symbol::as_str)))
                .collect(),
            Column::Integer(_) => Vec::new(),
        }
    }

    /// `(row, value)` pairs of an integer column, rows 1-based.
    pub fn integer_cells(&self, slot: usize) -> Vec<(usize, Option<i64>)> {
        match &self.columns[slot] {
            Column::Integer(cells) => cells
                .iter()
                .enumerate()
                .map(|(i, cell)| (i + 1, *cell))
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn parse_column(
    property: &PropertyDescriptor,
    cells: &[String],
    symbols: &mut SymbolTable,
) -> Result<Column> {
    let column = match (property.kind, property.representation) {
        (ScalarKind::Integer, _) => {
            let mut values = Vec::with_capacity(cells.len());
            for (i, cell) in cells.iter().enumerate() {
                values.push(parse_integer(property, i + 1, cell)?);
            }
            Column::Integer(values)
        }
        (ScalarKind::Text, Representation::Symbol) => Column::Symbol(
            cells
                .iter()
                .map(|cell| non_empty(cell).map(|text| symbols.intern(text)))
                .collect(),
        ),
        (ScalarKind::Text, Representation::Text) => Column::Text(
            cells
                .iter()
                .map(|cell| non_empty(cell).map(Box::from))
                .collect(),
        ),
    };
    Ok(column)
}

/// Parse an integer cell; empty and zero both mean absent.
fn parse_integer(property: &PropertyDescriptor, row: usize, cell: &str) -> Result<Option<i64>> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| CountryError::InvalidValue {
            property: property.name,
            row,
            value: cell.to_string(),
        })?;
    Ok((value != 0).then_some(value))
}

fn non_empty(cell: &str) -> Option<&str> {
    (!cell.is_empty()).then_some(cell)
}
