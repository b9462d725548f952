//! Country table loading.
//!
//! Turns CSV text into a [`SourceTable`] holding one column per declared
//! property. Columns the schema does not declare are ignored.

use std::io::Cursor;
use std::path::Path;

use country_model::{Schema, SourceTable};

use crate::embedded::{COUNTRIES_CSV, COUNTRIES_SOURCE};
use crate::error::{Result, StandardsError};

/// Load the embedded country table.
pub fn load(schema: &Schema) -> Result<SourceTable> {
    load_from_str(COUNTRIES_CSV, COUNTRIES_SOURCE, schema)
}

/// Load a country table from a CSV file.
pub fn load_from_path(path: &Path, schema: &Schema) -> Result<SourceTable> {
    if !path.exists() {
        return Err(StandardsError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|source| StandardsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&content, &path.display().to_string(), schema)
}

/// Load a country table from CSV string content.
///
/// # CSV Structure
///
/// - First record is the header; every declared property's `column` label
///   must be present
/// - Every record has the same number of fields as the header
/// - Cells are trimmed; an empty cell means the value is absent
pub fn load_from_str(content: &str, source: &str, schema: &Schema) -> Result<SourceTable> {
    let cursor = Cursor::new(content.as_bytes());
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(cursor);

    let headers = reader
        .headers()
        .map_err(|e| StandardsError::CsvParse {
            file: source.to_string(),
            message: e.to_string(),
        })?
        .clone();

    // Resolve each declared column to its header position
    let mut positions = Vec::with_capacity(schema.properties.len());
    for property in schema.properties {
        let position = headers
            .iter()
            .position(|h| h.trim() == property.column)
            .ok_or_else(|| StandardsError::MissingColumn {
                column: property.column,
                file: source.to_string(),
            })?;
        positions.push(position);
    }

    let mut columns: Vec<Vec<String>> = vec![Vec::new(); schema.properties.len()];
    for result in reader.records() {
        let record = result.map_err(|e| StandardsError::CsvParse {
            file: source.to_string(),
            message: e.to_string(),
        })?;
        for (cells, &position) in columns.iter_mut().zip(&positions) {
            let cell = record.get(position).unwrap_or_default().trim();
            cells.push(cell.to_string());
        }
    }

    let mut table = SourceTable::new();
    for (property, cells) in schema.properties.iter().zip(columns) {
        table.push_column(property.column, cells)?;
    }

    tracing::debug!(
        file = %source,
        rows = table.row_count(),
        columns = schema.properties.len(),
        "Loaded country table"
    );

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::COUNTRY_SCHEMA;

    #[test]
    fn test_load_embedded() {
        let table = load(&COUNTRY_SCHEMA).expect("load embedded table");
        assert_eq!(table.row_count(), 249);
        for property in COUNTRY_SCHEMA.properties {
            assert!(
                table.column(property.column).is_some(),
                "missing column {}",
                property.column
            );
        }
    }

    #[test]
    fn test_embedded_cells_are_trimmed_and_aligned() {
        let table = load(&COUNTRY_SCHEMA).expect("load embedded table");
        let alpha2 = table.column("ISO3166-1-Alpha-2").expect("alpha2");
        let numeric = table.column("ISO3166-1-numeric").expect("numeric");
        let row = alpha2.iter().position(|c| c == "FR").expect("FR row");
        assert_eq!(numeric[row], "250");
        assert!(alpha2.iter().all(|c| c.trim() == c));
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv = "ISO3166-1-Alpha-2,Capital\nFR,Paris\n";
        let err = load_from_str(csv, "partial.csv", &COUNTRY_SCHEMA).unwrap_err();
        assert!(matches!(
            err,
            StandardsError::MissingColumn {
                column: "ISO3166-1-Alpha-3",
                ..
            }
        ));
    }

    #[test]
    fn test_short_record_is_a_parse_error() {
        let header = COUNTRY_SCHEMA
            .properties
            .iter()
            .map(|p| p.column)
            .collect::<Vec<_>>()
            .join(",");
        let csv = format!("{header}\nFR,FRA\n");
        let err = load_from_str(&csv, "short.csv", &COUNTRY_SCHEMA).unwrap_err();
        assert!(matches!(err, StandardsError::CsvParse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_from_path(Path::new("/nonexistent/countries.csv"), &COUNTRY_SCHEMA)
            .unwrap_err();
        assert!(matches!(err, StandardsError::FileNotFound { .. }));
    }
}
