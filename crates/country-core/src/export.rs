//! Tabular export: every Catalog entity as one row of named columns.
//!
//! Rows are built only through [`Countries::all`] and [`Countries::get`], so
//! any "rows × named columns" consumer can be served the same way.

use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};

use country_model::Value;

use crate::countries::Countries;
use crate::entity::Country;
use crate::error::Result;

/// An owned exported value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Integer(i64),
}

impl Cell {
    fn from_value(value: Value<'_>) -> Self {
        match value.as_integer() {
            Some(number) => Cell::Integer(number),
            None => Cell::Text(value.to_string()),
        }
    }

    fn to_field(&self) -> String {
        match self {
            Cell::Text(text) => text.clone(),
            Cell::Integer(number) => number.to_string(),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Cell::Text(text) => serializer.serialize_str(text),
            Cell::Integer(number) => serializer.serialize_i64(*number),
        }
    }
}

/// One exported entity: `(property, value)` pairs in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRow {
    pub country: Country,
    pub cells: Vec<(&'static str, Option<Cell>)>,
}

impl ExportRow {
    /// Value of `property`, if present.
    pub fn cell(&self, property: &str) -> Option<&Cell> {
        self.cells
            .iter()
            .find(|(name, _)| *name == property)
            .and_then(|(_, value)| value.as_ref())
    }
}

impl Serialize for ExportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, value) in &self.cells {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Catalog entities in canonical order, one row each.
pub fn rows(countries: &Countries) -> Result<Vec<ExportRow>> {
    countries
        .all()
        .sorted()
        .into_iter()
        .map(|country| {
            let cells = countries
                .properties()
                .iter()
                .map(|property| {
                    let value = countries
                        .get(country, property.name)?
                        .map(Cell::from_value);
                    Ok((property.name, value))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(ExportRow { country, cells })
        })
        .collect()
}

/// Write the table as CSV with a header of property names.
pub fn write_csv<W: Write>(countries: &Countries, writer: W) -> Result<()> {
    let rows = rows(countries)?;
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(countries.properties().iter().map(|p| p.name))?;
    for row in &rows {
        csv.write_record(
            row.cells
                .iter()
                .map(|(_, value)| value.as_ref().map(Cell::to_field).unwrap_or_default()),
        )?;
    }
    csv.flush()?;
    tracing::debug!(rows = rows.len(), "Exported country table as CSV");
    Ok(())
}

/// The table as a pretty-printed JSON array of objects.
pub fn to_json(countries: &Countries) -> Result<String> {
    let rows = rows(countries)?;
    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_row_serializes_in_declaration_order() {
        let row = ExportRow {
            country: Country::new(1, 0),
            cells: vec![
                ("alpha2", Some(Cell::Text("FR".to_string()))),
                ("numeric", Some(Cell::Integer(250))),
                ("capital", None),
            ],
        };
        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(json, r#"{"alpha2":"FR","numeric":250,"capital":null}"#);
        assert_eq!(row.cell("numeric"), Some(&Cell::Integer(250)));
        assert_eq!(row.cell("capital"), None);
    }
}
