//! Polars view of the catalog.

use country_model::ScalarKind;
use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use crate::countries::Countries;
use crate::error::Result;

/// One column per declared property, one row per Catalog entity in canonical
/// order. Integer properties become `Int64` columns, the rest `String`.
pub fn to_dataframe(countries: &Countries) -> Result<DataFrame> {
    let entities = countries.all().sorted();
    let mut columns = Vec::with_capacity(countries.properties().len());
    for property in countries.properties() {
        let column: Column = match property.kind {
            ScalarKind::Integer => {
                let values = entities
                    .iter()
                    .map(|&country| {
                        Ok(countries
                            .get(country, property.name)?
                            .and_then(|value| value.as_integer()))
                    })
                    .collect::<Result<Vec<Option<i64>>>>()?;
                Series::new(property.name.into(), values).into()
            }
            ScalarKind::Text => {
                let values = entities
                    .iter()
                    .map(|&country| {
                        Ok(countries
                            .get(country, property.name)?
                            .and_then(|value| value.as_str()))
                    })
                    .collect::<Result<Vec<Option<&str>>>>()?;
                Series::new(property.name.into(), values).into()
            }
        };
        columns.push(column);
    }
    Ok(DataFrame::new(columns)?)
}
