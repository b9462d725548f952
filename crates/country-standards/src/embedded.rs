//! Embedded table data.
//!
//! The country table is embedded at compile time using `include_str!()`, so
//! the default catalog needs no runtime file I/O.

/// Source name reported in diagnostics for the embedded table.
pub const COUNTRIES_SOURCE: &str = "countries.csv";

/// ISO 3166-1 country table.
///
/// Columns: alpha-2, alpha-3 and numeric codes, Eurostat code, English and
/// French short names, UNTERM English formal name, UN M49 region and
/// sub-region, continent, capital, country-code TLD, ISO 4217 currency.
pub const COUNTRIES_CSV: &str = include_str!("../data/countries.csv");
