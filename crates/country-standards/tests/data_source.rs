//! Tests for loading the country table from the embedded data and from files.

use std::fs;
use std::path::PathBuf;

use country_standards::embedded::COUNTRIES_CSV;
use country_standards::{COUNTRY_SCHEMA, DataSource, StandardsError};
use tempfile::TempDir;

/// Write `content` into a fresh directory; the directory lives as long as the guard.
fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write file");
    (dir, path)
}

#[test]
fn embedded_source_is_the_default() {
    assert_eq!(DataSource::default(), DataSource::Embedded);
    let table = DataSource::Embedded.load(&COUNTRY_SCHEMA).expect("embedded");
    assert_eq!(table.row_count(), 249);
    for property in COUNTRY_SCHEMA.properties {
        assert!(table.column(property.column).is_some(), "{}", property.column);
    }
}

#[test]
fn file_source_reads_a_subset() {
    let mut lines = COUNTRIES_CSV.lines();
    let header = lines.next().expect("header");
    let subset: Vec<&str> = lines
        .filter(|line| line.starts_with("FR,") || line.starts_with("GB,"))
        .collect();
    let (_dir, path) = temp_file("subset.csv", &format!("{header}\n{}\n", subset.join("\n")));

    let source = DataSource::File(path.clone());
    assert_eq!(source.label(), path.display().to_string());
    let table = source.load(&COUNTRY_SCHEMA).expect("file source");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell("Eurostat", 0), Some("FR"));
    assert_eq!(table.cell("Eurostat", 1), Some("UK"));
}

#[test]
fn extra_columns_are_ignored() {
    let mut content = String::new();
    for (i, line) in COUNTRIES_CSV.lines().take(3).enumerate() {
        let extra = if i == 0 { "Population" } else { "1" };
        content.push_str(&format!("{line},{extra}\n"));
    }
    let (_dir, path) = temp_file("extra.csv", &content);
    let table = DataSource::File(path)
        .load(&COUNTRY_SCHEMA)
        .expect("extra column");
    assert_eq!(table.row_count(), 2);
    assert!(table.column("Population").is_none());
}

#[test]
fn missing_file_is_reported() {
    let source = DataSource::File(PathBuf::from("/nonexistent/countries.csv"));
    assert!(matches!(
        source.load(&COUNTRY_SCHEMA),
        Err(StandardsError::FileNotFound { .. })
    ));
}
