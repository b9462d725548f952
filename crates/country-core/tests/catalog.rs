use country_core::{Countries, CountryError, MatchingMode, Value, export, to_dataframe};
use country_model::SourceTable;
use country_standards::COUNTRY_SCHEMA;

fn countries() -> Countries {
    Countries::embedded().expect("embedded catalog")
}

/// The embedded header with `rows` substituted, as a minimal custom table.
fn table(rows: &[[&str; 13]]) -> SourceTable {
    let labels = COUNTRY_SCHEMA.properties.iter().map(|p| p.column);
    SourceTable::from_columns(labels.enumerate().map(|(i, label)| {
        (
            label,
            rows.iter().map(|row| row[i].to_string()).collect::<Vec<_>>(),
        )
    }))
    .expect("rectangular table")
}

const FRANCE: [&str; 13] = [
    "FR", "FRA", "250", "FR", "France", "France (la)", "the French Republic", "Europe",
    "Western Europe", "EU", "Paris", ".fr", "EUR",
];
const GERMANY: [&str; 13] = [
    "DE", "DEU", "276", "DE", "Germany", "Allemagne (l')", "the Federal Republic of Germany",
    "Europe", "Western Europe", "EU", "Berlin", ".de", "EUR",
];

#[test]
fn catalog_covers_every_row() {
    let countries = countries();
    assert_eq!(countries.row_count(), 249);
    assert_eq!(countries.all().len(), 249);
    assert_eq!(countries.global_key_count(), 2932);
    assert!(countries.collisions().is_empty());

    let codes: Vec<&str> = countries
        .all()
        .sorted()
        .into_iter()
        .filter_map(|country| countries.canonical_code(country))
        .collect();
    assert_eq!(codes.len(), 249);
    assert_eq!(codes.first().copied(), Some("ABW"));
    assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn handles_are_bounds_checked() {
    let countries = countries();
    assert!(countries.country(1).is_ok());
    assert!(countries.country(249).is_ok());
    assert!(matches!(
        countries.country(0),
        Err(CountryError::OutOfRange { index: 0, rows: 249 })
    ));
    assert!(matches!(
        countries.country(250),
        Err(CountryError::OutOfRange { index: 250, .. })
    ));
}

#[test]
fn handle_equality_and_order() {
    let countries = countries();
    let by_code = countries.resolve("GB").unwrap();
    let by_name = countries.resolve("United Kingdom of Great Britain and Northern Ireland").unwrap();
    assert_eq!(by_code, by_name);
    assert_eq!(countries.country(by_code.index()).unwrap(), by_code);

    let fra = countries.resolve("FRA").unwrap();
    let deu = countries.resolve("DEU").unwrap();
    assert!(deu < fra);
    assert!(fra < by_code);
}

#[test]
fn accessors_by_property_name() {
    let countries = countries();
    let fr = countries.resolve("FR").unwrap();
    assert_eq!(countries.get(fr, "numeric").unwrap(), Some(Value::Integer(250)));
    assert_eq!(
        countries.get(fr, "capital").unwrap().and_then(|v| v.as_str()),
        Some("Paris")
    );
    let continent = countries.get(fr, "continent").unwrap().unwrap();
    assert!(continent.as_symbol().is_some());
    assert_eq!(continent.to_string(), "EU");

    let aq = countries.resolve("AQ").unwrap();
    assert_eq!(countries.get(aq, "capital").unwrap(), None);
    assert_eq!(countries.get(aq, "currency").unwrap(), None);

    assert!(matches!(
        countries.get(fr, "population"),
        Err(CountryError::UnknownProperty { .. })
    ));
    assert_eq!(countries.values(fr).len(), countries.properties().len());
}

#[test]
fn symbol_values_are_interned() {
    let countries = countries();
    let fr = countries.resolve("FR").unwrap();
    let de = countries.resolve("DE").unwrap();
    let a = countries.get(fr, "currency").unwrap().and_then(|v| v.as_symbol()).unwrap();
    let b = countries.get(de, "currency").unwrap().and_then(|v| v.as_symbol()).unwrap();
    assert_eq!(a, b);
    assert!(std::ptr::eq(a.as_str(), b.as_str()));
}

#[test]
fn filter_and_lookup() {
    let countries = countries();
    let eurozone = countries.filter("currency", "eur").unwrap();
    assert!(eurozone.contains(&countries.resolve("FR").unwrap()));
    assert!(!eurozone.contains(&countries.resolve("GB").unwrap()));

    let by_tld = countries.lookup("tld", ".FR").unwrap();
    assert_eq!(by_tld, Some(countries.resolve("FR").unwrap()));
    assert_eq!(
        countries.lookup("numeric", "826").unwrap(),
        Some(countries.resolve("GB").unwrap())
    );
    assert_eq!(countries.lookup("alpha3", "XXX").unwrap(), None);
    assert!(countries.lookup("nope", "x").is_err());
}

#[test]
fn per_property_duplicates_keep_the_first_row() {
    let mut second = GERMANY;
    second[10] = "Paris";
    second[11] = ".fr";
    let countries =
        Countries::from_table(&table(&[FRANCE, second]), COUNTRY_SCHEMA, MatchingMode::Lenient)
            .unwrap();

    let collisions = countries.collisions();
    assert!(collisions.iter().all(|c| c.property == "tld"));
    assert!(collisions.iter().any(|c| c.key == ".fr" && c.kept_row == 1 && c.rejected_row == 2));
    assert_eq!(
        countries.lookup("tld", ".fr").unwrap(),
        Some(countries.country(1).unwrap())
    );
}

#[test]
fn conflicting_global_identifiers_abort_the_build() {
    let mut second = GERMANY;
    second[3] = "FRA";
    let error =
        Countries::from_table(&table(&[FRANCE, second]), COUNTRY_SCHEMA, MatchingMode::Lenient)
            .unwrap_err();
    let CountryError::Configuration {
        key,
        first_row,
        second_row,
        ..
    } = &error
    else {
        panic!("expected a configuration error, got {error:?}");
    };
    assert_eq!(key, "FRA");
    assert_eq!((*first_row, *second_row), (1, 2));
    assert!(!error.is_recoverable());
}

#[test]
fn rows_without_primary_code_are_not_entities() {
    let mut orphan = GERMANY;
    orphan[0] = "";
    let countries =
        Countries::from_table(&table(&[FRANCE, orphan]), COUNTRY_SCHEMA, MatchingMode::Lenient)
            .unwrap();
    assert_eq!(countries.row_count(), 2);
    assert_eq!(countries.all().len(), 1);
    assert!(!countries.all().contains(&countries.country(2).unwrap()));
}

#[test]
fn invalid_numeric_cell_is_rejected() {
    let mut broken = GERMANY;
    broken[2] = "two-seven-six";
    let error =
        Countries::from_table(&table(&[FRANCE, broken]), COUNTRY_SCHEMA, MatchingMode::Lenient)
            .unwrap_err();
    assert!(matches!(error, CountryError::InvalidValue { row: 2, .. }));
}

#[test]
fn csv_and_json_export() {
    let countries = countries();
    let rows = export::rows(&countries).unwrap();
    assert_eq!(rows.len(), 249);
    assert_eq!(rows[0].cells.len(), countries.properties().len());

    let mut buffer = Vec::new();
    export::write_csv(&countries, &mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("alpha2,alpha3,numeric,eurostat,name_en,name_fr,formal_en,region,sub_region,continent,capital,tld,currency")
    );
    assert_eq!(lines.count(), 249);
    assert!(text.contains("FR,FRA,250,FR,France,France (la),the French Republic"));

    let json: serde_json::Value = serde_json::from_str(&export::to_json(&countries).unwrap()).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 249);
    let gbr = entries.iter().find(|row| row["alpha3"] == "GBR").unwrap();
    assert_eq!(gbr["numeric"], 826);
    assert_eq!(gbr["eurostat"], "UK");
}

#[test]
fn dataframe_has_one_column_per_property() {
    let countries = countries();
    let frame = to_dataframe(&countries).unwrap();
    assert_eq!(frame.height(), 249);
    assert_eq!(frame.width(), countries.properties().len());
    let numeric = frame.column("numeric").unwrap().i64().unwrap();
    assert_eq!(numeric.null_count(), 0);
    let alpha3 = frame.column("alpha3").unwrap().str().unwrap();
    assert_eq!(alpha3.get(0), Some("ABW"));
}
