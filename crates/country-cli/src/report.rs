//! Table rendering for command output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use country_core::{Countries, Country, CountryError, MatchKind, PropertyDescriptor, Resolution};

/// One resolved (or failed) command-line token.
#[derive(Debug)]
pub struct Outcome {
    pub token: String,
    pub result: country_core::Result<Resolution>,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Resolve a command-line token; integer-looking tokens take the numeric path.
pub fn resolve_token(countries: &Countries, token: &str) -> country_core::Result<Resolution> {
    match token.trim().parse::<i64>() {
        Ok(number) => countries.resolve_detailed(number),
        Err(_) => countries.resolve_detailed(token),
    }
}

/// Short label for how a token matched.
pub fn match_label(kind: &MatchKind) -> &'static str {
    match kind {
        MatchKind::Numeric => "numeric",
        MatchKind::Symbol => "symbol",
        MatchKind::Exact => "exact",
        MatchKind::CaseFolded => "case-folded",
        MatchKind::Fuzzy(_) => "fuzzy",
    }
}

/// Token | Alpha-3 | Name | Match, failures in the last column.
pub fn outcome_table(countries: &Countries, outcomes: &[Outcome]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Token"),
        header_cell("Alpha-3"),
        header_cell("Name"),
        header_cell("Match"),
    ]);
    apply_table_style(&mut table);
    for outcome in outcomes {
        match &outcome.result {
            Ok(resolution) => {
                let label = match_label(&resolution.kind);
                let kind = match resolution.kind {
                    MatchKind::Fuzzy(_) => Cell::new(label).fg(Color::Yellow),
                    _ => Cell::new(label).fg(Color::Green),
                };
                table.add_row(vec![
                    Cell::new(&outcome.token),
                    code_cell(countries.canonical_code(resolution.country)),
                    Cell::new(countries.name(resolution.country).unwrap_or("-")),
                    kind,
                ]);
            }
            Err(error) => {
                table.add_row(vec![
                    Cell::new(&outcome.token),
                    dim_cell("-"),
                    dim_cell("-"),
                    failure_cell(error),
                ]);
            }
        }
    }
    table
}

/// Candidates of an ambiguous failure, in canonical order.
pub fn candidate_table(error: &CountryError) -> Option<Table> {
    let candidates = error.candidates();
    if candidates.is_empty() {
        return None;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Alpha-3"), header_cell("Name")]);
    apply_table_style(&mut table);
    for candidate in candidates {
        table.add_row(vec![
            code_cell(Some(candidate.code.as_str())),
            Cell::new(&candidate.name),
        ]);
    }
    Some(table)
}

/// Alpha-2 | Alpha-3 | Numeric | Name for each entity.
pub fn country_table(countries: &Countries, entities: &[Country]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Alpha-2"),
        header_cell("Alpha-3"),
        header_cell("Numeric"),
        header_cell("Name"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for &country in entities {
        table.add_row(vec![
            code_cell(countries.primary_code(country)),
            code_cell(countries.canonical_code(country)),
            match countries.numeric_code(country) {
                Some(number) => Cell::new(format!("{number:03}")),
                None => dim_cell("-"),
            },
            Cell::new(countries.name(country).unwrap_or("-")),
        ]);
    }
    table
}

/// Property | Value for one entity, absent values dimmed.
pub fn detail_table(countries: &Countries, country: Country) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Property"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (property, value) in countries.values(country) {
        let value = match value {
            Some(value) => Cell::new(value),
            None => dim_cell("-"),
        };
        table.add_row(vec![Cell::new(property.name), value]);
    }
    table
}

/// The declared property list.
pub fn properties_table(properties: &[PropertyDescriptor]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Property"),
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Unique"),
        header_cell("Global"),
        header_cell("Fold case"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for column in 3..=5 {
        align_column(&mut table, column, CellAlignment::Center);
    }
    for property in properties {
        table.add_row(vec![
            Cell::new(property.name).add_attribute(Attribute::Bold),
            Cell::new(property.column),
            Cell::new(property.output_type()),
            flag_cell(property.unique),
            flag_cell(property.global),
            flag_cell(property.fold_case),
            Cell::new(property.description),
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn code_cell(code: Option<&str>) -> Cell {
    match code {
        Some(code) => Cell::new(code).add_attribute(Attribute::Bold),
        None => dim_cell("-"),
    }
}

fn flag_cell(set: bool) -> Cell {
    if set {
        Cell::new("✓").fg(Color::Green)
    } else {
        dim_cell("-")
    }
}

fn failure_cell(error: &CountryError) -> Cell {
    let label = match error {
        CountryError::InvalidInput => "empty".to_string(),
        CountryError::NotFound { .. } => "not found".to_string(),
        CountryError::Ambiguous { candidates, .. } => {
            format!("ambiguous ({})", candidates.len())
        }
        other => other.to_string(),
    };
    Cell::new(label)
        .fg(Color::Red)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
