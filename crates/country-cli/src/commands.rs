use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use country_cli::report::{
    Outcome, candidate_table, country_table, detail_table, outcome_table, properties_table,
    resolve_token,
};
use country_core::{Countries, export};

use crate::cli::{ExportArgs, ExportFormatArg, ListArgs, ResolveArgs, ShowArgs};

/// Resolve every token; returns true when all of them resolved.
pub fn run_resolve(countries: &Countries, args: &ResolveArgs) -> Result<bool> {
    for alias in &args.aliases {
        let target = countries
            .resolve(alias.value.as_str())
            .with_context(|| format!("resolve alias target '{}'", alias.value))?;
        countries.add_alias(&alias.key, target);
    }
    for token in &args.blacklist {
        countries.add_to_blacklist(token);
    }

    let outcomes: Vec<Outcome> = args
        .tokens
        .iter()
        .map(|token| Outcome {
            token: token.clone(),
            result: resolve_token(countries, token),
        })
        .collect();
    let resolved = outcomes.iter().filter(|o| o.is_success()).count();
    info!(tokens = outcomes.len(), resolved, "Resolved tokens");

    println!("{}", outcome_table(countries, &outcomes));
    for outcome in &outcomes {
        let Err(error) = &outcome.result else {
            continue;
        };
        eprintln!("error: {error}");
        if let Some(table) = candidate_table(error) {
            eprintln!("{table}");
        }
    }
    Ok(resolved == outcomes.len())
}

pub fn run_show(countries: &Countries, args: &ShowArgs) -> Result<()> {
    let resolution = resolve_token(countries, &args.token)
        .with_context(|| format!("resolve '{}'", args.token))?;
    println!("{}", detail_table(countries, resolution.country));
    Ok(())
}

pub fn run_list(countries: &Countries, args: &ListArgs) -> Result<()> {
    let entities = match &args.filter {
        Some(filter) => {
            let mut matches = countries
                .filter(&filter.key, &filter.value)
                .with_context(|| format!("filter {filter}"))?;
            matches.sort();
            matches
        }
        None => countries.all().sorted(),
    };
    debug!(count = entities.len(), "Listing countries");
    println!("{}", country_table(countries, &entities));
    println!("{} countries", entities.len());
    Ok(())
}

pub fn run_export(countries: &Countries, args: &ExportArgs) -> Result<()> {
    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("create {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    match args.format {
        ExportFormatArg::Csv => export::write_csv(countries, &mut writer).context("export csv")?,
        ExportFormatArg::Json => {
            let json = export::to_json(countries).context("export json")?;
            writeln!(writer, "{json}").context("write json")?;
        }
    }
    writer.flush().context("flush export")?;
    if let Some(path) = &args.output {
        info!(path = %path.display(), "Exported country table");
    }
    Ok(())
}

pub fn run_properties(countries: &Countries) -> Result<()> {
    let properties = countries.properties();
    if properties.is_empty() {
        bail!("no properties declared");
    }
    println!("{}", properties_table(properties));
    Ok(())
}
