//! The country catalog: storage, lookup tables and resolution in one place.

use std::collections::BTreeMap;
use std::fmt;

use country_model::{PropertyDescriptor, Schema, SourceTable, Value};
use country_standards::COUNTRY_SCHEMA;

use crate::accessor::AccessorRegistry;
use crate::cache::CacheStats;
use crate::catalog::Catalog;
use crate::column_store::ColumnStore;
use crate::config::{CountriesConfig, MatchingMode};
use crate::entity::{Country, canonical_ranks};
use crate::error::{Candidate, CountryError, Result};
use crate::lookup::{
    Collision, LookupMapping, build_global_mapping, build_numeric_mapping, build_property_mapping,
    report_collisions,
};
use crate::resolver::{Failure, Resolver, Step, Token};

/// How a token was matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchKind {
    /// Numeric code.
    Numeric,
    /// Symbol cache hit.
    Symbol,
    /// Literal token found in the whitelist.
    Exact,
    /// Lowercased token found in the whitelist.
    CaseFolded,
    /// Single substring match accepted as a guess.
    Fuzzy(Advisory),
}

/// Notice that a fuzzy match was accepted on the caller's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    pub token: String,
    pub country: Country,
    pub code: String,
    pub name: String,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Assuming '{}' refers to {} ({}); use add_alias to map it elsewhere or add_to_blacklist to reject it",
            self.token, self.code, self.name
        )
    }
}

/// A resolved entity and how it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub country: Country,
    pub kind: MatchKind,
}

/// The country catalog.
///
/// # Example
///
/// ```rust,ignore
/// use country_core::Countries;
///
/// let countries = Countries::embedded()?;
/// let uk = countries.resolve("UK")?;
/// assert_eq!(countries.numeric_code(uk), Some(826));
/// ```
#[derive(Debug)]
pub struct Countries {
    schema: Schema,
    store: ColumnStore,
    accessors: AccessorRegistry,
    /// Per-property mappings of unique text properties.
    mappings: BTreeMap<&'static str, LookupMapping<String>>,
    ranks: Vec<u32>,
    catalog: Catalog,
    resolver: Resolver,
    collisions: Vec<Collision>,
    primary_slot: usize,
    order_slot: usize,
    name_slot: usize,
}

impl Countries {
    /// Load the catalog with the given configuration.
    pub fn load(config: &CountriesConfig) -> Result<Self> {
        let table = config.source.load(&COUNTRY_SCHEMA)?;
        tracing::info!(
            source = %config.source.label(),
            rows = table.row_count(),
            "Loading country catalog"
        );
        Self::from_table(&table, COUNTRY_SCHEMA, config.matching_mode)
    }

    /// Load the embedded catalog with default settings.
    pub fn embedded() -> Result<Self> {
        Self::load(&CountriesConfig::default())
    }

    /// Build a catalog from an already-parsed table.
    ///
    /// # Errors
    ///
    /// Fails if a declared column is missing, an integer cell does not parse,
    /// a role property is undeclared, or two global identifier properties
    /// disagree on a key. Per-property duplicates only produce warnings and
    /// are available from [`collisions`](Self::collisions).
    pub fn from_table(table: &SourceTable, schema: Schema, mode: MatchingMode) -> Result<Self> {
        let store = ColumnStore::build(table, &schema)?;
        let accessors = AccessorRegistry::build(&schema);
        let slot = |name: &str| {
            schema
                .position(name)
                .ok_or_else(|| CountryError::UnknownProperty {
                    name: name.to_string(),
                })
        };
        let primary_slot = slot(schema.primary)?;
        let order_slot = slot(schema.order_key)?;
        let name_slot = slot(schema.display_name)?;
        let numeric_slot = slot(schema.numeric)?;

        let mut mappings = BTreeMap::new();
        let mut collisions = Vec::new();
        for (position, property) in schema.properties.iter().enumerate() {
            if !property.unique || position == numeric_slot {
                continue;
            }
            let (mapping, found) = build_property_mapping(
                property.name,
                store.text_cells(position),
                property.fold_case,
            );
            collisions.extend(found);
            mappings.insert(property.name, mapping);
        }
        let (numeric, found) =
            build_numeric_mapping(schema.numeric, store.integer_cells(numeric_slot));
        collisions.extend(found);
        report_collisions("country table", &collisions);

        let global = build_global_mapping(
            schema
                .global_identifiers()
                .filter_map(|p| mappings.get(p.name).map(|m| (p.name, m))),
        )?;

        let rows = store.row_count();
        let ranks = canonical_ranks(store.text_cells(order_slot).into_iter().map(|(_, key)| key));
        let entries = (1..=rows)
            .filter(|&row| store.get(primary_slot, row).is_some())
            .map(|row| Country::new(row, ranks[row - 1]))
            .collect();
        let catalog = Catalog::new(entries, rows);

        tracing::info!(
            rows,
            entities = catalog.len(),
            global_keys = global.len(),
            collisions = collisions.len(),
            "Country catalog ready"
        );

        Ok(Self {
            schema,
            store,
            accessors,
            mappings,
            ranks,
            catalog,
            resolver: Resolver::new(global, numeric, mode),
            collisions,
            primary_slot,
            order_slot,
            name_slot,
        })
    }

    // ------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------

    /// Handle for a 1-based row index.
    ///
    /// # Errors
    ///
    /// [`CountryError::OutOfRange`] unless `1 <= index <= rows`.
    pub fn country(&self, index: usize) -> Result<Country> {
        let rows = self.store.row_count();
        if index == 0 || index > rows {
            return Err(CountryError::OutOfRange { index, rows });
        }
        Ok(Country::new(index, self.ranks[index - 1]))
    }

    /// Every valid entity.
    pub fn all(&self) -> &Catalog {
        &self.catalog
    }

    /// Number of rows in the source table.
    pub fn row_count(&self) -> usize {
        self.store.row_count()
    }

    /// Declared properties in column order.
    pub fn properties(&self) -> &'static [PropertyDescriptor] {
        self.schema.properties
    }

    /// The schema the catalog was built from.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Per-property duplicates found while building the lookup tables.
    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Value of `property` for `country`; `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// [`CountryError::UnknownProperty`] for an undeclared name.
    pub fn get(&self, country: Country, property: &str) -> Result<Option<Value<'_>>> {
        let accessor = self
            .accessors
            .get(property)
            .ok_or_else(|| CountryError::UnknownProperty {
                name: property.to_string(),
            })?;
        Ok(accessor(&self.store, country.index()))
    }

    /// Every declared property of `country`, in column order.
    pub fn values(&self, country: Country) -> Vec<(&'static PropertyDescriptor, Option<Value<'_>>)> {
        self.schema
            .properties
            .iter()
            .enumerate()
            .map(|(slot, property)| (property, self.store.get(slot, country.index())))
            .collect()
    }

    /// Primary short code (alpha-2).
    pub fn primary_code(&self, country: Country) -> Option<&str> {
        self.text_at(self.primary_slot, country)
    }

    /// Canonical code (alpha-3).
    pub fn canonical_code(&self, country: Country) -> Option<&str> {
        self.text_at(self.order_slot, country)
    }

    /// Display name.
    pub fn name(&self, country: Country) -> Option<&str> {
        self.text_at(self.name_slot, country)
    }

    /// Numeric code.
    pub fn numeric_code(&self, country: Country) -> Option<i64> {
        self.schema
            .position(self.schema.numeric)
            .and_then(|slot| self.store.get(slot, country.index()))
            .and_then(|value| value.as_integer())
    }

    fn text_at(&self, slot: usize, country: Country) -> Option<&str> {
        self.store
            .get(slot, country.index())
            .and_then(|value| value.as_str())
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Exact lookup in one unique property's mapping (e.g. `tld`, `.fr`).
    ///
    /// Integer properties parse `key`.
    pub fn lookup(&self, property: &str, key: &str) -> Result<Option<Country>> {
        let descriptor =
            self.schema
                .property(property)
                .ok_or_else(|| CountryError::UnknownProperty {
                    name: property.to_string(),
                })?;
        if descriptor.name == self.schema.numeric {
            return match key.trim().parse::<i64>() {
                Ok(value) => Ok(self.resolve(value).ok()),
                Err(_) => Ok(None),
            };
        }
        let row = self.mappings.get(descriptor.name).and_then(|m| m.get(key));
        row.map(|row| self.country(row)).transpose()
    }

    /// Catalog entities whose `property` equals `value`, ignoring case.
    pub fn filter(&self, property: &str, value: &str) -> Result<Vec<Country>> {
        let slot = self
            .schema
            .position(property)
            .ok_or_else(|| CountryError::UnknownProperty {
                name: property.to_string(),
            })?;
        Ok(self
            .catalog
            .iter()
            .copied()
            .filter(|country| {
                self.store
                    .get(slot, country.index())
                    .is_some_and(|cell| cell.matches(value))
            })
            .collect())
    }

    // ------------------------------------------------------------------
    // Resolution
    // ------------------------------------------------------------------

    /// Resolve a token to a single entity.
    ///
    /// Whitespace-only text counts as empty and never reaches the fuzzy scan.
    ///
    /// # Errors
    ///
    /// - [`CountryError::InvalidInput`] for an empty or whitespace-only token
    /// - [`CountryError::NotFound`] when nothing matches or the token is blacklisted
    /// - [`CountryError::Ambiguous`] with the sorted candidates otherwise
    pub fn resolve<'a>(&self, token: impl Into<Token<'a>>) -> Result<Country> {
        self.resolve_detailed(token).map(|resolution| resolution.country)
    }

    /// Resolve a token and report how it matched.
    ///
    /// A fuzzy accept logs an advisory at `warn` level and returns it in
    /// [`MatchKind::Fuzzy`]; the token is then whitelisted, so the next call
    /// reports [`MatchKind::Exact`].
    pub fn resolve_detailed<'a>(&self, token: impl Into<Token<'a>>) -> Result<Resolution> {
        let token = token.into();
        match self.resolver.resolve(token) {
            Ok((row, step)) => {
                let country = self.country(row)?;
                let kind = match step {
                    Step::Numeric => MatchKind::Numeric,
                    Step::Symbol => MatchKind::Symbol,
                    Step::Exact => MatchKind::Exact,
                    Step::CaseFolded => MatchKind::CaseFolded,
                    Step::Fuzzy => {
                        let advisory = Advisory {
                            token: token.display(),
                            country,
                            code: self.canonical_code(country).unwrap_or_default().to_string(),
                            name: self.name(country).unwrap_or_default().to_string(),
                        };
                        tracing::warn!(
                            token = %advisory.token,
                            code = %advisory.code,
                            name = %advisory.name,
                            "{advisory}"
                        );
                        MatchKind::Fuzzy(advisory)
                    }
                };
                Ok(Resolution { country, kind })
            }
            Err(Failure::InvalidInput) => Err(CountryError::InvalidInput),
            Err(Failure::NotFound) => Err(CountryError::NotFound {
                token: token.display(),
            }),
            Err(Failure::Ambiguous(rows)) => {
                let mut countries = rows
                    .into_iter()
                    .map(|row| self.country(row))
                    .collect::<Result<Vec<_>>>()?;
                countries.sort();
                Err(CountryError::Ambiguous {
                    token: token.display(),
                    candidates: countries.into_iter().map(|c| self.candidate(c)).collect(),
                })
            }
        }
    }

    fn candidate(&self, country: Country) -> Candidate {
        Candidate {
            country,
            code: self.canonical_code(country).unwrap_or_default().to_string(),
            name: self.name(country).unwrap_or_default().to_string(),
        }
    }

    /// Matching mode in effect.
    pub fn matching_mode(&self) -> MatchingMode {
        self.resolver.mode()
    }

    // ------------------------------------------------------------------
    // Cache overrides
    // ------------------------------------------------------------------

    /// Make `token` (all case variants, text and symbol form) resolve to
    /// `country`, overriding any earlier rejection or guess.
    pub fn add_alias(&self, token: &str, country: Country) {
        tracing::debug!(token, country = ?country, "Adding alias");
        self.resolver.cache().add_alias(token, country.index());
    }

    /// Make `token` (all case variants, text and symbol form) fail with
    /// `NotFound`, even where it would otherwise match.
    pub fn add_to_blacklist(&self, token: &str) {
        tracing::debug!(token, "Blacklisting token");
        self.resolver.cache().add_to_blacklist(token);
    }

    /// Forget every learned alias and rejection.
    pub fn reset_cache(&self) {
        self.resolver.reset();
    }

    /// True if `token` currently resolves from the whitelist without a scan.
    pub fn is_whitelisted(&self, token: &str) -> bool {
        self.resolver.cache().whitelisted(token).is_some()
    }

    /// True if `token` is blacklisted.
    pub fn is_blacklisted(&self, token: &str) -> bool {
        self.resolver.cache().blacklisted(token)
    }

    /// Sizes of the cache structures.
    pub fn cache_stats(&self) -> CacheStats {
        self.resolver.cache().stats()
    }

    /// Number of keys in the immutable global identifier mapping.
    pub fn global_key_count(&self) -> usize {
        self.resolver.global().len()
    }
}
