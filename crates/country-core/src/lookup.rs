//! Lookup table construction.
//!
//! Two collision policies apply:
//!
//! - **Per-property**: a key already mapped to a different row is a
//!   [`Collision`]. The first mapping is kept and the collision is reported;
//!   the build continues.
//! - **Global merge**: a key mapped to different rows by two global identifier
//!   properties aborts construction with [`CountryError::Configuration`].

use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use serde::Serialize;

use crate::error::{CountryError, Result};

/// Number of collisions logged individually before only the total is logged.
const COLLISION_LOG_LIMIT: usize = 5;

/// Mapping from a normalized key to a 1-based row index.
#[derive(Debug, Clone)]
pub struct LookupMapping<K> {
    entries: HashMap<K, usize>,
}

impl<K> Default for LookupMapping<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

/// A key that two rows of the same property both claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collision {
    pub property: &'static str,
    pub key: String,
    /// Row that keeps the key.
    pub kept_row: usize,
    /// Row whose claim was dropped.
    pub rejected_row: usize,
}

impl<K: Eq + Hash> LookupMapping<K> {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Row mapped to `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.get(key).copied()
    }

    /// True if `key` is mapped.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(key)
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no key is mapped.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All `(key, row)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.entries.iter().map(|(k, &row)| (k, row))
    }

    /// Insert `key → row` unless the key is taken.
    ///
    /// Returns the row already holding the key when it differs from `row`.
    fn insert(&mut self, key: K, row: usize) -> Option<usize> {
        match self.entries.entry(key) {
            Entry::Occupied(existing) if *existing.get() != row => Some(*existing.get()),
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                slot.insert(row);
                None
            }
        }
    }
}

impl<K: Eq + Hash + Ord + Clone> LookupMapping<K> {
    /// `(key, row)` pairs sorted by key.
    pub fn sorted_entries(&self) -> Vec<(K, usize)> {
        let mut entries: Vec<(K, usize)> = self
            .entries
            .iter()
            .map(|(k, &row)| (k.clone(), row))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

/// Build the mapping of one text property.
///
/// Rows with absent values are skipped. With `fold_case`, the lowercase and
/// uppercase forms of each value are registered alongside the original.
pub fn build_property_mapping<'a, I>(
    property: &'static str,
    cells: I,
    fold_case: bool,
) -> (LookupMapping<String>, Vec<Collision>)
where
    I: IntoIterator<Item = (usize, Option<&'a str>)>,
{
    let mut mapping = LookupMapping::new();
    let mut collisions = Vec::new();
    for (row, value) in cells {
        let Some(value) = value else {
            continue;
        };
        let keys = if fold_case {
            case_variants(value)
        } else {
            vec![value.to_string()]
        };
        for key in keys {
            if let Some(kept_row) = mapping.insert(key.clone(), row) {
                collisions.push(Collision {
                    property,
                    key,
                    kept_row,
                    rejected_row: row,
                });
            }
        }
    }
    (mapping, collisions)
}

/// Build the mapping of one integer property. Absent values are skipped.
pub fn build_numeric_mapping<I>(
    property: &'static str,
    cells: I,
) -> (LookupMapping<i64>, Vec<Collision>)
where
    I: IntoIterator<Item = (usize, Option<i64>)>,
{
    let mut mapping = LookupMapping::new();
    let mut collisions = Vec::new();
    for (row, value) in cells {
        let Some(value) = value else {
            continue;
        };
        if let Some(kept_row) = mapping.insert(value, row) {
            collisions.push(Collision {
                property,
                key: value.to_string(),
                kept_row,
                rejected_row: row,
            });
        }
    }
    (mapping, collisions)
}

/// Merge the global identifier mappings into one.
///
/// # Errors
///
/// Returns [`CountryError::Configuration`] when two inputs map the same key to
/// different rows.
pub fn build_global_mapping<'a, I>(mappings: I) -> Result<LookupMapping<String>>
where
    I: IntoIterator<Item = (&'static str, &'a LookupMapping<String>)>,
{
    let mut merged: LookupMapping<String> = LookupMapping::new();
    let mut origin: HashMap<String, &'static str> = HashMap::new();
    for (property, mapping) in mappings {
        for (key, row) in mapping.sorted_entries() {
            if let Some(first_row) = merged.insert(key.clone(), row) {
                let first_property = origin.get(&key).copied().unwrap_or(property);
                tracing::error!(
                    key = %key,
                    first_property,
                    first_row,
                    second_property = property,
                    second_row = row,
                    "Global identifier collision"
                );
                return Err(CountryError::Configuration {
                    key,
                    first_property,
                    first_row,
                    second_property: property,
                    second_row: row,
                });
            }
            origin.entry(key).or_insert(property);
        }
    }
    Ok(merged)
}

/// Log per-property collisions: the first few individually, then a summary.
pub fn report_collisions(source: &str, collisions: &[Collision]) {
    for collision in collisions.iter().take(COLLISION_LOG_LIMIT) {
        tracing::warn!(
            source = %source,
            property = collision.property,
            key = %collision.key,
            kept_row = collision.kept_row,
            rejected_row = collision.rejected_row,
            "Duplicate identifier; keeping the first row"
        );
    }
    if collisions.len() > COLLISION_LOG_LIMIT {
        tracing::warn!(
            source = %source,
            collision_count = collisions.len(),
            "Source table contains duplicate identifiers"
        );
    }
}

/// The original, lowercase and uppercase forms of `value`, without repeats.
pub(crate) fn case_variants(value: &str) -> Vec<String> {
    let mut variants = vec![value.to_string()];
    for variant in [value.to_lowercase(), value.to_uppercase()] {
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }
    variants
}
