//! The ordered collection of every valid entity.

use crate::entity::Country;

/// Every row whose primary code is present, in row order.
///
/// Built once when the catalog loads; immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Country>,
    /// Row index → position in `entries`, for membership tests.
    members: Vec<Option<usize>>,
}

impl Catalog {
    pub(crate) fn new(entries: Vec<Country>, rows: usize) -> Self {
        let mut members = vec![None; rows];
        for (position, country) in entries.iter().enumerate() {
            if let Some(slot) = members.get_mut(country.index() - 1) {
                *slot = Some(position);
            }
        }
        Self { entries, members }
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the catalog has no entity.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entities in row order.
    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.entries.iter()
    }

    /// Entities as a slice.
    pub fn as_slice(&self) -> &[Country] {
        &self.entries
    }

    /// True if `country` belongs to the catalog.
    pub fn contains(&self, country: &Country) -> bool {
        self.position(country).is_some()
    }

    /// Position of `country` in row order.
    pub fn position(&self, country: &Country) -> Option<usize> {
        country
            .index()
            .checked_sub(1)
            .and_then(|i| self.members.get(i).copied().flatten())
    }

    /// Entities in canonical order.
    pub fn sorted(&self) -> Vec<Country> {
        let mut sorted = self.entries.clone();
        sorted.sort();
        sorted
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
