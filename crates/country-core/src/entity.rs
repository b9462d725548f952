//! Entity handles.

use std::cmp::Ordering;
use std::fmt;

/// Handle to one row of the catalog.
///
/// Handles are only produced by [`Countries`](crate::Countries) through
/// bounds-checked construction or successful resolution. Two handles are equal
/// iff they point at the same row. Ordering follows the canonical code
/// (alpha-3), independent of row position.
#[derive(Clone, Copy)]
pub struct Country {
    index: u32,
    rank: u32,
}

impl Country {
    pub(crate) fn new(index: usize, rank: u32) -> Self {
        Self {
            index: u32::try_from(index).unwrap_or(u32::MAX),
            rank,
        }
    }

    /// 1-based row index.
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// Position of this entity in canonical order.
    pub fn rank(&self) -> usize {
        self.rank as usize
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for Country {}

impl std::hash::Hash for Country {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.index.hash(state);
    }
}

impl PartialOrd for Country {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Country {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.index.cmp(&other.index))
    }
}

impl fmt::Debug for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Country(#{})", self.index)
    }
}

/// Canonical rank of every row, indexed by `row - 1`.
///
/// Rows are ranked by their order key; rows without one sort after all keyed
/// rows, by row index.
pub(crate) fn canonical_ranks<'a>(keys: impl ExactSizeIterator<Item = Option<&'a str>>) -> Vec<u32> {
    let mut order: Vec<(usize, Option<&str>)> = keys.enumerate().collect();
    order.sort_by(|(ia, a), (ib, b)| match (a, b) {
        (Some(a), Some(b)) => a.cmp(b).then(ia.cmp(ib)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => ia.cmp(ib),
    });
    let mut ranks = vec![0u32; order.len()];
    for (rank, (position, _)) in order.into_iter().enumerate() {
        ranks[position] = u32::try_from(rank).unwrap_or(u32::MAX);
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_rank() {
        assert_eq!(Country::new(3, 0), Country::new(3, 7));
        assert_ne!(Country::new(3, 0), Country::new(4, 0));
    }

    #[test]
    fn ordering_follows_rank() {
        let mut countries = vec![Country::new(1, 2), Country::new(2, 0), Country::new(3, 1)];
        countries.sort();
        let indices: Vec<usize> = countries.iter().map(Country::index).collect();
        assert_eq!(indices, vec![2, 3, 1]);
    }

    #[test]
    fn ranks_sort_missing_keys_last() {
        let keys = vec![Some("FRA"), None, Some("DEU"), Some("AFG")];
        let ranks = canonical_ranks(keys.into_iter());
        assert_eq!(ranks, vec![2, 3, 1, 0]);
    }
}
