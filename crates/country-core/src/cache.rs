//! Mutable resolution cache.
//!
//! Four structures guarded by one lock:
//!
//! - text whitelist: token → row, seeded from the global identifier mapping
//! - text blacklist: tokens known not to resolve
//! - symbol whitelist / blacklist: the same content keyed by [`Symbol`]
//!
//! The whitelist grows when a case-folded or fuzzy match is kept and when an
//! alias is added. The blacklist grows only through explicit rejection.
//! Nothing is persisted; [`ResolutionCache::reset`] restores the seed.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use country_model::Symbol;
use serde::Serialize;

use crate::lookup::{LookupMapping, case_variants};

/// Sizes of the four cache structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CacheStats {
    pub whitelist: usize,
    pub blacklist: usize,
    pub symbol_whitelist: usize,
    pub symbol_blacklist: usize,
}

#[derive(Debug, Default)]
pub(crate) struct CacheState {
    whitelist: HashMap<String, usize>,
    blacklist: HashSet<String>,
    symbol_whitelist: HashMap<Symbol, usize>,
    symbol_blacklist: HashSet<Symbol>,
}

impl CacheState {
    fn seeded(seed: &LookupMapping<String>) -> Self {
        let mut state = Self::default();
        for (key, row) in seed.iter() {
            state.whitelist.insert(key.clone(), row);
            state.symbol_whitelist.insert(Symbol::new(key), row);
        }
        state
    }

    pub(crate) fn whitelisted(&self, token: &str) -> Option<usize> {
        self.whitelist.get(token).copied()
    }

    pub(crate) fn blacklisted(&self, token: &str) -> bool {
        self.blacklist.contains(token)
    }

    pub(crate) fn symbol_whitelisted(&self, symbol: &Symbol) -> Option<usize> {
        self.symbol_whitelist.get(symbol).copied()
    }

    pub(crate) fn symbol_blacklisted(&self, symbol: &Symbol) -> bool {
        self.symbol_blacklist.contains(symbol)
    }

    /// Register `token` and its case variants as pointing at `row`, in both
    /// the text and symbol whitelists.
    pub(crate) fn keep(&mut self, token: &str, row: usize) {
        for variant in case_variants(token) {
            self.symbol_whitelist.insert(Symbol::new(&variant), row);
            self.whitelist.insert(variant, row);
        }
    }

    /// Like [`keep`](Self::keep), also lifting any blacklist entry.
    fn alias(&mut self, token: &str, row: usize) {
        for variant in case_variants(token) {
            self.blacklist.remove(&variant);
            self.symbol_blacklist.remove(variant.as_str());
        }
        self.keep(token, row);
    }

    /// Blacklist `token` and its case variants, dropping any whitelist entry.
    fn reject(&mut self, token: &str) {
        for variant in case_variants(token) {
            self.whitelist.remove(&variant);
            self.symbol_whitelist.remove(variant.as_str());
            self.symbol_blacklist.insert(Symbol::new(&variant));
            self.blacklist.insert(variant);
        }
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            whitelist: self.whitelist.len(),
            blacklist: self.blacklist.len(),
            symbol_whitelist: self.symbol_whitelist.len(),
            symbol_blacklist: self.symbol_blacklist.len(),
        }
    }
}

/// Whitelist/blacklist cache owned by one resolver instance.
#[derive(Debug)]
pub struct ResolutionCache {
    state: Mutex<CacheState>,
}

impl ResolutionCache {
    /// Create a cache whose whitelist is seeded from `seed`.
    pub fn seeded(seed: &LookupMapping<String>) -> Self {
        Self {
            state: Mutex::new(CacheState::seeded(seed)),
        }
    }

    /// Discard everything learned and reseed from `seed`.
    pub fn reset(&self, seed: &LookupMapping<String>) {
        *self.lock() = CacheState::seeded(seed);
    }

    /// Force `token` (all case variants, text and symbol) to resolve to `row`.
    pub fn add_alias(&self, token: &str, row: usize) {
        self.lock().alias(token, row);
    }

    /// Force `token` (all case variants, text and symbol) to fail.
    pub fn add_to_blacklist(&self, token: &str) {
        self.lock().reject(token);
    }

    /// Row the whitelist maps `token` to.
    pub fn whitelisted(&self, token: &str) -> Option<usize> {
        self.lock().whitelisted(token)
    }

    /// True if `token` is blacklisted.
    pub fn blacklisted(&self, token: &str) -> bool {
        self.lock().blacklisted(token)
    }

    /// Current sizes.
    pub fn stats(&self) -> CacheStats {
        self.lock().stats()
    }

    /// Lock the cache for one read-check-write sequence.
    ///
    /// A poisoned lock is recovered: every mutation is a whole-entry insert or
    /// remove, so the maps are consistent even after a panic elsewhere.
    pub(crate) fn lock(&self) -> MutexGuard<'_, CacheState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
