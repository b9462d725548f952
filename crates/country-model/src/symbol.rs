//! Interned tokens.
//!
//! A [`Symbol`] is a cheaply clonable, immutable token. Symbols created from
//! the same [`SymbolTable`] share one allocation per distinct string, so a
//! symbol-represented column with many repeated values (continents, currency
//! codes) stores each distinct value once.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Interned, reference-counted token.
///
/// Equality, ordering and hashing follow the underlying string, so a symbol
/// can be looked up in a `HashMap<Symbol, _>` with a plain `&str`.
#[derive(Clone)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Create a free-standing symbol (not shared with any table).
    pub fn new(value: &str) -> Self {
        Self(Arc::from(value))
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for Symbol {}

impl PartialOrd for Symbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Symbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Symbol {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}

/// Interning table handing out shared [`Symbol`]s.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashSet<Symbol>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning the shared symbol.
    ///
    /// If the string was interned before, the existing symbol is returned.
    pub fn intern(&mut self, value: &str) -> Symbol {
        if let Some(existing) = self.symbols.get(value) {
            return existing.clone();
        }
        let symbol = Symbol::new(value);
        self.symbols.insert(symbol.clone());
        symbol
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// True if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn interning_shares_allocation() {
        let mut table = SymbolTable::new();
        let a = table.intern("EUR");
        let b = table.intern("EUR");
        assert!(Arc::ptr_eq(&a.0, &b.0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn free_symbols_compare_by_text() {
        let mut table = SymbolTable::new();
        assert_eq!(table.intern("FR"), Symbol::new("FR"));
        assert_ne!(Symbol::new("FR"), Symbol::new("fr"));
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Symbol::new("GB"), 1usize);
        assert_eq!(map.get("GB"), Some(&1));
        assert_eq!(map.get("gb"), None);
    }

    #[test]
    fn debug_prefixes_a_colon() {
        let symbol = Symbol::new("Fr");
        assert_eq!(format!("{symbol:?}"), ":Fr");
    }
}
