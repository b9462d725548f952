//! Token resolution pipeline.
//!
//! # Pipeline
//!
//! Integer tokens go straight to the numeric-code mapping. Symbol tokens check
//! the symbol whitelist and blacklist, then fall through to the text pipeline:
//!
//! 1. empty token: `InvalidInput`
//! 2. whitelist hit on the literal token
//! 3. blacklist hit on the literal token: `NotFound`
//! 4. whitelist hit on the lowercased token (the literal token is kept)
//! 5. blacklist hit on the lowercased token: `NotFound`
//! 6. substring scan of the lowercased token over the lowercased keys of the
//!    original global identifier mapping, counting distinct rows:
//!    - one row and more than 3 characters: accepted and kept
//!    - no row: `NotFound`
//!    - otherwise: `Ambiguous`
//!
//! Steps 2 to 6 run under the cache lock, so the scan-then-keep sequence is
//! atomic per call.

use std::collections::BTreeSet;

use country_model::Symbol;

use crate::cache::{CacheState, ResolutionCache};
use crate::config::MatchingMode;
use crate::lookup::LookupMapping;

/// Tokens shorter than this many characters never auto-accept a fuzzy match.
const MIN_FUZZY_ACCEPT_LEN: usize = 4;

/// Raw input to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Free text: a code, a name or part of one.
    Text(&'a str),
    /// Interned token; served from the symbol caches when possible.
    Symbol(&'a Symbol),
    /// Numeric code.
    Integer(i64),
}

impl<'a> Token<'a> {
    /// Text form used in diagnostics.
    pub fn display(&self) -> String {
        match self {
            Token::Text(text) => (*text).to_string(),
            Token::Symbol(symbol) => symbol.as_str().to_string(),
            Token::Integer(value) => value.to_string(),
        }
    }
}

impl<'a> From<&'a str> for Token<'a> {
    fn from(value: &'a str) -> Self {
        Token::Text(value)
    }
}

impl<'a> From<&'a String> for Token<'a> {
    fn from(value: &'a String) -> Self {
        Token::Text(value.as_str())
    }
}

impl<'a> From<&'a Symbol> for Token<'a> {
    fn from(value: &'a Symbol) -> Self {
        Token::Symbol(value)
    }
}

impl From<i64> for Token<'_> {
    fn from(value: i64) -> Self {
        Token::Integer(value)
    }
}

impl From<i32> for Token<'_> {
    fn from(value: i32) -> Self {
        Token::Integer(i64::from(value))
    }
}

impl From<u16> for Token<'_> {
    fn from(value: u16) -> Self {
        Token::Integer(i64::from(value))
    }
}

/// Which step produced a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Numeric,
    Symbol,
    Exact,
    CaseFolded,
    Fuzzy,
}

/// Why a token did not resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Failure {
    InvalidInput,
    NotFound,
    /// Distinct candidate rows, ascending.
    Ambiguous(Vec<usize>),
}

/// The resolution engine: immutable mappings plus the mutable cache.
#[derive(Debug)]
pub(crate) struct Resolver {
    global: LookupMapping<String>,
    /// Lowercased global keys with their rows, deduplicated.
    fuzzy_keys: Vec<(String, usize)>,
    numeric: LookupMapping<i64>,
    cache: ResolutionCache,
    mode: MatchingMode,
}

impl Resolver {
    pub(crate) fn new(
        global: LookupMapping<String>,
        numeric: LookupMapping<i64>,
        mode: MatchingMode,
    ) -> Self {
        let fuzzy_keys: BTreeSet<(String, usize)> = global
            .iter()
            .map(|(key, row)| (key.to_lowercase(), row))
            .collect();
        let cache = ResolutionCache::seeded(&global);
        Self {
            global,
            fuzzy_keys: fuzzy_keys.into_iter().collect(),
            numeric,
            cache,
            mode,
        }
    }

    pub(crate) fn mode(&self) -> MatchingMode {
        self.mode
    }

    pub(crate) fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    pub(crate) fn global(&self) -> &LookupMapping<String> {
        &self.global
    }

    /// Discard learned aliases and rejections.
    pub(crate) fn reset(&self) {
        self.cache.reset(&self.global);
    }

    pub(crate) fn resolve(&self, token: Token<'_>) -> Result<(usize, Step), Failure> {
        match token {
            Token::Integer(value) => self.resolve_integer(value),
            Token::Symbol(symbol) => {
                let mut state = self.cache.lock();
                if let Some(row) = state.symbol_whitelisted(symbol) {
                    tracing::trace!(token = %symbol, row, "Symbol whitelist hit");
                    return Ok((row, Step::Symbol));
                }
                if state.symbol_blacklisted(symbol) {
                    tracing::trace!(token = %symbol, "Symbol blacklist hit");
                    return Err(Failure::NotFound);
                }
                self.resolve_text(&mut state, symbol.as_str())
            }
            Token::Text(text) => {
                let mut state = self.cache.lock();
                self.resolve_text(&mut state, text)
            }
        }
    }

    fn resolve_integer(&self, value: i64) -> Result<(usize, Step), Failure> {
        if value <= 0 {
            return Err(Failure::NotFound);
        }
        self.numeric
            .get(&value)
            .map(|row| (row, Step::Numeric))
            .ok_or(Failure::NotFound)
    }

    fn resolve_text(&self, state: &mut CacheState, token: &str) -> Result<(usize, Step), Failure> {
        if token.trim().is_empty() {
            return Err(Failure::InvalidInput);
        }

        if let Some(row) = state.whitelisted(token) {
            tracing::trace!(token, row, "Whitelist hit");
            return Ok((row, Step::Exact));
        }
        if state.blacklisted(token) {
            tracing::trace!(token, "Blacklist hit");
            return Err(Failure::NotFound);
        }

        let lower = token.to_lowercase();
        if let Some(row) = state.whitelisted(&lower) {
            tracing::trace!(token, row, "Case-folded whitelist hit");
            state.keep(token, row);
            return Ok((row, Step::CaseFolded));
        }
        if state.blacklisted(&lower) {
            tracing::trace!(token, "Case-folded blacklist hit");
            return Err(Failure::NotFound);
        }

        if self.mode == MatchingMode::Strict {
            return Err(Failure::NotFound);
        }

        let rows = self.fuzzy_candidates(&lower);
        tracing::trace!(token, candidates = rows.len(), "Fuzzy substring scan");
        match rows.as_slice() {
            [] => Err(Failure::NotFound),
            [row] if token.chars().count() >= MIN_FUZZY_ACCEPT_LEN => {
                state.keep(token, *row);
                Ok((*row, Step::Fuzzy))
            }
            _ => Err(Failure::Ambiguous(rows)),
        }
    }

    /// Distinct rows whose lowercased global key contains `needle`.
    fn fuzzy_candidates(&self, needle: &str) -> Vec<usize> {
        let rows: BTreeSet<usize> = self
            .fuzzy_keys
            .iter()
            .filter(|(key, _)| key.contains(needle))
            .map(|&(_, row)| row)
            .collect();
        rows.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{build_global_mapping, build_numeric_mapping, build_property_mapping};

    fn resolver(mode: MatchingMode) -> Resolver {
        let (codes, _) = build_property_mapping(
            "code",
            [(1, Some("FR")), (2, Some("DE")), (3, Some("NE")), (4, Some("NG"))],
            true,
        );
        let (names, _) = build_property_mapping(
            "name",
            [
                (1, Some("France")),
                (2, Some("Germany")),
                (3, Some("Niger")),
                (4, Some("Nigeria")),
            ],
            true,
        );
        let global = build_global_mapping([("code", &codes), ("name", &names)]).expect("global");
        let (numeric, _) = build_numeric_mapping(
            "numeric",
            [(1, Some(250)), (2, Some(276)), (3, Some(562)), (4, Some(566))],
        );
        Resolver::new(global, numeric, mode)
    }

    #[test]
    fn integer_path() {
        let resolver = resolver(MatchingMode::Lenient);
        assert_eq!(resolver.resolve(Token::Integer(276)), Ok((2, Step::Numeric)));
        assert_eq!(resolver.resolve(Token::Integer(0)), Err(Failure::NotFound));
        assert_eq!(resolver.resolve(Token::Integer(-250)), Err(Failure::NotFound));
        assert_eq!(resolver.resolve(Token::Integer(999)), Err(Failure::NotFound));
    }

    #[test]
    fn exact_then_case_folded() {
        let resolver = resolver(MatchingMode::Lenient);
        assert_eq!(resolver.resolve(Token::Text("france")), Ok((1, Step::Exact)));
        assert_eq!(resolver.resolve(Token::Text("fRANCE")), Ok((1, Step::CaseFolded)));
        // kept: the literal token is now an exact hit
        assert_eq!(resolver.resolve(Token::Text("fRANCE")), Ok((1, Step::Exact)));
    }

    #[test]
    fn fuzzy_accepts_single_long_match_once() {
        let resolver = resolver(MatchingMode::Lenient);
        assert_eq!(resolver.resolve(Token::Text("Germ")), Ok((2, Step::Fuzzy)));
        assert_eq!(resolver.resolve(Token::Text("Germ")), Ok((2, Step::Exact)));
        assert_eq!(resolver.resolve(Token::Text("GERM")), Ok((2, Step::Exact)));
    }

    #[test]
    fn fuzzy_short_single_match_is_ambiguous() {
        let resolver = resolver(MatchingMode::Lenient);
        assert_eq!(
            resolver.resolve(Token::Text("anc")),
            Err(Failure::Ambiguous(vec![1]))
        );
        assert_eq!(resolver.cache().whitelisted("anc"), None);
    }

    #[test]
    fn fuzzy_counts_distinct_rows() {
        let resolver = resolver(MatchingMode::Lenient);
        // "nige" matches Niger and Nigeria under several keys each
        assert_eq!(
            resolver.resolve(Token::Text("nige")),
            Err(Failure::Ambiguous(vec![3, 4]))
        );
        // "eria" only matches Nigeria, under two case variants
        assert_eq!(resolver.resolve(Token::Text("eria")), Ok((4, Step::Fuzzy)));
    }

    #[test]
    fn substring_direction_is_token_inside_key() {
        let resolver = resolver(MatchingMode::Lenient);
        assert_eq!(
            resolver.resolve(Token::Text("Republic of France")),
            Err(Failure::NotFound)
        );
    }

    #[test]
    fn empty_and_blank_tokens_are_invalid() {
        let resolver = resolver(MatchingMode::Lenient);
        assert_eq!(resolver.resolve(Token::Text("")), Err(Failure::InvalidInput));
        assert_eq!(resolver.resolve(Token::Text("  ")), Err(Failure::InvalidInput));
    }

    #[test]
    fn strict_mode_skips_fuzzy_scan() {
        let resolver = resolver(MatchingMode::Strict);
        assert_eq!(resolver.resolve(Token::Text("GERMANY")), Ok((2, Step::Exact)));
        assert_eq!(resolver.resolve(Token::Text("Germ")), Err(Failure::NotFound));
    }

    #[test]
    fn blacklist_preempts_fuzzy_match() {
        let resolver = resolver(MatchingMode::Lenient);
        resolver.cache().add_to_blacklist("Germ");
        assert_eq!(resolver.resolve(Token::Text("Germ")), Err(Failure::NotFound));
        assert_eq!(resolver.resolve(Token::Text("germ")), Err(Failure::NotFound));
    }

    #[test]
    fn symbol_path_mirrors_text_cache() {
        let resolver = resolver(MatchingMode::Lenient);
        let symbol = Symbol::new("de");
        assert_eq!(resolver.resolve(Token::Symbol(&symbol)), Ok((2, Step::Symbol)));

        let fuzzy = Symbol::new("Franc");
        assert_eq!(resolver.resolve(Token::Symbol(&fuzzy)), Ok((1, Step::Fuzzy)));
        assert_eq!(resolver.resolve(Token::Symbol(&fuzzy)), Ok((1, Step::Symbol)));
        assert_eq!(resolver.resolve(Token::Text("franc")), Ok((1, Step::Exact)));

        resolver.cache().add_to_blacklist("Franc");
        assert_eq!(resolver.resolve(Token::Symbol(&fuzzy)), Err(Failure::NotFound));
    }

    #[test]
    fn reset_forgets_learned_tokens() {
        let resolver = resolver(MatchingMode::Lenient);
        resolver.resolve(Token::Text("Germ")).expect("fuzzy accept");
        resolver.reset();
        assert_eq!(resolver.cache().whitelisted("Germ"), None);
        assert_eq!(resolver.global().get("DE"), Some(2));
    }
}
