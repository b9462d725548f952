//! Catalog configuration.

use country_standards::DataSource;

/// How far the text resolution pipeline may go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchingMode {
    /// Exact, case-folded and fuzzy substring matching.
    #[default]
    Lenient,
    /// Exact and case-folded matching only; tokens needing a guess fail.
    Strict,
}

/// Configuration for loading the catalog.
#[derive(Debug, Clone, Default)]
pub struct CountriesConfig {
    /// Where the source table comes from.
    pub source: DataSource,
    /// Resolution matching mode.
    pub matching_mode: MatchingMode,
}

impl CountriesConfig {
    /// Default configuration with the data source taken from `COUNTRY_DATA`.
    pub fn from_env() -> Self {
        Self {
            source: DataSource::from_env(),
            ..Default::default()
        }
    }

    /// Set the data source.
    #[must_use]
    pub fn with_source(mut self, source: DataSource) -> Self {
        self.source = source;
        self
    }

    /// Set the matching mode.
    #[must_use]
    pub fn with_matching_mode(mut self, mode: MatchingMode) -> Self {
        self.matching_mode = mode;
        self
    }
}
