//! Error types for catalog construction and token resolution.

use std::fmt;

use country_standards::StandardsError;
use thiserror::Error;

use crate::entity::Country;

/// Errors raised by the country catalog.
///
/// `InvalidInput`, `NotFound` and `Ambiguous` are ordinary outcomes of
/// [`resolve`](crate::Countries::resolve). `OutOfRange` is a contract
/// violation by the caller. `Configuration`, `InvalidValue` and
/// `MissingColumn` only occur while the catalog is being built, and abort the
/// build.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CountryError {
    /// Empty token.
    #[error("Cannot resolve an empty token")]
    InvalidInput,

    /// No entity matches the token, or the token is blacklisted.
    #[error("No country matches '{token}'")]
    NotFound { token: String },

    /// Several entities match, or a single match for a token too short to trust.
    #[error("Ambiguous token '{token}' matches {}; use add_alias to pick one", CandidateList(.candidates))]
    Ambiguous {
        token: String,
        /// Distinct candidates in canonical order.
        candidates: Vec<Candidate>,
    },

    /// Row index outside `1..=rows`.
    #[error("Row index {index} out of range 1..={rows}")]
    OutOfRange { index: usize, rows: usize },

    /// Two global identifier columns map the same key to different rows.
    #[error(
        "Identifier '{key}' maps to row {first_row} via {first_property} and to row {second_row} via {second_property}"
    )]
    Configuration {
        key: String,
        first_property: &'static str,
        first_row: usize,
        second_property: &'static str,
        second_row: usize,
    },

    /// An integer cell could not be parsed.
    #[error("Invalid {property} value '{value}' in row {row}")]
    InvalidValue {
        property: &'static str,
        row: usize,
        value: String,
    },

    /// A declared column is missing from the source table.
    #[error("Source table has no column '{column}'")]
    MissingColumn { column: &'static str },

    /// Accessor requested for an undeclared property.
    #[error("Unknown property '{name}'")]
    UnknownProperty { name: String },

    /// Loading the source table failed.
    #[error(transparent)]
    Standards(#[from] StandardsError),

    /// Writing CSV output failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    /// Writing JSON output failed.
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Building a DataFrame failed.
    #[error("DataFrame error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// Writing export output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CountryError {
    /// True for the expected outcomes of `resolve` a caller can act on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::NotFound { .. } | Self::Ambiguous { .. }
        )
    }

    /// Candidates of an `Ambiguous` failure, empty otherwise.
    pub fn candidates(&self) -> &[Candidate] {
        match self {
            Self::Ambiguous { candidates, .. } => candidates,
            _ => &[],
        }
    }
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CountryError>;

/// One candidate of an ambiguous resolution.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Candidate {
    #[serde(skip)]
    pub country: Country,
    /// Canonical code (alpha-3).
    pub code: String,
    /// Display name.
    pub name: String,
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}

struct CandidateList<'a>(&'a [Candidate]);

impl fmt::Display for CandidateList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.len() {
            0 => f.write_str("no candidates"),
            1 => write!(f, "only {} but is too short to accept", self.0[0]),
            n => {
                write!(f, "{n} countries: ")?;
                for (i, candidate) in self.0.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{candidate}")?;
                }
                Ok(())
            }
        }
    }
}
