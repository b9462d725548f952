//! Data source selection.

use std::path::PathBuf;

use country_model::{Schema, SourceTable};

use crate::error::Result;
use crate::loader;

/// Environment variable pointing at an alternative country CSV.
pub const DATA_ENV_VAR: &str = "COUNTRY_DATA";

/// Where the country table comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// The table compiled into the binary.
    #[default]
    Embedded,
    /// A CSV file with the same header as the embedded table.
    File(PathBuf),
}

impl DataSource {
    /// Use `COUNTRY_DATA` when set and non-empty, the embedded table otherwise.
    pub fn from_env() -> Self {
        match std::env::var_os(DATA_ENV_VAR) {
            Some(path) if !path.is_empty() => Self::File(PathBuf::from(path)),
            _ => Self::Embedded,
        }
    }

    /// Load the table described by `schema` from this source.
    pub fn load(&self, schema: &Schema) -> Result<SourceTable> {
        match self {
            Self::Embedded => loader::load(schema),
            Self::File(path) => loader::load_from_path(path, schema),
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> String {
        match self {
            Self::Embedded => "embedded".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}
