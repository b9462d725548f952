//! Country table provider.
//!
//! This crate provides:
//!
//! - **Embedded data**: the ISO 3166-1 country table compiled into the binary
//! - **Declared properties**: the [`COUNTRY_SCHEMA`] describing every column
//! - **Loaders** turning CSV text into a [`SourceTable`](country_model::SourceTable)
//! - **Data source configuration** (`COUNTRY_DATA` override)
//!
//! # Data File
//!
//! ```text
//! data/
//! └── countries.csv    # 249 rows, one per ISO 3166-1 entry
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use country_standards::{COUNTRY_SCHEMA, DataSource};
//!
//! let table = DataSource::from_env().load(&COUNTRY_SCHEMA)?;
//! println!("{} rows", table.row_count());
//! ```

pub mod embedded;
pub mod error;
pub mod loader;
pub mod properties;
pub mod source;

pub use error::{Result, StandardsError};
pub use loader::{load, load_from_path, load_from_str};
pub use properties::COUNTRY_SCHEMA;
pub use source::{DATA_ENV_VAR, DataSource};
