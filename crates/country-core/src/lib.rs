//! Country resolution engine.
//!
//! This crate provides:
//!
//! - **Column store**: typed, row-aligned storage for every declared property
//! - **Lookup tables**: per-property key → row mappings and the merged global
//!   identifier mapping
//! - **Entity handles** ([`Country`]) ordered by canonical code
//! - **Resolution**: free-form tokens (codes, names, numbers) resolved to one
//!   entity through whitelist, blacklist and a fuzzy substring fallback
//! - **Export** of the catalog as CSV, JSON or a polars `DataFrame`
//!
//! # Resolution Pipeline
//!
//! ```text
//! integer ──► numeric mapping ─────────────────────────────► Country | NotFound
//! symbol  ──► symbol whitelist ─► symbol blacklist ─► text pipeline
//! text    ──► empty? ─► whitelist ─► blacklist ─► lowercase whitelist
//!             ─► fuzzy scan over global keys (lenient mode only)
//!                  1 match, > 3 chars  ─► accept, whitelist, warn
//!                  0 matches           ─► NotFound
//!                  otherwise           ─► Ambiguous(candidates)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use country_core::{Countries, CountryError};
//!
//! let countries = Countries::embedded()?;
//! let gb = countries.resolve("United Kingdom")?;
//! assert_eq!(countries.canonical_code(gb), Some("GBR"));
//!
//! match countries.resolve("korea") {
//!     Err(CountryError::Ambiguous { candidates, .. }) => {
//!         countries.add_alias("korea", candidates[0].country);
//!     }
//!     other => println!("{other:?}"),
//! }
//! ```

pub mod accessor;
pub mod cache;
pub mod catalog;
pub mod column_store;
pub mod config;
pub mod countries;
pub mod entity;
pub mod error;
pub mod export;
pub mod frame;
pub mod lookup;
mod resolver;

pub use cache::CacheStats;
pub use catalog::Catalog;
pub use config::{CountriesConfig, MatchingMode};
pub use countries::{Advisory, Countries, MatchKind, Resolution};
pub use entity::Country;
pub use error::{Candidate, CountryError, Result};
pub use export::{Cell, ExportRow};
pub use frame::to_dataframe;
pub use lookup::{Collision, LookupMapping};
pub use resolver::Token;

pub use country_model::{PropertyDescriptor, Symbol, Value};
pub use country_standards::{COUNTRY_SCHEMA, DataSource};
