//! Core types shared by the country catalog crates.
//!
//! This crate provides:
//!
//! - **Property descriptors** declaring each column of the catalog, its scalar
//!   kind, output representation and identifier flags
//! - **Values** projected out of the column store (`Value`, `Symbol`)
//! - **Source tables**: the already-parsed rectangular table handed over by a
//!   table provider
//!
//! # Module Organization
//!
//! - [`property`]: `PropertyDescriptor`, `ScalarKind`, `Representation`
//! - [`symbol`]: interned tokens (`Symbol`, `SymbolTable`)
//! - [`value`]: borrowed property values (`Value`)
//! - [`table`]: `SourceTable`
//! - [`schema`]: `Schema`, the property list plus role names
//! - [`error`]: table shape errors

pub mod error;
pub mod property;
pub mod schema;
pub mod symbol;
pub mod table;
pub mod value;

pub use error::{Result, TableError};
pub use property::{PropertyDescriptor, Representation, ScalarKind};
pub use schema::Schema;
pub use symbol::{Symbol, SymbolTable};
pub use table::SourceTable;
pub use value::Value;
