//! Property descriptors for the catalog columns.
//!
//! Every column the catalog exposes is declared once as a
//! [`PropertyDescriptor`]. The descriptor list drives the whole build: column
//! storage, lookup mappings and the name → accessor registry are all derived
//! from it in a single loop.
//!
//! # Identifier flags
//!
//! - `unique`: values in this column identify a row; a lookup mapping is built
//! - `global`: a unique column that also feeds the cross-property identifier
//!   mapping used by the resolver
//! - `fold_case`: lowercase and uppercase variants are registered alongside
//!   the original value

use serde::{Deserialize, Serialize};

/// Scalar kind of the raw cells in a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    /// Text passed through as-is.
    Text,
    /// Integer parsed from text. Empty cells and `0` mean "absent".
    Integer,
}

/// How text values are represented when read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Owned text, one allocation per cell.
    #[default]
    Text,
    /// Interned token shared between equal cells.
    Symbol,
}

/// Declaration of one catalog property.
///
/// # Example
///
/// ```
/// use country_model::{PropertyDescriptor, Representation, ScalarKind};
///
/// let alpha2 = PropertyDescriptor::symbol("alpha2", "ISO3166-1-Alpha-2")
///     .unique()
///     .global()
///     .fold_case();
///
/// assert_eq!(alpha2.kind, ScalarKind::Text);
/// assert_eq!(alpha2.representation, Representation::Symbol);
/// assert!(alpha2.is_global_identifier());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// Property name used by accessors (e.g. `alpha3`).
    pub name: &'static str,
    /// Column label in the source table (e.g. `ISO3166-1-Alpha-3`).
    pub column: &'static str,
    /// Scalar kind of the cells.
    pub kind: ScalarKind,
    /// Output representation for text cells.
    pub representation: Representation,
    /// Values identify a single row.
    pub unique: bool,
    /// Contributes to the global identifier mapping (only meaningful when unique).
    pub global: bool,
    /// Register lowercase and uppercase variants in the lookup mapping.
    pub fold_case: bool,
    /// Short human-readable description.
    pub description: &'static str,
}

impl PropertyDescriptor {
    const fn base(name: &'static str, column: &'static str, kind: ScalarKind) -> Self {
        Self {
            name,
            column,
            kind,
            representation: Representation::Text,
            unique: false,
            global: false,
            fold_case: false,
            description: "",
        }
    }

    /// Text property read back as owned text.
    pub const fn text(name: &'static str, column: &'static str) -> Self {
        Self::base(name, column, ScalarKind::Text)
    }

    /// Text property read back as an interned [`Symbol`](crate::Symbol).
    pub const fn symbol(name: &'static str, column: &'static str) -> Self {
        let mut descriptor = Self::base(name, column, ScalarKind::Text);
        descriptor.representation = Representation::Symbol;
        descriptor
    }

    /// Integer property.
    pub const fn integer(name: &'static str, column: &'static str) -> Self {
        Self::base(name, column, ScalarKind::Integer)
    }

    /// Mark values as row identifiers.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Feed this property into the global identifier mapping.
    ///
    /// Implies [`unique`](Self::unique).
    #[must_use]
    pub const fn global(mut self) -> Self {
        self.unique = true;
        self.global = true;
        self
    }

    /// Register case variants in the lookup mapping.
    #[must_use]
    pub const fn fold_case(mut self) -> Self {
        self.fold_case = true;
        self
    }

    /// Attach a description.
    #[must_use]
    pub const fn described(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// True when this property contributes to the global identifier mapping.
    pub const fn is_global_identifier(&self) -> bool {
        self.unique && self.global && matches!(self.kind, ScalarKind::Text)
    }

    /// Declared output type name, for listings.
    pub const fn output_type(&self) -> &'static str {
        match (self.kind, self.representation) {
            (ScalarKind::Integer, _) => "integer",
            (ScalarKind::Text, Representation::Text) => "text",
            (ScalarKind::Text, Representation::Symbol) => "symbol",
        }
    }
}
