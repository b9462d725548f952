//! Catalog schema: the declared property list plus the roles the engine needs.

use serde::Serialize;

use crate::property::PropertyDescriptor;

/// Declared properties and the names of the properties playing special roles.
///
/// - `primary`: a row belongs to the catalog iff this property is non-empty
/// - `order_key`: canonical ordering of entities
/// - `numeric`: integer property used for integer tokens
/// - `display_name`: property shown when an entity is named in diagnostics
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Schema {
    pub properties: &'static [PropertyDescriptor],
    pub primary: &'static str,
    pub order_key: &'static str,
    pub numeric: &'static str,
    pub display_name: &'static str,
}

impl Schema {
    /// Find a declared property by name.
    pub fn property(&self, name: &str) -> Option<&'static PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Position of a declared property in the descriptor list.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }

    /// Properties flagged as global identifiers, in declaration order.
    pub fn global_identifiers(&self) -> impl Iterator<Item = &'static PropertyDescriptor> {
        self.properties.iter().filter(|p| p.is_global_identifier())
    }
}
