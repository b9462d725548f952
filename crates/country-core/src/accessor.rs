//! Name → accessor registry.
//!
//! One accessor closure per declared property, built in a single loop over
//! the schema. Every accessor projects one column of the store for a row.

use std::collections::BTreeMap;
use std::fmt;

use country_model::{Schema, Value};

use crate::column_store::ColumnStore;

/// Projection of one property for a row (1-based).
pub type Accessor = Box<dyn for<'a> Fn(&'a ColumnStore, usize) -> Option<Value<'a>> + Send + Sync>;

/// Accessors keyed by property name.
pub struct AccessorRegistry {
    accessors: BTreeMap<&'static str, Accessor>,
}

impl AccessorRegistry {
    /// Register one accessor per declared property.
    pub fn build(schema: &Schema) -> Self {
        let mut accessors: BTreeMap<&'static str, Accessor> = BTreeMap::new();
        for (slot, property) in schema.properties.iter().enumerate() {
            accessors.insert(property.name, accessor(move |store, row| store.get(slot, row)));
        }
        Self { accessors }
    }

    /// Accessor for `name`.
    pub fn get(&self, name: &str) -> Option<&Accessor> {
        self.accessors.get(name)
    }
}

fn accessor<F>(project: F) -> Accessor
where
    F: for<'a> Fn(&'a ColumnStore, usize) -> Option<Value<'a>> + Send + Sync + 'static,
{
    Box::new(project)
}

impl fmt::Debug for AccessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorRegistry")
            .field("names", &self.accessors.keys().collect::<Vec<_>>())
            .finish()
    }
}
