//! Property values read back from the column store.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::symbol::Symbol;

/// A present (non-null) property value.
///
/// Absent values are represented by `None` at the accessor level, never by a
/// variant of this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'a> {
    /// Text cell.
    Text(&'a str),
    /// Interned token cell.
    Symbol(&'a Symbol),
    /// Integer cell.
    Integer(i64),
}

impl<'a> Value<'a> {
    /// Text view of text and symbol values.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Value::Text(text) => Some(text),
            Value::Symbol(symbol) => Some(symbol.as_str()),
            Value::Integer(_) => None,
        }
    }

    /// Integer view.
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Value::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Symbol view.
    pub fn as_symbol(&self) -> Option<&'a Symbol> {
        match *self {
            Value::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    /// Case-insensitive comparison against user input.
    pub fn matches(&self, input: &str) -> bool {
        match *self {
            Value::Integer(value) => input.trim().parse::<i64>().is_ok_and(|v| v == value),
            _ => self
                .as_str()
                .is_some_and(|text| text.to_lowercase() == input.to_lowercase()),
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Symbol(symbol) => f.write_str(symbol.as_str()),
            Value::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for Value<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(text) => serializer.serialize_str(text),
            Value::Symbol(symbol) => serializer.serialize_str(symbol.as_str()),
            Value::Integer(value) => serializer.serialize_i64(*value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_is_case_insensitive() {
        let symbol = Symbol::new("EU");
        assert!(Value::Symbol(&symbol).matches("eu"));
        assert!(Value::Text("France").matches("FRANCE"));
        assert!(!Value::Text("France").matches("Franc"));
    }

    #[test]
    fn integer_matches_parsed_input() {
        assert!(Value::Integer(250).matches("250"));
        assert!(Value::Integer(4).matches(" 4 "));
        assert!(!Value::Integer(4).matches("004x"));
    }

    #[test]
    fn serializes_as_plain_json_scalars() {
        let symbol = Symbol::new("GB");
        let values = vec![Value::Symbol(&symbol), Value::Integer(826), Value::Text("London")];
        let json = serde_json::to_string(&values).expect("serialize");
        assert_eq!(json, r#"["GB",826,"London"]"#);
    }
}
