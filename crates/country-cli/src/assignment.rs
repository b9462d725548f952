//! `KEY=VALUE` command-line arguments.

use std::fmt;

/// A `KEY=VALUE` pair, as used by `--alias TOKEN=CODE` and `--where PROPERTY=VALUE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub key: String,
    pub value: String,
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Split on the first `=`; both sides are trimmed and must be non-empty.
pub fn parse_assignment(input: &str) -> Result<Assignment, String> {
    let Some((key, value)) = input.split_once('=') else {
        return Err(format!("expected KEY=VALUE, got '{input}'"));
    };
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return Err(format!("expected KEY=VALUE, got '{input}'"));
    }
    Ok(Assignment {
        key: key.to_string(),
        value: value.to_string(),
    })
}
