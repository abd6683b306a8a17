//! Identifiers of vertices and edges

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Unique identifier of a vertex or edge.
///
/// The server emits numeric ids for AUTOMATIC/CUSTOMIZE_NUMBER labels and
/// string ids everywhere else (e.g. `"1:marko"` for primary-key vertices).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    Text(String),
}

impl Id {
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Id::Number(n) => Some(*n),
            Id::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Id::Text(s) => Some(s),
            Id::Number(_) => None,
        }
    }

    /// Form used in URL paths and query parameters: numbers bare,
    /// strings JSON-quoted, so the server can tell `1` from `"1"`
    pub fn to_json_string(&self) -> String {
        match self {
            Id::Number(n) => n.to_string(),
            Id::Text(s) => Value::String(s.clone()).to_string(),
        }
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(id: i64) -> Self {
        Id::Number(id)
    }
}

impl From<i32> for Id {
    fn from(id: i32) -> Self {
        Id::Number(id as i64)
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Id::Text(id)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Id::Text(id.to_string())
    }
}

impl From<&Id> for Id {
    fn from(id: &Id) -> Self {
        id.clone()
    }
}
