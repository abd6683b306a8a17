//! Enumerations shared by schema and graph elements
//!
//! All of them travel on the wire as their SCREAMING_SNAKE_CASE names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a server-side object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HugeType {
    PropertyKey,
    VertexLabel,
    EdgeLabel,
    IndexLabel,
    Vertex,
    Edge,
}

impl HugeType {
    /// Collection name used in REST paths and list responses
    pub fn plural(&self) -> &'static str {
        match self {
            HugeType::PropertyKey => "propertykeys",
            HugeType::VertexLabel => "vertexlabels",
            HugeType::EdgeLabel => "edgelabels",
            HugeType::IndexLabel => "indexlabels",
            HugeType::Vertex => "vertices",
            HugeType::Edge => "edges",
        }
    }
}

impl fmt::Display for HugeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HugeType::PropertyKey => "property key",
            HugeType::VertexLabel => "vertex label",
            HugeType::EdgeLabel => "edge label",
            HugeType::IndexLabel => "index label",
            HugeType::Vertex => "vertex",
            HugeType::Edge => "edge",
        })
    }
}

/// Value type of a property key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    #[default]
    Text,
    Int,
    Boolean,
    Byte,
    Blob,
    Double,
    Float,
    Long,
    Timestamp,
    Uuid,
}

/// How many values a property holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Cardinality {
    /// One value, overwritten on update
    #[default]
    Single,
    /// Ordered values, duplicates kept
    List,
    /// Values without duplicates
    Set,
}

/// Whether two vertices may be linked more than once by the same edge label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    #[default]
    Single,
    Multiple,
}

/// How vertex ids of a vertex label are produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdStrategy {
    /// Let the server pick: PRIMARY_KEY if primary keys are given, else AUTOMATIC
    #[default]
    Default,
    Automatic,
    PrimaryKey,
    CustomizeString,
    CustomizeNumber,
    CustomizeUuid,
}

impl IdStrategy {
    /// Whether vertices of this label carry a client-supplied id
    pub fn is_customize(&self) -> bool {
        matches!(
            self,
            IdStrategy::CustomizeString | IdStrategy::CustomizeNumber | IdStrategy::CustomizeUuid
        )
    }

    /// Whether a vertex of this label may be submitted with an id already set
    pub fn accepts_client_id(&self) -> bool {
        *self == IdStrategy::PrimaryKey || self.is_customize()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IndexType {
    #[default]
    Secondary,
    Search,
}

/// Edge direction relative to a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Out,
    In,
    #[default]
    Both,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Out => "OUT",
            Direction::In => "IN",
            Direction::Both => "BOTH",
        })
    }
}
