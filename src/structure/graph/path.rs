//! Traversal paths

use serde::de::{Deserialize, Deserializer, Error as _};
use serde::Serialize;
use serde_json::Value;

use crate::serializer::decode_path;
use crate::structure::graph::{Edge, Vertex};

/// One step of a path: a vertex, an edge, or any other value the traversal
/// produced (a property value, a count...)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathObject {
    Vertex(Vertex),
    Edge(Edge),
    Scalar(Value),
}

impl PathObject {
    pub fn as_vertex(&self) -> Option<&Vertex> {
        match self {
            PathObject::Vertex(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            PathObject::Edge(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            PathObject::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Vertex> for PathObject {
    fn from(vertex: Vertex) -> Self {
        PathObject::Vertex(vertex)
    }
}

impl From<Edge> for PathObject {
    fn from(edge: Edge) -> Self {
        PathObject::Edge(edge)
    }
}

impl From<Value> for PathObject {
    fn from(value: Value) -> Self {
        PathObject::Scalar(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Path {
    labels: Vec<String>,
    objects: Vec<PathObject>,
}

impl Path {
    pub fn new(labels: Vec<String>, objects: Vec<PathObject>) -> Self {
        Self { labels, objects }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn objects(&self) -> &[PathObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.objects.iter().filter_map(PathObject::as_vertex)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.objects.iter().filter_map(PathObject::as_edge)
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let node = Value::deserialize(deserializer)?;
        decode_path(&node).map_err(D::Error::custom)
    }
}
