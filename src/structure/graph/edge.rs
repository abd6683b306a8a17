//! Edges

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::structure::graph::{GraphElement, Id, PropertyMap, Vertex};

pub(crate) const EDGE_TYPE: &str = "edge";

fn edge_type() -> String {
    EDGE_TYPE.to_string()
}

/// A directed edge of the graph
///
/// `source_label`/`target_label` are hints that let the server resolve
/// primary-key vertex ids without looking the vertices up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Id>,
    label: String,
    #[serde(rename = "type", default = "edge_type")]
    element_type: String,
    #[serde(rename = "outV", default, skip_serializing_if = "Option::is_none")]
    source: Option<Id>,
    #[serde(rename = "outVLabel", default, skip_serializing_if = "Option::is_none")]
    source_label: Option<String>,
    #[serde(rename = "inV", default, skip_serializing_if = "Option::is_none")]
    target: Option<Id>,
    #[serde(rename = "inVLabel", default, skip_serializing_if = "Option::is_none")]
    target_label: Option<String>,
    #[serde(default)]
    properties: PropertyMap,
}

impl Edge {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            element_type: edge_type(),
            source: None,
            source_label: None,
            target: None,
            target_label: None,
            properties: PropertyMap::new(),
        }
    }

    pub fn source(mut self, id: impl Into<Id>) -> Self {
        self.source = Some(id.into());
        self
    }

    pub fn target(mut self, id: impl Into<Id>) -> Self {
        self.target = Some(id.into());
        self
    }

    /// Link from `vertex`, taking its id and label
    pub fn source_vertex(mut self, vertex: &Vertex) -> Self {
        self.source = vertex.id().cloned();
        self.source_label = Some(vertex.label().to_string());
        self
    }

    /// Link to `vertex`, taking its id and label
    pub fn target_vertex(mut self, vertex: &Vertex) -> Self {
        self.target = vertex.id().cloned();
        self.target_label = Some(vertex.label().to_string());
        self
    }

    pub fn source_label(mut self, label: impl Into<String>) -> Self {
        self.source_label = Some(label.into());
        self
    }

    pub fn target_label(mut self, label: impl Into<String>) -> Self {
        self.target_label = Some(label.into());
        self
    }

    /// Chained SINGLE property setter, for building edges before creation
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_property(key, value);
        self
    }

    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    pub(crate) fn set_id(&mut self, id: Id) {
        self.id = Some(id);
    }

    pub fn source_id(&self) -> Option<&Id> {
        self.source.as_ref()
    }

    pub fn target_id(&self) -> Option<&Id> {
        self.target.as_ref()
    }

    pub fn source_label_name(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    pub fn target_label_name(&self) -> Option<&str> {
        self.target_label.as_deref()
    }
}

impl GraphElement for Edge {
    fn label(&self) -> &str {
        &self.label
    }

    fn properties(&self) -> &PropertyMap {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyMap {
        &mut self.properties
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = |id: &Option<Id>| id.as_ref().map(Id::to_string).unwrap_or_default();
        write!(
            f,
            "{{id={}, source={}, label={}, target={}, properties={:?}}}",
            id(&self.id),
            id(&self.source),
            self.label,
            id(&self.target),
            self.properties
        )
    }
}
