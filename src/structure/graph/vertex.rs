//! Vertices

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::driver::{HugeClient, SessionId};
use crate::error::{HugeError, HugeResult};
use crate::structure::graph::{Edge, GraphElement, Id, PropertyMap};

pub(crate) const VERTEX_TYPE: &str = "vertex";

fn vertex_type() -> String {
    VERTEX_TYPE.to_string()
}

/// A vertex of the graph
///
/// Vertices returned by a [`GraphManager`](crate::GraphManager) remember the
/// session that produced them, which lets [`Vertex::add_edge`] find its way
/// back to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<Id>,
    label: String,
    #[serde(rename = "type", default = "vertex_type")]
    element_type: String,
    #[serde(default)]
    properties: PropertyMap,
    #[serde(skip)]
    session: Option<SessionId>,
}

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: None,
            label: label.into(),
            element_type: vertex_type(),
            properties: PropertyMap::new(),
            session: None,
        }
    }

    /// Set a client-side id (only accepted for CUSTOMIZE_* id strategies)
    pub fn with_id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Chained SINGLE property setter, for building vertices before creation
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

    pub fn session(&self) -> Option<SessionId> {
        self.session
    }

    pub(crate) fn attach(&mut self, session: SessionId) {
        self.session = Some(session);
    }

    /// Create an edge from this vertex to `target` through the session this
    /// vertex was created or fetched by
    pub async fn add_edge<I, K, V>(
        &self,
        client: &HugeClient,
        label: &str,
        target: &Vertex,
        properties: I,
    ) -> HugeResult<Edge>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let session = self.session.ok_or_else(|| {
            HugeError::Client(format!(
                "The vertex '{}' is not attached to a graph session",
                self
            ))
        })?;
        let graph = client.session(session)?;
        graph.add_edge_between(self, label, target, properties).await
    }
}

impl GraphElement for Vertex {
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

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{{id={}, label={}, properties={:?}}}", id, self.label, self.properties),
            None => write!(f, "{{label={}, properties={:?}}}", self.label, self.properties),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_format() {
        let vertex = Vertex::new("person").property("name", "marko").property("age", 29);
        assert_eq!(
            serde_json::to_value(&vertex).unwrap(),
            json!({
                "label": "person",
                "type": "vertex",
                "properties": {"name": "marko", "age": 29}
            })
        );
    }

    #[test]
    fn test_decode_without_type_field() {
        let vertex: Vertex = serde_json::from_value(json!({
            "id": "1:marko",
            "label": "person",
            "properties": {"name": "marko"}
        }))
        .unwrap();
        assert_eq!(vertex.id(), Some(&Id::from("1:marko")));
        assert_eq!(vertex.property_value("name"), Some(&json!("marko")));
        assert_eq!(vertex.session(), None);
    }

    #[test]
    fn test_remove_property() {
        let mut vertex = Vertex::new("person").property("name", "marko").property("age", 29);
        assert_eq!(vertex.remove_property("age").unwrap(), json!(29));
        assert_eq!(vertex.properties().len(), 1);
        assert!(vertex.property_value("name").is_some());

        let err = vertex.remove_property("age").unwrap_err();
        assert!(matches!(err, HugeError::InvalidOperation(_)));
    }
}
