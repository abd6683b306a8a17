//! GraphManager: vertex and edge mutation for one graph session

use serde_json::Value;
use std::sync::Arc;

use crate::api::{EdgeApi, SchemaApi, VertexApi};
use crate::driver::batch::reconcile;
use crate::driver::SessionId;
use crate::error::{HugeError, HugeResult};
use crate::structure::graph::{Edge, GraphElement, Id, Vertex};
use crate::structure::schema::VertexLabel;
use crate::transport::Transport;

/// Vertex and edge operations on one graph.
///
/// Every vertex this manager returns is attached to its session, so
/// [`Vertex::add_edge`] can route back here through the client.
#[derive(Clone)]
pub struct GraphManager {
    graph: String,
    session: SessionId,
    vertices: VertexApi,
    edges: EdgeApi,
    vertex_labels: SchemaApi<VertexLabel>,
}

impl std::fmt::Debug for GraphManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphManager")
            .field("graph", &self.graph)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl GraphManager {
    pub fn new(transport: Arc<dyn Transport>, graph: &str) -> Self {
        Self {
            graph: graph.to_string(),
            session: SessionId::next(),
            vertices: VertexApi::new(Arc::clone(&transport), graph),
            edges: EdgeApi::new(Arc::clone(&transport), graph),
            vertex_labels: SchemaApi::new(transport, graph),
        }
    }

    pub fn graph(&self) -> &str {
        &self.graph
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    fn attach(&self, mut vertex: Vertex) -> Vertex {
        vertex.attach(self.session);
        vertex
    }

    // ============================================================
    // Vertices
    // ============================================================

    /// Create one vertex.
    ///
    /// A client-side id is only accepted when the vertex label uses the
    /// PRIMARY_KEY or a CUSTOMIZE_* id strategy. The label is read to check;
    /// nothing is written before the check passes.
    pub async fn add_vertex(&self, vertex: Vertex) -> HugeResult<Vertex> {
        if vertex.id().is_some() {
            self.check_client_id(&vertex).await?;
        }
        let created = self.vertices.create(&vertex).await?;
        Ok(self.attach(created))
    }

    async fn check_client_id(&self, vertex: &Vertex) -> HugeResult<()> {
        let label = match self.vertex_labels.get(vertex.label()).await {
            Ok(label) => label,
            Err(e) if e.is_not_found() => {
                return Err(HugeError::Client(format!(
                    "Can't set id for vertex '{}', the vertex label '{}' does not exist",
                    vertex,
                    vertex.label()
                )));
            }
            Err(e) => return Err(e),
        };
        if !label.id_strategy().accepts_client_id() {
            return Err(HugeError::Client(format!(
                "Only primary key or customize id strategy vertex label can set id, \
                 but the id strategy of vertex label '{}' is {:?}",
                vertex.label(),
                label.id_strategy()
            )));
        }
        Ok(())
    }

    /// Create vertices in one batch request and assign the returned ids in
    /// submission order
    pub async fn add_vertices(&self, vertices: Vec<Vertex>) -> HugeResult<Vec<Vertex>> {
        if vertices.is_empty() {
            return Ok(vertices);
        }
        let batch = self.vertices.create_batch(&vertices).await?;
        let created = reconcile(vertices, batch)?;
        Ok(created.into_iter().map(|v| self.attach(v)).collect())
    }

    pub async fn get_vertex(&self, id: impl Into<Id>) -> HugeResult<Vertex> {
        let vertex = self.vertices.get(&id.into()).await?;
        Ok(self.attach(vertex))
    }

    /// At most `limit` vertices, `-1` for all of them
    pub async fn list_vertices(&self, limit: i64) -> HugeResult<Vec<Vertex>> {
        let vertices = self.vertices.list(limit).await?;
        Ok(vertices.into_iter().map(|v| self.attach(v)).collect())
    }

    pub async fn remove_vertex(&self, id: impl Into<Id>) -> HugeResult<()> {
        self.vertices.delete(&id.into()).await
    }

    /// Add the properties of `vertex` to the stored vertex with the same id
    pub async fn append_vertex(&self, vertex: &Vertex) -> HugeResult<Vertex> {
        let id = stored_id(vertex.id(), "vertex")?;
        let updated = self.vertices.append(id, vertex).await?;
        Ok(self.attach(updated))
    }

    /// Remove the properties of `vertex` from the stored vertex with the same id
    pub async fn eliminate_vertex(&self, vertex: &Vertex) -> HugeResult<Vertex> {
        let id = stored_id(vertex.id(), "vertex")?;
        let updated = self.vertices.eliminate(id, vertex).await?;
        Ok(self.attach(updated))
    }

    // ============================================================
    // Edges
    // ============================================================

    /// Create one edge; edge ids are always assigned by the server
    pub async fn add_edge(&self, edge: Edge) -> HugeResult<Edge> {
        check_new_edge(&edge)?;
        self.edges.create(&edge).await
    }

    /// Create an edge labelled `label` from `source` to `target`
    pub async fn add_edge_between<I, K, V>(
        &self,
        source: &Vertex,
        label: &str,
        target: &Vertex,
        properties: I,
    ) -> HugeResult<Edge>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        for end in [source, target] {
            if end.id().is_none() {
                return Err(HugeError::Client(format!(
                    "The vertex '{}' must be created before linking it with edge '{}'",
                    end, label
                )));
            }
        }
        let mut edge = Edge::new(label).source_vertex(source).target_vertex(target);
        for (key, value) in properties {
            edge.set_property(key, value);
        }
        self.add_edge(edge).await
    }

    /// Create edges in one batch request and assign the returned ids in
    /// submission order
    pub async fn add_edges(&self, edges: Vec<Edge>, check_vertex: bool) -> HugeResult<Vec<Edge>> {
        if edges.is_empty() {
            return Ok(edges);
        }
        for edge in &edges {
            check_new_edge(edge)?;
        }
        let batch = self.edges.create_batch(&edges, check_vertex).await?;
        reconcile(edges, batch)
    }

    pub async fn get_edge(&self, id: impl Into<Id>) -> HugeResult<Edge> {
        self.edges.get(&id.into()).await
    }

    /// At most `limit` edges, `-1` for all of them
    pub async fn list_edges(&self, limit: i64) -> HugeResult<Vec<Edge>> {
        self.edges.list(limit).await
    }

    pub async fn remove_edge(&self, id: impl Into<Id>) -> HugeResult<()> {
        self.edges.delete(&id.into()).await
    }

    pub async fn append_edge(&self, edge: &Edge) -> HugeResult<Edge> {
        let id = stored_id(edge.id(), "edge")?;
        self.edges.append(id, edge).await
    }

    pub async fn eliminate_edge(&self, edge: &Edge) -> HugeResult<Edge> {
        let id = stored_id(edge.id(), "edge")?;
        self.edges.eliminate(id, edge).await
    }
}

fn check_new_edge(edge: &Edge) -> HugeResult<()> {
    if edge.id().is_some() {
        return Err(HugeError::Client(format!(
            "Not allowed to set id for edge '{}', it's generated by the server",
            edge
        )));
    }
    if edge.source_id().is_none() || edge.target_id().is_none() {
        return Err(HugeError::Client(format!(
            "The source and target vertex of edge '{}' must be set",
            edge
        )));
    }
    Ok(())
}

fn stored_id<'a>(id: Option<&'a Id>, kind: &str) -> HugeResult<&'a Id> {
    id.ok_or_else(|| {
        HugeError::InvalidOperation(format!("The {} to update must have an id", kind))
    })
}
