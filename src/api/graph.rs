//! `graphs/{graph}/graph/{vertices|edges}`

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::api::{encode_segment, execute, resource_path, BATCH_ENCODING};
use crate::error::HugeResult;
use crate::structure::constant::HugeType;
use crate::structure::graph::{Edge, Id, Vertex};
use crate::transport::{RestRequest, RestResponse, Transport};

/// Ids returned by a batch create, with the raw body for diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct BatchIds {
    pub ids: Vec<Id>,
    pub response: String,
}

/// Shared plumbing of the vertex and edge resources
#[derive(Clone)]
struct ElementApi {
    transport: Arc<dyn Transport>,
    path: String,
    list_key: &'static str,
}

impl ElementApi {
    fn new(transport: Arc<dyn Transport>, graph: &str, element: HugeType) -> Self {
        Self {
            transport,
            path: resource_path(graph, "graph", element.plural()),
            list_key: element.plural(),
        }
    }

    fn id_path(&self, id: &Id) -> String {
        format!("{}/{}", self.path, encode_segment(&id.to_json_string()))
    }

    async fn create<T: Serialize + DeserializeOwned>(&self, element: &T) -> HugeResult<T> {
        let body = serde_json::to_value(element)?;
        execute(&self.transport, RestRequest::post(&self.path, body))
            .await?
            .read_object()
    }

    async fn create_batch<T: Serialize>(
        &self,
        elements: &[T],
        params: &[(&str, String)],
    ) -> HugeResult<BatchIds> {
        let body = serde_json::to_value(elements)?;
        let mut request = RestRequest::post(format!("{}/batch", self.path), body)
            .with_header("Content-Encoding", BATCH_ENCODING);
        for (name, value) in params {
            request = request.with_param(*name, value);
        }
        let response = execute(&self.transport, request).await?;
        Ok(BatchIds {
            ids: response.read_object()?,
            response: response.content(),
        })
    }

    async fn update<T: Serialize + DeserializeOwned>(
        &self,
        id: &Id,
        element: &T,
        action: &str,
    ) -> HugeResult<T> {
        let body = serde_json::to_value(element)?;
        let request = RestRequest::put(self.id_path(id), body).with_param("action", action);
        execute(&self.transport, request).await?.read_object()
    }

    async fn get(&self, id: &Id) -> HugeResult<RestResponse> {
        execute(&self.transport, RestRequest::get(self.id_path(id))).await
    }

    async fn list<T: DeserializeOwned>(&self, limit: i64) -> HugeResult<Vec<T>> {
        let request = RestRequest::get(&self.path).with_param("limit", limit);
        execute(&self.transport, request)
            .await?
            .read_list(self.list_key)
    }

    async fn delete(&self, id: &Id) -> HugeResult<()> {
        execute(&self.transport, RestRequest::delete(self.id_path(id))).await?;
        Ok(())
    }
}

/// Vertex resource
#[derive(Clone)]
pub struct VertexApi {
    inner: ElementApi,
}

impl VertexApi {
    pub fn new(transport: Arc<dyn Transport>, graph: &str) -> Self {
        Self {
            inner: ElementApi::new(transport, graph, HugeType::Vertex),
        }
    }

    pub fn path(&self) -> &str {
        &self.inner.path
    }

    pub async fn create(&self, vertex: &Vertex) -> HugeResult<Vertex> {
        self.inner.create(vertex).await
    }

    /// POST to `vertices/batch`; the answer is the list of created ids
    pub async fn create_batch(&self, vertices: &[Vertex]) -> HugeResult<BatchIds> {
        self.inner.create_batch(vertices, &[]).await
    }

    pub async fn append(&self, id: &Id, vertex: &Vertex) -> HugeResult<Vertex> {
        self.inner.update(id, vertex, "append").await
    }

    pub async fn eliminate(&self, id: &Id, vertex: &Vertex) -> HugeResult<Vertex> {
        self.inner.update(id, vertex, "eliminate").await
    }

    pub async fn get(&self, id: &Id) -> HugeResult<Vertex> {
        self.inner.get(id).await?.read_object()
    }

    /// At most `limit` vertices, `-1` for all of them
    pub async fn list(&self, limit: i64) -> HugeResult<Vec<Vertex>> {
        self.inner.list(limit).await
    }

    pub async fn delete(&self, id: &Id) -> HugeResult<()> {
        self.inner.delete(id).await
    }
}

/// Edge resource
#[derive(Clone)]
pub struct EdgeApi {
    inner: ElementApi,
}

impl EdgeApi {
    pub fn new(transport: Arc<dyn Transport>, graph: &str) -> Self {
        Self {
            inner: ElementApi::new(transport, graph, HugeType::Edge),
        }
    }

    pub fn path(&self) -> &str {
        &self.inner.path
    }

    pub async fn create(&self, edge: &Edge) -> HugeResult<Edge> {
        self.inner.create(edge).await
    }

    /// POST to `edges/batch`; with `check_vertex` the server verifies that
    /// both ends of every edge exist
    pub async fn create_batch(&self, edges: &[Edge], check_vertex: bool) -> HugeResult<BatchIds> {
        self.inner
            .create_batch(edges, &[("checkVertex", check_vertex.to_string())])
            .await
    }

    pub async fn append(&self, id: &Id, edge: &Edge) -> HugeResult<Edge> {
        self.inner.update(id, edge, "append").await
    }

    pub async fn eliminate(&self, id: &Id, edge: &Edge) -> HugeResult<Edge> {
        self.inner.update(id, edge, "eliminate").await
    }

    pub async fn get(&self, id: &Id) -> HugeResult<Edge> {
        self.inner.get(id).await?.read_object()
    }

    /// At most `limit` edges, `-1` for all of them
    pub async fn list(&self, limit: i64) -> HugeResult<Vec<Edge>> {
        self.inner.list(limit).await
    }

    pub async fn delete(&self, id: &Id) -> HugeResult<()> {
        self.inner.delete(id).await
    }
}
