//! `graphs/{graph}/schema/{propertykeys|vertexlabels|edgelabels|indexlabels}`

use std::marker::PhantomData;
use std::sync::Arc;

use crate::api::{encode_segment, execute, resource_path};
use crate::error::HugeResult;
use crate::structure::schema::SchemaElement;
use crate::transport::{RestRequest, Transport};

/// CRUD on one kind of schema element
pub struct SchemaApi<T> {
    transport: Arc<dyn Transport>,
    path: String,
    _element: PhantomData<fn() -> T>,
}

impl<T> Clone for SchemaApi<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            path: self.path.clone(),
            _element: PhantomData,
        }
    }
}

impl<T: SchemaElement> SchemaApi<T> {
    pub fn new(transport: Arc<dyn Transport>, graph: &str) -> Self {
        Self {
            transport,
            path: resource_path(graph, "schema", T::TYPE.plural()),
            _element: PhantomData,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    fn element_path(&self, name: &str) -> String {
        format!("{}/{}", self.path, encode_segment(name))
    }

    pub async fn create(&self, element: &T) -> HugeResult<T> {
        let body = serde_json::to_value(element)?;
        let response = execute(&self.transport, RestRequest::post(&self.path, body)).await?;
        response.read_object()
    }

    pub async fn append(&self, element: &T) -> HugeResult<T> {
        self.update(element, "append").await
    }

    pub async fn eliminate(&self, element: &T) -> HugeResult<T> {
        self.update(element, "eliminate").await
    }

    async fn update(&self, element: &T, action: &str) -> HugeResult<T> {
        let body = serde_json::to_value(element)?;
        let request =
            RestRequest::put(self.element_path(element.name()), body).with_param("action", action);
        let response = execute(&self.transport, request).await?;
        response.read_object()
    }

    pub async fn get(&self, name: &str) -> HugeResult<T> {
        let response = execute(&self.transport, RestRequest::get(self.element_path(name))).await?;
        response.read_object()
    }

    /// Like [`get`](Self::get), but a 404 yields `None`
    pub async fn find(&self, name: &str) -> HugeResult<Option<T>> {
        match self.get(name).await {
            Ok(element) => Ok(Some(element)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn list(&self) -> HugeResult<Vec<T>> {
        let response = execute(&self.transport, RestRequest::get(&self.path)).await?;
        response.read_list(T::TYPE.plural())
    }

    pub async fn delete(&self, name: &str) -> HugeResult<()> {
        execute(&self.transport, RestRequest::delete(self.element_path(name))).await?;
        Ok(())
    }
}
