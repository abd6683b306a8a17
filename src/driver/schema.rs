//! SchemaManager: builders and CRUD for schema elements of one graph

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::SchemaApi;
use crate::error::HugeResult;
use crate::structure::constant::{Cardinality, HugeType};
use crate::structure::schema::{
    EdgeLabel, EdgeLabelBuilder, IndexLabel, IndexLabelBuilder, PropertyKey, PropertyKeyBuilder,
    SchemaElement, VertexLabel, VertexLabelBuilder,
};
use crate::transport::Transport;

/// Entry point for schema definitions.
///
/// ```no_run
/// # use hugegraph_client::{HugeClient, ClientConfig};
/// # async fn run() -> hugegraph_client::HugeResult<()> {
/// let client = HugeClient::open(&ClientConfig::default())?;
/// let schema = client.schema();
/// schema.property_key("name").as_text().if_not_exist().create().await?;
/// schema
///     .vertex_label("person")
///     .properties(["name"])
///     .primary_keys(["name"])
///     .create()
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct SchemaManager {
    property_keys: SchemaApi<PropertyKey>,
    vertex_labels: SchemaApi<VertexLabel>,
    edge_labels: SchemaApi<EdgeLabel>,
    index_labels: SchemaApi<IndexLabel>,
}

impl SchemaManager {
    pub fn new(transport: Arc<dyn Transport>, graph: &str) -> Self {
        Self {
            property_keys: SchemaApi::new(Arc::clone(&transport), graph),
            vertex_labels: SchemaApi::new(Arc::clone(&transport), graph),
            edge_labels: SchemaApi::new(Arc::clone(&transport), graph),
            index_labels: SchemaApi::new(transport, graph),
        }
    }

    // ============================================================
    // Builders
    // ============================================================

    pub fn property_key(&self, name: impl Into<String>) -> PropertyKeyBuilder {
        PropertyKeyBuilder::new(name, self.clone())
    }

    pub fn vertex_label(&self, name: impl Into<String>) -> VertexLabelBuilder {
        VertexLabelBuilder::new(name, self.clone())
    }

    pub fn edge_label(&self, name: impl Into<String>) -> EdgeLabelBuilder {
        EdgeLabelBuilder::new(name, self.clone())
    }

    pub fn index_label(&self, name: impl Into<String>) -> IndexLabelBuilder {
        IndexLabelBuilder::new(name, self.clone())
    }

    // ============================================================
    // Property keys
    // ============================================================

    pub async fn add_property_key(&self, property_key: &PropertyKey) -> HugeResult<PropertyKey> {
        property_key.validate()?;
        let created = self.property_keys.create(property_key).await?;
        log_created(&created);
        Ok(created)
    }

    pub async fn get_property_key(&self, name: &str) -> HugeResult<PropertyKey> {
        self.property_keys.get(name).await
    }

    pub async fn find_property_key(&self, name: &str) -> HugeResult<Option<PropertyKey>> {
        self.property_keys.find(name).await
    }

    pub async fn list_property_keys(&self) -> HugeResult<Vec<PropertyKey>> {
        self.property_keys.list().await
    }

    pub async fn remove_property_key(&self, name: &str) -> HugeResult<()> {
        self.property_keys.delete(name).await?;
        info!("Removed {} '{}'", HugeType::PropertyKey, name);
        Ok(())
    }

    /// Declared cardinality of every property key, for
    /// [`GraphElement::set_property_with`](crate::GraphElement::set_property_with)
    pub async fn property_key_cardinalities(&self) -> HugeResult<HashMap<String, Cardinality>> {
        let keys = self.list_property_keys().await?;
        Ok(keys
            .into_iter()
            .map(|pk| (pk.name().to_string(), pk.cardinality()))
            .collect())
    }

    // ============================================================
    // Vertex labels
    // ============================================================

    pub async fn add_vertex_label(&self, vertex_label: &VertexLabel) -> HugeResult<VertexLabel> {
        vertex_label.validate()?;
        let created = self.vertex_labels.create(vertex_label).await?;
        log_created(&created);
        Ok(created)
    }

    pub async fn append_vertex_label(&self, vertex_label: &VertexLabel) -> HugeResult<VertexLabel> {
        let updated = self.vertex_labels.append(vertex_label).await?;
        info!("Appended to {} '{}'", HugeType::VertexLabel, updated.name());
        Ok(updated)
    }

    pub async fn eliminate_vertex_label(&self, vertex_label: &VertexLabel) -> HugeResult<VertexLabel> {
        let updated = self.vertex_labels.eliminate(vertex_label).await?;
        info!("Eliminated from {} '{}'", HugeType::VertexLabel, updated.name());
        Ok(updated)
    }

    pub async fn get_vertex_label(&self, name: &str) -> HugeResult<VertexLabel> {
        self.vertex_labels.get(name).await
    }

    pub async fn find_vertex_label(&self, name: &str) -> HugeResult<Option<VertexLabel>> {
        self.vertex_labels.find(name).await
    }

    pub async fn list_vertex_labels(&self) -> HugeResult<Vec<VertexLabel>> {
        self.vertex_labels.list().await
    }

    pub async fn remove_vertex_label(&self, name: &str) -> HugeResult<()> {
        self.vertex_labels.delete(name).await?;
        info!("Removed {} '{}'", HugeType::VertexLabel, name);
        Ok(())
    }

    // ============================================================
    // Edge labels
    // ============================================================

    pub async fn add_edge_label(&self, edge_label: &EdgeLabel) -> HugeResult<EdgeLabel> {
        edge_label.validate()?;
        let created = self.edge_labels.create(edge_label).await?;
        log_created(&created);
        Ok(created)
    }

    pub async fn append_edge_label(&self, edge_label: &EdgeLabel) -> HugeResult<EdgeLabel> {
        let updated = self.edge_labels.append(edge_label).await?;
        info!("Appended to {} '{}'", HugeType::EdgeLabel, updated.name());
        Ok(updated)
    }

    pub async fn eliminate_edge_label(&self, edge_label: &EdgeLabel) -> HugeResult<EdgeLabel> {
        let updated = self.edge_labels.eliminate(edge_label).await?;
        info!("Eliminated from {} '{}'", HugeType::EdgeLabel, updated.name());
        Ok(updated)
    }

    pub async fn get_edge_label(&self, name: &str) -> HugeResult<EdgeLabel> {
        self.edge_labels.get(name).await
    }

    pub async fn find_edge_label(&self, name: &str) -> HugeResult<Option<EdgeLabel>> {
        self.edge_labels.find(name).await
    }

    pub async fn list_edge_labels(&self) -> HugeResult<Vec<EdgeLabel>> {
        self.edge_labels.list().await
    }

    pub async fn remove_edge_label(&self, name: &str) -> HugeResult<()> {
        self.edge_labels.delete(name).await?;
        info!("Removed {} '{}'", HugeType::EdgeLabel, name);
        Ok(())
    }

    // ============================================================
    // Index labels
    // ============================================================

    /// Create `index_label`, then record its name in the `index_names` of
    /// the vertex or edge label it is built on.
    ///
    /// The two steps are separate requests. When the second one fails the
    /// index already exists on the server and the error is returned as is.
    pub async fn add_index_label(&self, index_label: &IndexLabel) -> HugeResult<IndexLabel> {
        index_label.validate()?;
        let created = self.index_labels.create(index_label).await?;
        log_created(&created);
        if let Err(e) = self.attach_index(index_label).await {
            warn!(
                "Index label '{}' was created but could not be attached to {:?} '{}': {}",
                index_label.name(),
                index_label.base_type(),
                index_label.base_value().unwrap_or_default(),
                e
            );
            return Err(e);
        }
        Ok(created)
    }

    async fn attach_index(&self, index_label: &IndexLabel) -> HugeResult<()> {
        let owner = index_label.base_value().unwrap_or_default();
        match index_label.base_type() {
            Some(HugeType::VertexLabel) => {
                let mut label = self.vertex_labels.get(owner).await?;
                label.add_index_name(index_label.name());
                self.append_vertex_label(&label).await?;
            }
            Some(HugeType::EdgeLabel) => {
                let mut label = self.edge_labels.get(owner).await?;
                label.add_index_name(index_label.name());
                self.append_edge_label(&label).await?;
            }
            _ => {}
        }
        Ok(())
    }

    pub async fn get_index_label(&self, name: &str) -> HugeResult<IndexLabel> {
        self.index_labels.get(name).await
    }

    pub async fn find_index_label(&self, name: &str) -> HugeResult<Option<IndexLabel>> {
        self.index_labels.find(name).await
    }

    pub async fn list_index_labels(&self) -> HugeResult<Vec<IndexLabel>> {
        self.index_labels.list().await
    }

    pub async fn remove_index_label(&self, name: &str) -> HugeResult<()> {
        self.index_labels.delete(name).await?;
        info!("Removed {} '{}'", HugeType::IndexLabel, name);
        Ok(())
    }
}

fn log_created<T: SchemaElement>(element: &T) {
    info!("Created {} '{}'", T::TYPE, element.name());
}
