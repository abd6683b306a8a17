//! HugeGraph client: Rust SDK for the HugeGraph graph database
//!
//! Layers, bottom up:
//!
//! - **`transport`**: the HTTP collaborator. [`RestClient`] talks to a
//!   running server through `reqwest`; [`MockTransport`] replays scripted
//!   responses for tests and offline use.
//! - **`api`**: one type per REST resource (schema, vertices, edges,
//!   traversers) that knows paths, verbs and query parameters.
//! - **`driver`**: [`HugeClient`] and its managers: [`SchemaManager`]
//!   (fluent schema builders), [`GraphManager`] (vertex/edge mutation and
//!   batch creation), [`TraverserManager`].
//! - **`structure`**: schema elements, graph elements and request bodies.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hugegraph_client::{ClientConfig, HugeClient, Vertex};
//!
//! #[tokio::main]
//! async fn main() -> hugegraph_client::HugeResult<()> {
//!     let client = HugeClient::open(&ClientConfig::from_env()?)?;
//!
//!     let schema = client.schema();
//!     schema.property_key("name").as_text().if_not_exist().create().await?;
//!     schema.property_key("age").as_int().if_not_exist().create().await?;
//!     schema
//!         .vertex_label("person")
//!         .properties(["name", "age"])
//!         .primary_keys(["name"])
//!         .if_not_exist()
//!         .create()
//!         .await?;
//!     schema
//!         .edge_label("knows")
//!         .link("person", "person")
//!         .if_not_exist()
//!         .create()
//!         .await?;
//!
//!     let graph = client.graph();
//!     let marko = graph
//!         .add_vertex(Vertex::new("person").property("name", "marko").property("age", 29))
//!         .await?;
//!     let vadas = graph
//!         .add_vertex(Vertex::new("person").property("name", "vadas").property("age", 27))
//!         .await?;
//!     let knows = marko
//!         .add_edge(&client, "knows", &vadas, Vec::<(String, serde_json::Value)>::new())
//!         .await?;
//!     println!("Created {}", knows);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod driver;
pub mod error;
pub mod serializer;
pub mod structure;
pub mod transport;

/// Crate version, sent in the default User-Agent
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================
// Client and managers
// ============================================================

pub use config::ClientConfig;
pub use driver::{GraphManager, HugeClient, SchemaManager, SessionId, TraverserManager};
pub use error::{HugeError, HugeResult, ServerError};
pub use transport::{MockTransport, RestClient, Transport};

// ============================================================
// Schema and graph structures
// ============================================================

pub use structure::constant::{
    Cardinality, DataType, Direction, Frequency, HugeType, IdStrategy, IndexType,
};
pub use structure::graph::{
    CardinalityLookup, Edge, GraphElement, Id, Path, PathObject, PropertyMap, Vertex,
};
pub use structure::schema::{
    EdgeLabel, EdgeLabelBuilder, IndexLabel, IndexLabelBuilder, PropertyKey, PropertyKeyBuilder,
    SchemaElement, VertexLabel, VertexLabelBuilder,
};
pub use structure::traverser::{
    EdgeStep, EdgeStepBuilder, JaccardSimilarityRequest, JaccardSimilarityRequestBuilder,
};
