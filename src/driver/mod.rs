//! Drivers: the user-facing managers built on top of the API layer

mod batch;
pub mod client;
pub mod graph;
pub mod schema;
pub mod session;
pub mod traverser;

pub use client::HugeClient;
pub use graph::GraphManager;
pub use schema::SchemaManager;
pub use session::SessionId;
pub use traverser::TraverserManager;
