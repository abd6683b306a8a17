//! Graph elements: vertices, edges, their ids and property bags, and paths

pub mod edge;
pub mod id;
pub mod path;
pub mod property;
pub mod vertex;

pub use edge::Edge;
pub use id::Id;
pub use path::{Path, PathObject};
pub use property::{merge_property, CardinalityLookup, GraphElement, PropertyMap};
pub use vertex::Vertex;
