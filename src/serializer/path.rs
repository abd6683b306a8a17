//! Decoding of traversal paths
//!
//! A path object carries a `type` tag only when it is a graph element, so
//! the decoder dispatches on that field by hand and keeps anything untagged
//! as a plain JSON value.

use serde_json::Value;

use crate::error::{HugeError, HugeResult};
use crate::structure::graph::edge::EDGE_TYPE;
use crate::structure::graph::vertex::VERTEX_TYPE;
use crate::structure::graph::{Edge, Path, PathObject, Vertex};

/// Decode one `{"labels": [...], "objects": [...]}` node
pub fn decode_path(node: &Value) -> HugeResult<Path> {
    let labels = match node.get("labels") {
        Some(Value::Array(labels)) => labels
            .iter()
            .map(|label| match label {
                Value::String(s) => Ok(s.clone()),
                _ => Err(HugeError::expect_field("labels", node)),
            })
            .collect::<HugeResult<Vec<_>>>()?,
        _ => return Err(HugeError::expect_field("labels", node)),
    };
    let objects = match node.get("objects") {
        Some(Value::Array(objects)) => objects
            .iter()
            .map(decode_object)
            .collect::<HugeResult<Vec<_>>>()?,
        _ => return Err(HugeError::expect_field("objects", node)),
    };
    Ok(Path::new(labels, objects))
}

/// Decode the list of paths stored under `key`, e.g. `{"paths": [...]}`
pub fn decode_paths(node: &Value, key: &str) -> HugeResult<Vec<Path>> {
    match node.get(key) {
        Some(Value::Array(paths)) => paths.iter().map(decode_path).collect(),
        _ => Err(HugeError::expect_field(key, node)),
    }
}

fn decode_object(object: &Value) -> HugeResult<PathObject> {
    let element_type = match object.get("type") {
        None => return Ok(PathObject::Scalar(object.clone())),
        Some(Value::String(t)) => t.as_str(),
        Some(other) => {
            return Err(HugeError::InvalidResponse(format!(
                "Invalid object type {} in path",
                other
            )))
        }
    };
    match element_type {
        VERTEX_TYPE => {
            let vertex: Vertex = serde_json::from_value(object.clone())
                .map_err(|e| HugeError::InvalidResponse(format!("Invalid vertex in path: {}", e)))?;
            Ok(PathObject::Vertex(vertex))
        }
        EDGE_TYPE => {
            let edge: Edge = serde_json::from_value(object.clone())
                .map_err(|e| HugeError::InvalidResponse(format!("Invalid edge in path: {}", e)))?;
            Ok(PathObject::Edge(edge))
        }
        other => Err(HugeError::InvalidResponse(format!(
            "Invalid object type '{}' in path",
            other
        ))),
    }
}
