//! Positional id assignment after a batch create

use crate::api::graph::BatchIds;
use crate::error::{HugeError, HugeResult};
use crate::structure::graph::{Edge, Id, Vertex};

/// Element that receives its id from the server
pub(crate) trait Identified {
    const KIND: &'static str;

    fn assign_id(&mut self, id: Id);
}

impl Identified for Vertex {
    const KIND: &'static str = "vertices";

    fn assign_id(&mut self, id: Id) {
        self.set_id(id);
    }
}

impl Identified for Edge {
    const KIND: &'static str = "edges";

    fn assign_id(&mut self, id: Id) {
        self.set_id(id);
    }
}

/// The i-th returned id belongs to the i-th submitted element; any count
/// mismatch fails the whole batch
pub(crate) fn reconcile<T: Identified>(mut elements: Vec<T>, batch: BatchIds) -> HugeResult<Vec<T>> {
    if batch.ids.len() != elements.len() {
        return Err(HugeError::NotAllCreated {
            kind: T::KIND,
            expected: elements.len(),
            actual: batch.ids.len(),
            response: batch.response,
        });
    }
    for (element, id) in elements.iter_mut().zip(batch.ids) {
        element.assign_id(id);
    }
    Ok(elements)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(ids: &[&str]) -> BatchIds {
        BatchIds {
            ids: ids.iter().map(|id| Id::from(*id)).collect(),
            response: format!("{:?}", ids),
        }
    }

    #[test]
    fn test_ids_assigned_in_order() {
        let vertices = vec![Vertex::new("person"), Vertex::new("software")];
        let vertices = reconcile(vertices, batch(&["1:marko", "2:lop"])).unwrap();
        assert_eq!(vertices[0].id(), Some(&Id::from("1:marko")));
        assert_eq!(vertices[1].id(), Some(&Id::from("2:lop")));
    }

    #[test]
    fn test_count_mismatch() {
        let edges = vec![Edge::new("knows"), Edge::new("knows"), Edge::new("created")];
        let err = reconcile(edges, batch(&["a", "b"])).unwrap_err();
        match &err {
            HugeError::NotAllCreated {
                kind,
                expected,
                actual,
                ..
            } => {
                assert_eq!(*kind, "edges");
                assert_eq!((*expected, *actual), (3, 2));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(
            err.to_string(),
            "Not all edges are successfully created, expect '3', the actual is '2'"
        );
    }
}
