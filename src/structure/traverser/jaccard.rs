//! Jaccard similarity requests

use serde::Serialize;

use crate::error::{HugeError, HugeResult};
use crate::structure::graph::Id;
use crate::structure::traverser::{check_capacity, EdgeStep, EdgeStepBuilder, DEFAULT_CAPACITY};

/// Body of a `POST traversers/jaccardsimilarity`: the `top` vertices most
/// similar to `vertex`, reached through `step`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JaccardSimilarityRequest {
    pub vertex: Id,
    pub step: EdgeStep,
    pub top: i64,
    pub capacity: i64,
}

impl JaccardSimilarityRequest {
    pub fn builder() -> JaccardSimilarityRequestBuilder {
        JaccardSimilarityRequestBuilder::default()
    }
}

/// Mutable builder for [`JaccardSimilarityRequest`]
///
/// ```
/// use hugegraph_client::{Direction, JaccardSimilarityRequest};
///
/// let mut builder = JaccardSimilarityRequest::builder();
/// builder.vertex("1:marko").top(5);
/// builder.step().direction(Direction::Out).labels(["knows"]);
/// let request = builder.build().unwrap();
/// assert_eq!(request.top, 5);
/// ```
#[derive(Debug, Clone)]
pub struct JaccardSimilarityRequestBuilder {
    vertex: Option<Id>,
    step: EdgeStepBuilder,
    top: i64,
    capacity: i64,
}

impl Default for JaccardSimilarityRequestBuilder {
    fn default() -> Self {
        Self {
            vertex: None,
            step: EdgeStepBuilder::default(),
            top: 10,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl JaccardSimilarityRequestBuilder {
    pub fn vertex(&mut self, vertex: impl Into<Id>) -> &mut Self {
        self.vertex = Some(vertex.into());
        self
    }

    /// Start configuring the edge step from scratch
    pub fn step(&mut self) -> &mut EdgeStepBuilder {
        self.step = EdgeStepBuilder::default();
        &mut self.step
    }

    pub fn top(&mut self, top: i64) -> &mut Self {
        self.top = top;
        self
    }

    /// Maximum number of vertices visited, `-1` for no limit
    pub fn capacity(&mut self, capacity: i64) -> &mut Self {
        self.capacity = capacity;
        self
    }

    pub fn build(&self) -> HugeResult<JaccardSimilarityRequest> {
        let vertex = self
            .vertex
            .clone()
            .ok_or_else(|| HugeError::Client("The vertex can't be null".to_string()))?;
        let step = self.step.build()?;
        check_capacity(self.capacity)?;
        if self.top < 0 {
            return Err(HugeError::Client(format!(
                "The top must be >= 0, but got: {}",
                self.top
            )));
        }
        Ok(JaccardSimilarityRequest {
            vertex,
            step,
            top: self.top,
            capacity: self.capacity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure::constant::Direction;
    use serde_json::json;

    #[test]
    fn test_defaults_and_wire_format() {
        let mut builder = JaccardSimilarityRequest::builder();
        builder.vertex("1:marko");
        let request = builder.build().unwrap();
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "vertex": "1:marko",
                "step": {
                    "direction": "BOTH",
                    "labels": [],
                    "properties": {},
                    "degree": 10000,
                    "skip_degree": 0
                },
                "top": 10,
                "capacity": 10000000
            })
        );
    }

    #[test]
    fn test_vertex_is_required() {
        let builder = JaccardSimilarityRequest::builder();
        let err = builder.build().unwrap_err();
        assert!(err.to_string().contains("vertex"));
    }

    #[test]
    fn test_capacity_and_top_rules() {
        let mut builder = JaccardSimilarityRequest::builder();
        builder.vertex(1);

        assert!(builder.capacity(0).build().is_err());
        assert!(builder.capacity(-2).build().is_err());
        assert!(builder.capacity(-1).build().is_ok());
        assert!(builder.capacity(100).top(0).build().is_ok());
        assert!(builder.top(-1).build().is_err());
    }

    #[test]
    fn test_step_is_validated() {
        let mut builder = JaccardSimilarityRequest::builder();
        builder.vertex(1);
        builder.step().direction(Direction::Out).degree(0);
        assert!(matches!(builder.build(), Err(HugeError::Client(_))));

        builder.step().direction(Direction::In).degree(20);
        let request = builder.build().unwrap();
        assert_eq!(request.step.direction, Direction::In);
        assert_eq!(request.step.degree, 20);
    }
}
