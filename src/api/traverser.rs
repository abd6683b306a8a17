//! `graphs/{graph}/traversers/jaccardsimilarity`

use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;

use crate::api::{execute, resource_path};
use crate::error::{HugeError, HugeResult};
use crate::structure::constant::Direction;
use crate::structure::graph::Id;
use crate::structure::traverser::edge_step::check_degree;
use crate::structure::traverser::JaccardSimilarityRequest;
use crate::transport::{RestRequest, Transport};

const RESULT_KEY: &str = "jaccard_similarity";

#[derive(Clone)]
pub struct JaccardSimilarityApi {
    transport: Arc<dyn Transport>,
    path: String,
}

impl JaccardSimilarityApi {
    pub fn new(transport: Arc<dyn Transport>, graph: &str) -> Self {
        Self {
            transport,
            path: resource_path(graph, "traversers", "jaccardsimilarity"),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Similarity of the neighbourhoods of two vertices
    pub async fn get(
        &self,
        vertex: &Id,
        other: &Id,
        direction: Direction,
        label: Option<&str>,
        degree: i64,
    ) -> HugeResult<f64> {
        check_degree(degree)?;
        let mut request = RestRequest::get(&self.path)
            .with_param("vertex", vertex.to_json_string())
            .with_param("other", other.to_json_string())
            .with_param("direction", direction);
        if let Some(label) = label {
            request = request.with_param("label", label);
        }
        request = request.with_param("max_degree", degree);

        let response = execute(&self.transport, request).await?;
        let node = response.read_json()?;
        node.get(RESULT_KEY)
            .and_then(Value::as_f64)
            .ok_or_else(|| HugeError::expect_field(RESULT_KEY, &node))
    }

    /// The vertices most similar to `request.vertex`, best first, keyed by
    /// id in string form
    pub async fn post(&self, request: &JaccardSimilarityRequest) -> HugeResult<IndexMap<String, f64>> {
        let body = serde_json::to_value(request)?;
        let response = execute(&self.transport, RestRequest::post(&self.path, body)).await?;
        let mut node = response.read_json()?;
        node.get_mut(RESULT_KEY)
            .map(Value::take)
            .filter(Value::is_object)
            .and_then(|scores| serde_json::from_value(scores).ok())
            .ok_or_else(|| HugeError::expect_field(RESULT_KEY, response.content()))
    }
}
