//! TraverserManager: server-side traversal algorithms

use indexmap::IndexMap;
use std::sync::Arc;

use crate::api::JaccardSimilarityApi;
use crate::error::HugeResult;
use crate::structure::constant::Direction;
use crate::structure::graph::Id;
use crate::structure::traverser::JaccardSimilarityRequest;
use crate::transport::Transport;

#[derive(Clone)]
pub struct TraverserManager {
    jaccard: JaccardSimilarityApi,
}

impl TraverserManager {
    pub fn new(transport: Arc<dyn Transport>, graph: &str) -> Self {
        Self {
            jaccard: JaccardSimilarityApi::new(transport, graph),
        }
    }

    /// Jaccard similarity of the neighbours of `vertex` and `other`
    pub async fn jaccard_similarity(
        &self,
        vertex: impl Into<Id>,
        other: impl Into<Id>,
        direction: Direction,
        label: Option<&str>,
        degree: i64,
    ) -> HugeResult<f64> {
        self.jaccard
            .get(&vertex.into(), &other.into(), direction, label, degree)
            .await
    }

    /// Vertices most similar to `request.vertex` with their scores
    pub async fn jaccard_similar(
        &self,
        request: &JaccardSimilarityRequest,
    ) -> HugeResult<IndexMap<String, f64>> {
        self.jaccard.post(request).await
    }
}
