//! REST resources of the HugeGraph server
//!
//! One API type per resource. Each knows its path, verbs and query
//! parameters and turns responses into typed values; none of them hold
//! state beyond the transport handle and the graph name.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::sync::Arc;
use tracing::debug;

use crate::error::HugeResult;
use crate::transport::{RestRequest, RestResponse, Transport};

pub mod graph;
pub mod schema;
pub mod traverser;

pub use graph::{EdgeApi, VertexApi};
pub use schema::SchemaApi;
pub use traverser::JaccardSimilarityApi;

/// Header marking a batch request body
pub const BATCH_ENCODING: &str = "gzip";

/// Characters escaped in a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// `graphs/{graph}/{section}/{resource}` with the graph name encoded
pub(crate) fn resource_path(graph: &str, section: &str, resource: &str) -> String {
    format!("graphs/{}/{}/{}", encode_segment(graph), section, resource)
}

/// Send `request` and turn a non-2xx answer into a server error
pub(crate) async fn execute(
    transport: &Arc<dyn Transport>,
    request: RestRequest,
) -> HugeResult<RestResponse> {
    let method = request.method;
    let path = request.path.clone();
    let response = transport.request(request).await?;
    debug!("{} {} -> {}", method, path, response.status);
    response.check_status()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_encoding() {
        assert_eq!(encode_segment("person"), "person");
        assert_eq!(encode_segment("\"1:marko\""), "%221%3Amarko%22");
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
    }

    #[test]
    fn test_resource_path() {
        assert_eq!(
            resource_path("hugegraph", "schema", "propertykeys"),
            "graphs/hugegraph/schema/propertykeys"
        );
    }
}
