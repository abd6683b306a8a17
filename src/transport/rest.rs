//! RestClient: network transport for a running HugeGraph server
//!
//! Connects via HTTP to the HugeGraph REST API.

use async_trait::async_trait;
use flate2::write::GzEncoder;
use flate2::Compression;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::HugeResult;
use crate::transport::{Method, RestRequest, RestResponse, Transport};

/// Characters escaped in query-string keys and values
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// HTTP transport backed by `reqwest`.
pub struct RestClient {
    base_url: String,
    http_client: Client,
}

impl RestClient {
    /// Create a RestClient with default timeouts.
    ///
    /// # Example
    /// ```no_run
    /// # use hugegraph_client::transport::RestClient;
    /// let client = RestClient::new("http://localhost:8080").unwrap();
    /// ```
    pub fn new(base_url: &str) -> HugeResult<Self> {
        Self::with_config(&ClientConfig::new(base_url, ""))
    }

    pub fn with_config(config: &ClientConfig) -> HugeResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            base_url: config.url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, request: &RestRequest) -> String {
        let mut url = format!("{}/{}", self.base_url, request.path.trim_start_matches('/'));
        for (i, (key, value)) in request.params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.extend(utf8_percent_encode(key, QUERY));
            url.push('=');
            url.extend(utf8_percent_encode(value, QUERY));
        }
        url
    }
}

/// Gzip a JSON body for requests sent with `Content-Encoding: gzip`
fn compress(body: &serde_json::Value) -> HugeResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    serde_json::to_writer(&mut encoder, body)?;
    Ok(encoder.finish()?)
}

#[async_trait]
impl Transport for RestClient {
    async fn request(&self, request: RestRequest) -> HugeResult<RestResponse> {
        let url = self.url(&request);
        let mut builder = match request.method {
            Method::Get => self.http_client.get(&url),
            Method::Post => self.http_client.post(&url),
            Method::Put => self.http_client.put(&url),
            Method::Delete => self.http_client.delete(&url),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let gzip = request
            .header("Content-Encoding")
            .is_some_and(|encoding| encoding.eq_ignore_ascii_case("gzip"));
        if let Some(body) = &request.body {
            builder = if gzip {
                builder
                    .header(CONTENT_TYPE, "application/json")
                    .body(compress(body)?)
            } else {
                builder.json(body)
            };
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(RestResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_path_and_encodes_params() {
        let client = RestClient::new("http://localhost:8080/").unwrap();
        let request = RestRequest::get("graphs/hugegraph/traversers/jaccardsimilarity")
            .with_param("vertex", "\"person:marko\"")
            .with_param("max_degree", 10000);

        assert_eq!(
            client.url(&request),
            "http://localhost:8080/graphs/hugegraph/traversers/jaccardsimilarity\
             ?vertex=%22person%3Amarko%22&max_degree=10000"
        );
    }

    #[test]
    fn test_compressed_body_inflates_back() {
        use flate2::read::GzDecoder;
        use std::io::Read;

        let body = serde_json::json!([{"label": "person", "properties": {"name": "marko"}}]);
        let compressed = compress(&body).unwrap();
        let mut inflated = String::new();
        GzDecoder::new(compressed.as_slice())
            .read_to_string(&mut inflated)
            .unwrap();
        assert_eq!(serde_json::from_str::<serde_json::Value>(&inflated).unwrap(), body);
    }

    #[test]
    fn test_url_without_params() {
        let client = RestClient::new("http://localhost:8080").unwrap();
        let request = RestRequest::delete("/graphs/hugegraph/graph/vertices/1");
        assert_eq!(
            client.url(&request),
            "http://localhost:8080/graphs/hugegraph/graph/vertices/1"
        );
    }
}
