//! Client configuration

use std::time::Duration;

use crate::error::{HugeError, HugeResult};

pub const ENV_URL: &str = "HUGEGRAPH_URL";
pub const ENV_GRAPH: &str = "HUGEGRAPH_GRAPH";
pub const ENV_TIMEOUT_SECS: &str = "HUGEGRAPH_TIMEOUT_SECS";

/// Connection settings for a [`HugeClient`](crate::HugeClient)
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the HugeGraph server
    pub url: String,
    /// Graph name, used in every request path
    pub graph: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:8080".to_string(),
            graph: "hugegraph".to_string(),
            timeout: Duration::from_secs(20),
            user_agent: format!("hugegraph-client-rs/{}", crate::VERSION),
        }
    }
}

impl ClientConfig {
    pub fn new(url: impl Into<String>, graph: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            graph: graph.into(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `HUGEGRAPH_URL`, `HUGEGRAPH_GRAPH` and
    /// `HUGEGRAPH_TIMEOUT_SECS` when set
    pub fn from_env() -> HugeResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> HugeResult<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_URL) {
            config.url = url;
        }
        if let Some(graph) = lookup(ENV_GRAPH) {
            config.graph = graph;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                HugeError::Client(format!(
                    "{} must be a number of seconds, but got: '{}'",
                    ENV_TIMEOUT_SECS, secs
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_lookup_overrides_defaults() {
        let env: HashMap<&str, &str> = [
            (ENV_URL, "http://10.0.0.5:18080"),
            (ENV_GRAPH, "social"),
            (ENV_TIMEOUT_SECS, "5"),
        ]
        .into_iter()
        .collect();

        let config = ClientConfig::from_lookup(|k| env.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.url, "http://10.0.0.5:18080");
        assert_eq!(config.graph, "social");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_lookup_rejects_bad_timeout() {
        let result = ClientConfig::from_lookup(|k| {
            (k == ENV_TIMEOUT_SECS).then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(HugeError::Client(_))));
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("http://localhost:8080", "hugegraph");
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert!(config.user_agent.starts_with("hugegraph-client-rs/"));
    }
}
