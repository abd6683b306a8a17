//! Error types for the HugeGraph client

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when using the HugeGraph client
#[derive(Error, Debug)]
pub enum HugeError {
    /// Local precondition violated, raised before any request is issued
    #[error("Client error: {0}")]
    Client(String),

    /// The server answered with a non-2xx status
    #[error(transparent)]
    Server(#[from] ServerError),

    /// The response body does not have the shape the decoder expects
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// A batch create returned fewer (or more) ids than elements submitted
    #[error(
        "Not all {kind} are successfully created, expect '{expected}', the actual is '{actual}'"
    )]
    NotAllCreated {
        kind: &'static str,
        expected: usize,
        actual: usize,
        /// Raw response body, kept for diagnosis
        response: String,
    },

    /// Operation not valid for the current state of the object
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Transport could not produce a response
    #[error("Connection error: {0}")]
    Connection(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Local I/O failure, e.g. while compressing a request body
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A request body could not be encoded as JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type HugeResult<T> = Result<T, HugeError>;

impl HugeError {
    /// A response node lacks `field` (or has it with the wrong JSON type)
    pub fn expect_field(field: &str, node: impl fmt::Display) -> Self {
        HugeError::InvalidResponse(format!("Expect field '{}' in response: {}", field, node))
    }

    /// HTTP status of a server error, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            HugeError::Server(e) => Some(e.status),
            _ => None,
        }
    }

    /// Whether the server reported the requested resource as missing
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Error reported by the server in a non-2xx response.
///
/// The body is expected as `{"exception": ..., "message": ..., "cause": ...}`;
/// any field may be missing. When the body is not JSON at all, the raw text
/// becomes the message.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerError {
    pub status: u16,
    pub exception: Option<String>,
    pub message: String,
    cause: Option<ServerCause>,
}

#[derive(Deserialize)]
struct ErrorBody {
    exception: Option<String>,
    message: Option<String>,
    cause: Option<String>,
}

impl ServerError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            exception: None,
            message: message.into(),
            cause: None,
        }
    }

    /// Build from a response status and raw body
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let content = String::from_utf8_lossy(body).into_owned();
        match serde_json::from_slice::<ErrorBody>(body) {
            Ok(parsed) => Self {
                status,
                exception: parsed.exception,
                message: parsed.message.unwrap_or(content),
                cause: parsed
                    .cause
                    .filter(|c| !c.is_empty())
                    .map(ServerCause),
            },
            Err(_) => Self::new(status, content),
        }
    }

    /// Server-side stack trace, if the server sent one
    pub fn cause(&self) -> Option<&str> {
        self.cause.as_ref().map(|c| c.0.as_str())
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.exception {
            Some(exception) => write!(
                f,
                "Server error ({}): {}: {}",
                self.status, exception, self.message
            ),
            None => write!(f, "Server error ({}): {}", self.status, self.message),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_ref()
            .map(|c| c as &(dyn std::error::Error + 'static))
    }
}

/// The stack trace of a server exception, exposed only for diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct ServerCause(String);

impl fmt::Display for ServerCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ServerCause {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_server_error_extracts_all_fields() {
        let body = br#"{"exception": "class java.lang.IllegalArgumentException",
                        "message": "The property key 'age' has existed",
                        "cause": "at com.baidu.hugegraph..."}"#;
        let err = ServerError::from_response(400, body);

        assert_eq!(err.status, 400);
        assert_eq!(
            err.exception.as_deref(),
            Some("class java.lang.IllegalArgumentException")
        );
        assert_eq!(err.message, "The property key 'age' has existed");
        assert_eq!(err.cause(), Some("at com.baidu.hugegraph..."));
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("at com.baidu.hugegraph...".to_string())
        );
    }

    #[test]
    fn test_server_error_tolerates_missing_fields() {
        let err = ServerError::from_response(404, br#"{"message": "Not found"}"#);
        assert_eq!(err.exception, None);
        assert_eq!(err.message, "Not found");
        assert!(err.source().is_none());

        let err = ServerError::from_response(500, b"Internal Server Error");
        assert_eq!(err.message, "Internal Server Error");
        assert_eq!(err.to_string(), "Server error (500): Internal Server Error");
    }

    #[test]
    fn test_not_found_helper() {
        let err: HugeError = ServerError::new(404, "missing").into();
        assert!(err.is_not_found());
        assert_eq!(err.status(), Some(404));

        let err = HugeError::Client("bad".to_string());
        assert!(!err.is_not_found());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_io_error_converts() {
        let err: HugeError =
            std::io::Error::new(std::io::ErrorKind::WriteZero, "gzip stream closed").into();
        assert!(matches!(err, HugeError::Io(_)));
        assert_eq!(err.to_string(), "IO error: gzip stream closed");
    }

    #[test]
    fn test_not_all_created_message() {
        let err = HugeError::NotAllCreated {
            kind: "vertices",
            expected: 3,
            actual: 2,
            response: "[1,2]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Not all vertices are successfully created, expect '3', the actual is '2'"
        );
    }
}
