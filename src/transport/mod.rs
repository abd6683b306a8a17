//! Transport: the HTTP collaborator every API call goes through
//!
//! The rest of the crate only sees [`Transport`]: a method, a path relative
//! to the server root, an optional JSON body, headers and query parameters go
//! in; a status code and raw body come out.
//!
//! Implemented by:
//! - [`RestClient`]: `reqwest` against a running HugeGraph server
//! - [`MockTransport`]: scripted responses, records every request

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

use crate::error::{HugeError, HugeResult, ServerError};

pub mod mock;
pub mod rest;

pub use mock::MockTransport;
pub use rest::RestClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        })
    }
}

/// A single request to the server
#[derive(Debug, Clone, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    /// Path relative to the server root, without a leading slash
    pub path: String,
    pub body: Option<Value>,
    pub headers: Vec<(String, String)>,
    pub params: Vec<(String, String)>,
}

impl RestRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Post, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::Put, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    /// Value of the first query parameter called `name`
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value of the first header called `name` (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and raw body of a server response
#[derive(Debug, Clone, PartialEq)]
pub struct RestResponse {
    pub status: u16,
    pub body: Bytes,
}

impl RestResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-2xx response into [`HugeError::Server`]
    pub fn check_status(self) -> HugeResult<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(ServerError::from_response(self.status, &self.body).into())
        }
    }

    /// Body as (lossy) text
    pub fn content(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn read_json(&self) -> HugeResult<Value> {
        serde_json::from_slice(&self.body).map_err(|e| self.unexpected::<Value>(e))
    }

    /// Decode the body as `T`; a body of another shape is
    /// [`HugeError::InvalidResponse`]
    pub fn read_object<T: DeserializeOwned>(&self) -> HugeResult<T> {
        serde_json::from_slice(&self.body).map_err(|e| self.unexpected::<T>(e))
    }

    /// Read a list wrapped in an object, e.g. `{"vertices": [...]}`
    pub fn read_list<T: DeserializeOwned>(&self, key: &str) -> HugeResult<Vec<T>> {
        let mut node = self.read_json()?;
        match node.get_mut(key).map(Value::take) {
            Some(list @ Value::Array(_)) => {
                serde_json::from_value(list).map_err(|e| self.unexpected::<Vec<T>>(e))
            }
            _ => Err(HugeError::expect_field(key, self.content())),
        }
    }

    fn unexpected<T>(&self, error: serde_json::Error) -> HugeError {
        HugeError::InvalidResponse(format!(
            "Expect {} in response ({}): {}",
            std::any::type_name::<T>(),
            error,
            self.content()
        ))
    }
}

/// The HTTP collaborator used by every API type.
///
/// Implementations only move bytes: status checking and decoding happen in
/// the API layer, so a transport returns `Ok` for any response it received.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, request: RestRequest) -> HugeResult<RestResponse>;
}
