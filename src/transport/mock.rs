//! MockTransport: scripted in-process transport, no network
//!
//! Responses are queued up front and handed out in order; every request is
//! recorded so callers can assert on paths, bodies and parameters. Ideal for
//! tests and for exercising the client without a server.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{HugeError, HugeResult};
use crate::transport::{RestRequest, RestResponse, Transport};

#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<RestResponse>>,
    requests: Mutex<Vec<RestRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response
    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.respond_raw(status, body.to_string())
    }

    /// Queue a response with an arbitrary body
    pub fn respond_raw(&self, status: u16, body: impl Into<String>) -> &Self {
        lock(&self.responses).push_back(RestResponse::new(status, body.into()));
        self
    }

    /// Every request received so far, oldest first
    pub fn requests(&self) -> Vec<RestRequest> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }

    /// Number of queued responses not handed out yet
    pub fn pending(&self) -> usize {
        lock(&self.responses).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, request: RestRequest) -> HugeResult<RestResponse> {
        let summary = format!("{} {}", request.method, request.path);
        lock(&self.requests).push(request);
        lock(&self.responses)
            .pop_front()
            .ok_or_else(|| HugeError::Connection(format!("No scripted response for {}", summary)))
    }
}
