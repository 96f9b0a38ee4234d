//! Executes `HttpRequest` values against the network.
//!
//! # Design
//! `Transport` is the seam between the stateless `UrbanClient` and real I/O.
//! `UreqTransport` owns one `ureq::Agent` (and its connection pool) for the
//! lifetime of a session; dropping it releases the pool. Tests substitute an
//! in-memory implementation.

use std::fmt;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Performs one blocking HTTP round-trip.
///
/// Non-2xx responses are returned as data, not errors; status interpretation
/// belongs to `UrbanClient::parse_*`. Only failures that produce no response
/// at all map to `ApiError::Transport`.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by `ureq`, using its default timeouts.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl UreqTransport {
    pub fn new() -> Self {
        // Disable ureq's status-as-error so 4xx/5xx come back as responses.
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let mut response = builder
            .call()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
