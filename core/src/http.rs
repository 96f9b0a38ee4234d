//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data.
//! `UrbanClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network; a `Transport` performs the round-trip in
//! between. All fields use owned types so values cross the FFI boundary
//! without lifetime concerns.
//!
//! Every v0 endpoint is a bodiless GET, so the request carries no method or
//! body.

/// A GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL including the percent-encoded query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`, then handed
/// to `UrbanClient::parse_*` for deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
