//! Error types for the dictionary client.
//!
//! # Design
//! Callers of `DictionaryClient::fetch_*` never see these: every variant
//! collapses to `None` there. They exist so `try_fetch_*` and the logs can
//! still tell "server down" from "bad payload". `NotFound` keeps its own
//! variant because it is the most common non-2xx status from the API.

use thiserror::Error;

/// Errors produced while building, executing, or parsing a dictionary request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused, reset, TLS).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),
}
