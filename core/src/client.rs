//! Stateless HTTP request builder and response parser for the v0 API.
//!
//! # Design
//! `UrbanClient` holds only a base URL and optional user agent and carries no
//! mutable state between calls. Each endpoint is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. `DictionaryClient` pairs it with a `Transport` for the
//! actual round-trip; the split keeps URL construction and decoding testable
//! without a network.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{AutoCompleteItemList, DefinitionList};

/// Synchronous, stateless request builder for the Urban Dictionary v0 API.
#[derive(Debug, Clone)]
pub struct UrbanClient {
    base_url: String,
    user_agent: Option<String>,
}

impl UrbanClient {
    pub fn new(base_url: &str) -> Self {
        Self::from_config(&ClientConfig::with_base_url(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_random(&self) -> HttpRequest {
        self.get("random")
    }

    pub fn build_define(&self, term: &str) -> HttpRequest {
        self.get(&format!("define?term={}", encode_term(term)))
    }

    pub fn build_autocomplete(&self, term: &str) -> HttpRequest {
        self.get(&format!("autocomplete-extra?term={}", encode_term(term)))
    }

    /// Parse a `random` or `define` response.
    pub fn parse_definitions(&self, response: HttpResponse) -> Result<DefinitionList, ApiError> {
        decode(response)
    }

    /// Parse an `autocomplete-extra` response.
    pub fn parse_autocomplete(
        &self,
        response: HttpResponse,
    ) -> Result<AutoCompleteItemList, ApiError> {
        decode(response)
    }

    fn get(&self, path_and_query: &str) -> HttpRequest {
        let mut headers = vec![("accept".to_string(), "application/json".to_string())];
        if let Some(agent) = &self.user_agent {
            headers.push(("user-agent".to_string(), agent.clone()));
        }
        HttpRequest {
            url: format!("{}/{path_and_query}", self.base_url),
            headers,
        }
    }
}

fn encode_term(term: &str) -> String {
    utf8_percent_encode(term, NON_ALPHANUMERIC).to_string()
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}
