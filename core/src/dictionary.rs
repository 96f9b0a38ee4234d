//! Network-backed dictionary client.
//!
//! # Design
//! `DictionaryClient` couples the stateless `UrbanClient` with a `Transport`.
//! The `try_fetch_*` methods keep the full `ApiError`; the `fetch_*` methods
//! are the public contract used by `QueryState` and flatten every failure
//! (transport, status, decode) into `None` after logging the cause. A caller
//! of `fetch_*` cannot tell "no such word" from "server down" and is not
//! meant to.

use tracing::{debug, warn};

use crate::client::UrbanClient;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{AutoCompleteItemList, DefinitionList};

#[derive(Debug, Clone)]
pub struct DictionaryClient<T = UreqTransport> {
    api: UrbanClient,
    transport: T,
}

impl DictionaryClient<UreqTransport> {
    /// Client for `config` over a fresh `ureq` agent.
    pub fn connect(config: &ClientConfig) -> Self {
        Self::with_transport(UrbanClient::from_config(config), UreqTransport::new())
    }
}

impl<T: Transport> DictionaryClient<T> {
    pub fn with_transport(api: UrbanClient, transport: T) -> Self {
        Self { api, transport }
    }

    pub fn api(&self) -> &UrbanClient {
        &self.api
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn try_fetch_random(&self) -> Result<DefinitionList, ApiError> {
        let request = self.api.build_random();
        self.api.parse_definitions(self.round_trip(&request)?)
    }

    pub fn try_fetch_definitions(&self, term: &str) -> Result<DefinitionList, ApiError> {
        let request = self.api.build_define(term);
        self.api.parse_definitions(self.round_trip(&request)?)
    }

    pub fn try_fetch_autocomplete(&self, term: &str) -> Result<AutoCompleteItemList, ApiError> {
        let request = self.api.build_autocomplete(term);
        self.api.parse_autocomplete(self.round_trip(&request)?)
    }

    pub fn fetch_random(&self) -> Option<DefinitionList> {
        flatten("random", self.try_fetch_random())
    }

    pub fn fetch_definitions(&self, term: &str) -> Option<DefinitionList> {
        flatten("define", self.try_fetch_definitions(term))
    }

    pub fn fetch_autocomplete(&self, term: &str) -> Option<AutoCompleteItemList> {
        flatten("autocomplete-extra", self.try_fetch_autocomplete(term))
    }

    fn round_trip(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(url = %request.url, "issuing dictionary request");
        let response = self.transport.execute(request)?;
        debug!(url = %request.url, status = response.status, "dictionary response received");
        Ok(response)
    }
}

fn flatten<V>(endpoint: &'static str, result: Result<V, ApiError>) -> Option<V> {
    result
        .map_err(|error| warn!(endpoint, %error, "dictionary fetch unavailable"))
        .ok()
}
