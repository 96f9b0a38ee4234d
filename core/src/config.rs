//! Client configuration.
//!
//! Defaults target the public API. `from_env` lets tests and local
//! development point a build at the mock server without code changes.

use std::env;

/// Base URL of the public Urban Dictionary v0 API.
pub const DEFAULT_BASE_URL: &str = "https://api.urbandictionary.com/v0/";

/// Term the quick-search slot is first loaded with.
pub const DEFAULT_QUICK_SEARCH_TERM: &str = "urbandictionary";

pub const BASE_URL_ENV: &str = "URBAN_API_BASE_URL";
pub const USER_AGENT_ENV: &str = "URBAN_API_USER_AGENT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Endpoint paths are appended to this; a trailing `/` is optional.
    pub base_url: String,
    /// Sent as `user-agent` when set; otherwise the transport default is used.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `URBAN_API_BASE_URL` and `URBAN_API_USER_AGENT`.
    /// Empty values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        let mut config = Self::default();
        if let Some(base_url) = non_empty(BASE_URL_ENV) {
            config.base_url = base_url;
        }
        config.user_agent = non_empty(USER_AGENT_ENV);
        config
    }
}
