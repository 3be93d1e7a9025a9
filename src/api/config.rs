//! Client configuration.
//!
//! Everything the API client needs is passed in explicitly through a
//! [`ClientConfig`] at construction time. The base URL points at the player
//! collection resource itself; member URLs are built by appending one path
//! segment to it.

use super::types::ResponsePolicy;
use crate::error::{ApiError, Result};
use reqwest::Url;
use std::collections::BTreeMap;

/// Collection endpoint of a locally running backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/player";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV_VAR: &str = "PREMIER_ZONE_BASE_URL";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Root of the player collection, e.g. `http://localhost:8080/api/player`.
    pub base_url: String,
    /// Extra headers sent with every request.
    pub default_headers: BTreeMap<String, String>,
    pub response_policy: ResponsePolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_headers: BTreeMap::new(),
            response_policy: ResponsePolicy::default(),
        }
    }

    /// Resolve the base URL: explicit value first, then `PREMIER_ZONE_BASE_URL`,
    /// then the local default.
    pub fn resolve(base_url: Option<String>) -> Self {
        let base_url = base_url
            .or_else(|| std::env::var(BASE_URL_ENV_VAR).ok())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_policy(mut self, policy: ResponsePolicy) -> Self {
        self.response_policy = policy;
        self
    }

    /// Parse and check the base URL.
    ///
    /// It must be an absolute http(s) URL without query or fragment, since
    /// search parameters and member path segments are appended to it.
    pub fn endpoint(&self) -> Result<Url> {
        let url = Url::parse(self.base_url.trim())
            .map_err(|e| ApiError::config(format!("invalid base URL {:?}: {e}", self.base_url)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::config(format!(
                "base URL must use http or https, got {:?}",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() {
            return Err(ApiError::config("base URL cannot take path segments"));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(ApiError::config(
                "base URL must not carry a query string or fragment",
            ));
        }
        Ok(url)
    }
}
