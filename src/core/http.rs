//! HTTP header utilities for backend communication

use crate::{ApiError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use std::collections::BTreeMap;

/// Build the header map sent with every request.
///
/// JSON `Accept` and `Content-Type` are always present; entries in `extra`
/// are applied on top and may override them.
pub fn build_header_map(extra: &BTreeMap<String, String>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.trim().as_bytes())?;
        h.insert(name, HeaderValue::from_str(value.trim())?);
    }
    Ok(h)
}

/// Split a `Name: value` command-line argument into its parts.
pub fn parse_header_arg(raw: &str) -> Result<(String, String)> {
    let (name, value) = raw
        .split_once(':')
        .ok_or_else(|| ApiError::config(format!("header must look like NAME:VALUE, got {raw:?}")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::config(format!("header name is empty in {raw:?}")));
    }
    Ok((name.to_string(), value.trim().to_string()))
}
