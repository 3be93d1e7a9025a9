//! Player REST API: configuration, wire types and the HTTP client.

pub mod client;
pub mod config;
pub mod types;

pub use client::ApiClient;
pub use config::{ClientConfig, BASE_URL_ENV_VAR, DEFAULT_BASE_URL};
pub use types::{PlayerKey, PlayerRecord, ResponsePolicy};
