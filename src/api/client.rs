//! HTTP client for the player collection endpoint.

use super::{
    config::ClientConfig,
    types::{PlayerRecord, ResponsePolicy},
};
use crate::{
    core::{build_header_map, FilterCriteria},
    ApiError, Result,
};
use reqwest::{Client, Url};
use tracing::debug;


const USER_AGENT: &str = concat!("premier-zone/", env!("CARGO_PKG_VERSION"));

/// Client for the player REST resource.
///
/// One request per call: no retries, no caching, and the transport's
/// default timeouts.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    endpoint: Url,
    policy: ResponsePolicy,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let headers = build_header_map(&config.default_headers)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            policy: config.response_policy,
        })
    }

    /// The collection endpoint every request is built from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// URL for a search: the bare endpoint when no filter is active,
    /// otherwise the endpoint with active fields as query parameters in
    /// `name, team, position, nation` order.
    pub fn search_url(&self, criteria: &FilterCriteria) -> Url {
        let mut url = self.endpoint.clone();
        let pairs = criteria.active_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }

    /// `<endpoint>/<segment>`, with the segment percent-encoded.
    fn member_url(&self, segment: &str) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::config("base URL cannot take path segments"))?
            .pop_if_empty()
            .push(segment);
        Ok(url)
    }

    pub async fn search(&self, criteria: &FilterCriteria) -> Result<Vec<PlayerRecord>> {
        self.fetch_list(self.search_url(criteria)).await
    }

    pub async fn get_all(&self) -> Result<Vec<PlayerRecord>> {
        self.fetch_list(self.endpoint.clone()).await
    }

    async fn fetch_list(&self, url: Url) -> Result<Vec<PlayerRecord>> {
        debug!(%url, "GET players");

        let body = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let records = self.policy.decode_list(&body)?;
        debug!(count = records.len(), "decoded players");
        Ok(records)
    }

    /// Add a new player. The record must not carry an id yet.
    pub async fn create(&self, player: &PlayerRecord) -> Result<PlayerRecord> {
        if let Some(id) = player.id {
            return Err(ApiError::validation(format!(
                "new player must not have an ID (got {id})"
            )));
        }
        debug!(url = %self.endpoint, name = %player.name, "POST player");

        let body = self
            .http
            .post(self.endpoint.clone())
            .json(player)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        self.policy.decode_one(&body)
    }

    /// Replace an existing player. Fails before any I/O when the id is missing.
    ///
    /// The backend answers an unknown id with an empty (or `null`) body,
    /// which is reported as [`ApiError::PlayerNotFound`].
    pub async fn update(&self, player: &PlayerRecord) -> Result<PlayerRecord> {
        let id = player
            .id
            .ok_or_else(|| ApiError::validation("Player ID is required to update"))?;
        let url = self.member_url(&id.to_string())?;
        debug!(%url, "PUT player");

        let body = self
            .http
            .put(url)
            .json(player)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "null" {
            return Err(ApiError::PlayerNotFound(id.to_string()));
        }
        self.policy.decode_one(&body)
    }

    pub async fn delete_by_name(&self, name: &str) -> Result<()> {
        let url = self.member_url(name)?;
        debug!(%url, "DELETE player");

        self.http.delete(url).send().await?.error_for_status()?;
        Ok(())
    }
}
