//! Backend selection shared by every command.

use crate::{
    api::{ApiClient, PlayerRecord},
    cli::ConnectionArgs,
    core::FilterCriteria,
    demo::DemoSource,
    search::PlayerSource,
    ApiError, Result,
};
use std::future::Future;
use tracing::debug;

/// Where players come from for this run.
#[derive(Debug, Clone)]
pub enum Backend {
    Live(ApiClient),
    Demo(DemoSource),
}

impl Backend {
    /// Build the backend from connection flags; `--offline` skips the HTTP
    /// client entirely.
    pub fn connect(args: &ConnectionArgs) -> Result<Self> {
        if args.offline {
            debug!("using offline demo roster");
            return Ok(Backend::Demo(DemoSource::default()));
        }
        let client = ApiClient::new(args.client_config()?)?;
        debug!(endpoint = %client.endpoint(), "using live backend");
        Ok(Backend::Live(client))
    }

    /// The HTTP client, required for anything that changes data.
    pub fn client(&self) -> Result<&ApiClient> {
        match self {
            Backend::Live(client) => Ok(client),
            Backend::Demo(_) => Err(ApiError::validation(
                "the offline demo roster is read-only; drop --offline to change players",
            )),
        }
    }
}

impl PlayerSource for Backend {
    fn search(
        &self,
        criteria: &FilterCriteria,
    ) -> impl Future<Output = Result<Vec<PlayerRecord>>> + Send {
        async move {
            match self {
                Backend::Live(client) => client.search(criteria).await,
                Backend::Demo(demo) => PlayerSource::search(demo, criteria).await,
            }
        }
    }
}
