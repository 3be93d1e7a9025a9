use crate::{
    api::{ApiClient, PlayerRecord},
    core::FilterCriteria,
    Result,
};
use std::future::Future;

/// Anything the search controller can ask for matching players.
pub trait PlayerSource {
    fn search(
        &self,
        criteria: &FilterCriteria,
    ) -> impl Future<Output = Result<Vec<PlayerRecord>>> + Send;
}

impl PlayerSource for ApiClient {
    fn search(
        &self,
        criteria: &FilterCriteria,
    ) -> impl Future<Output = Result<Vec<PlayerRecord>>> + Send {
        ApiClient::search(self, criteria)
    }
}
