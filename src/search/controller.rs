//! View-state machine for the player search.
//!
//! The controller owns the filter fields the user is editing and the single
//! [`FetchState`] slot. Editing a field never fetches; `mount`, `search` and
//! `clear` commit the fields and run a request through the [`PlayerSource`].
//!
//! Every fetch is stamped with a [`Ticket`] from a monotonically increasing
//! sequence. A completion only lands when its ticket is the most recently
//! issued one, so a slow response to an older search can never overwrite
//! the result of a newer one. Callers that overlap requests themselves can
//! use [`SearchController::begin_search`] / [`SearchController::complete`]
//! directly.

use super::{source::PlayerSource, state::FetchState};
use crate::{
    api::PlayerRecord,
    core::{FilterCriteria, FilterField},
    Result,
};
use tracing::{debug, error};

/// Message shown to the user for any failed fetch.
pub const FETCH_ERROR_MESSAGE: &str = "unable to reach backend";

/// Sequence number of an issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// A fetch that has been started but not completed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch {
    pub ticket: Ticket,
    /// Snapshot of the criteria at the moment the fetch was triggered.
    pub criteria: FilterCriteria,
}

#[derive(Debug)]
pub struct SearchController<S> {
    source: S,
    criteria: FilterCriteria,
    committed: FilterCriteria,
    state: FetchState,
    issued: u64,
    mounted: bool,
}

impl<S> SearchController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            criteria: FilterCriteria::default(),
            committed: FilterCriteria::default(),
            state: FetchState::Idle,
            issued: 0,
            mounted: false,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// Fields as currently edited, committed or not.
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Criteria of the most recently triggered fetch.
    pub fn committed(&self) -> &FilterCriteria {
        &self.committed
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Edit one filter field locally.
    pub fn set_field(&mut self, field: FilterField, value: impl Into<String>) {
        self.criteria.set(field, value);
    }

    pub fn has_active_filters(&self) -> bool {
        self.criteria.has_active_filters()
    }

    /// Number of records shown, only while in `Success`.
    pub fn result_count(&self) -> Option<usize> {
        self.state.records().map(|records| records.len())
    }

    /// Start the initial "show all" fetch. Returns `None` when this
    /// controller has already been mounted.
    pub fn begin_mount(&mut self) -> Option<PendingFetch> {
        if self.mounted {
            debug!("controller already mounted, skipping initial fetch");
            return None;
        }
        self.mounted = true;
        Some(self.begin(FilterCriteria::default()))
    }

    /// Commit the current fields and start a fetch.
    pub fn begin_search(&mut self) -> PendingFetch {
        self.begin(self.criteria.clone())
    }

    /// Reset every field and start a fetch with the empty criteria.
    pub fn begin_clear(&mut self) -> PendingFetch {
        self.criteria = FilterCriteria::default();
        self.begin(FilterCriteria::default())
    }

    fn begin(&mut self, criteria: FilterCriteria) -> PendingFetch {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        debug!(ticket = ticket.0, from = self.state.name(), "fetch started");

        self.committed = criteria.clone();
        self.state = FetchState::Loading;
        PendingFetch { ticket, criteria }
    }

    /// Apply the outcome of a fetch.
    ///
    /// Returns `false` and leaves the state untouched when `ticket` has been
    /// superseded by a later fetch or was already completed.
    pub fn complete(&mut self, ticket: Ticket, result: Result<Vec<PlayerRecord>>) -> bool {
        if ticket.0 != self.issued || !self.state.is_loading() {
            debug!(
                ticket = ticket.0,
                latest = self.issued,
                "dropping superseded fetch result"
            );
            return false;
        }

        self.state = match result {
            Ok(records) => {
                debug!(ticket = ticket.0, count = records.len(), "fetch succeeded");
                FetchState::Success(records)
            }
            Err(err) => {
                error!(ticket = ticket.0, error = %err, "failed to fetch players");
                FetchState::Error(FETCH_ERROR_MESSAGE.to_string())
            }
        };
        true
    }
}

impl<S: PlayerSource> SearchController<S> {
    /// Initial load on view activation; a no-op after the first call.
    pub async fn mount(&mut self) -> &FetchState {
        if let Some(fetch) = self.begin_mount() {
            self.run(fetch).await;
        }
        &self.state
    }

    pub async fn search(&mut self) -> &FetchState {
        let fetch = self.begin_search();
        self.run(fetch).await;
        &self.state
    }

    /// Clearing always refetches, even when the fields were already empty.
    pub async fn clear(&mut self) -> &FetchState {
        let fetch = self.begin_clear();
        self.run(fetch).await;
        &self.state
    }

    async fn run(&mut self, fetch: PendingFetch) {
        let result = self.source.search(&fetch.criteria).await;
        self.complete(fetch.ticket, result);
    }
}
