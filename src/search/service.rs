//! # Search Service
//!
//! A task that owns the search history and analytics and runs debounced searches.
//!
//! [`SearchClient::submit`] is what the search box calls on every keystroke. The service
//! keeps only the latest submission and runs it once the input has been quiet for the
//! debounce interval; superseded submissions are dropped without running. Results are
//! published on a `watch` channel, so a subscriber always sees the latest outcome.

use super::analytics::{PopularSearch, SearchAnalytics, SearchRecord, SearchStats};
use super::filter::{search, SearchFilters};
use super::history::SearchHistory;
use super::suggestions::{suggestions, SUGGESTION_LIMIT};
use crate::catalog::Catalog;
use crate::model::MenuItem;
use crate::storage::{
    load_json, save_json, KeyValueStore, SEARCH_ANALYTICS_KEY, SEARCH_HISTORY_KEY,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSettings {
    pub debounce: Duration,
    /// Shorter queries produce an empty outcome and are not recorded.
    pub min_query_len: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_query_len: 2,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("Search service closed")]
    ServiceClosed,
    #[error("Search service dropped response channel")]
    ServiceDropped,
}

/// The result of one executed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Increases by one per executed search.
    pub sequence: u64,
    pub query: String,
    pub filters: SearchFilters,
    pub results: Vec<MenuItem>,
}

enum SearchRequest {
    Submit {
        query: String,
        filters: SearchFilters,
    },
    Execute {
        query: String,
        filters: SearchFilters,
        respond_to: oneshot::Sender<SearchOutcome>,
    },
    History(oneshot::Sender<Vec<String>>),
    ClearHistory(oneshot::Sender<()>),
    Popular {
        limit: usize,
        respond_to: oneshot::Sender<Vec<PopularSearch>>,
    },
    Stats(oneshot::Sender<SearchStats>),
    Suggestions(oneshot::Sender<Vec<String>>),
}

pub struct SearchService {
    catalog: Catalog,
    store: Arc<dyn KeyValueStore>,
    settings: SearchSettings,
    receiver: mpsc::Receiver<SearchRequest>,
    outcomes: watch::Sender<Option<SearchOutcome>>,
    history: SearchHistory,
    analytics: SearchAnalytics,
    sequence: u64,
}

impl SearchService {
    /// Creates the service and its client. History and analytics are restored from
    /// `store` now; the service starts working once [`SearchService::run`] is spawned.
    pub fn new(
        catalog: Catalog,
        store: Arc<dyn KeyValueStore>,
        settings: SearchSettings,
    ) -> (Self, SearchClient) {
        let (sender, receiver) = mpsc::channel(64);
        let (outcomes, outcome_rx) = watch::channel(None);

        let history = SearchHistory::new(SearchHistory::DEFAULT_CAPACITY, settings.min_query_len)
            .with_entries(load_json(store.as_ref(), SEARCH_HISTORY_KEY));
        let analytics = SearchAnalytics::new(SearchAnalytics::DEFAULT_CAPACITY)
            .with_records(load_json(store.as_ref(), SEARCH_ANALYTICS_KEY));

        let service = Self {
            catalog,
            store,
            settings,
            receiver,
            outcomes,
            history,
            analytics,
            sequence: 0,
        };
        let client = SearchClient {
            sender,
            outcomes: outcome_rx,
        };
        (service, client)
    }

    pub async fn run(mut self) {
        info!(
            history = self.history.entries().len(),
            analytics = self.analytics.records().len(),
            "Search service started"
        );
        let timer = sleep(Duration::ZERO);
        tokio::pin!(timer);
        let mut pending: Option<(String, SearchFilters)> = None;

        loop {
            tokio::select! {
                msg = self.receiver.recv() => {
                    let Some(msg) = msg else { break };
                    match msg {
                        SearchRequest::Submit { query, filters } => {
                            debug!(%query, "Search submitted");
                            pending = Some((query, filters));
                            timer.as_mut().reset(Instant::now() + self.settings.debounce);
                        }
                        SearchRequest::Execute { query, filters, respond_to } => {
                            let outcome = self.execute(query, filters);
                            let _ = respond_to.send(outcome);
                        }
                        SearchRequest::History(respond_to) => {
                            let _ = respond_to.send(self.history.entries().to_vec());
                        }
                        SearchRequest::ClearHistory(respond_to) => {
                            self.history.clear();
                            if let Err(e) = self.store.remove(SEARCH_HISTORY_KEY) {
                                warn!(error = %e, "Failed to clear search history");
                            }
                            let _ = respond_to.send(());
                        }
                        SearchRequest::Popular { limit, respond_to } => {
                            let _ = respond_to.send(self.analytics.popular_searches(limit));
                        }
                        SearchRequest::Stats(respond_to) => {
                            let _ = respond_to.send(self.analytics.stats());
                        }
                        SearchRequest::Suggestions(respond_to) => {
                            let popular = self.analytics.popular_searches(5);
                            let _ = respond_to.send(suggestions(
                                &popular,
                                self.history.entries(),
                                SUGGESTION_LIMIT,
                            ));
                        }
                    }
                }
                () = &mut timer, if pending.is_some() => {
                    if let Some((query, filters)) = pending.take() {
                        self.execute(query, filters);
                    }
                }
            }
        }

        if let Some((query, _)) = pending {
            debug!(%query, "Dropping pending search on shutdown");
        }
        info!("Search service stopped");
    }

    /// Runs a search now, records it and publishes the outcome.
    fn execute(&mut self, query: String, filters: SearchFilters) -> SearchOutcome {
        self.sequence += 1;
        let results = if query.chars().count() < self.settings.min_query_len {
            Vec::new()
        } else {
            let results = search(self.catalog.items(), &query, &filters);
            self.record(&query, &filters, results.len());
            results
        };
        info!(%query, results = results.len(), "Search executed");

        let outcome = SearchOutcome {
            sequence: self.sequence,
            query,
            filters,
            results,
        };
        self.outcomes.send_replace(Some(outcome.clone()));
        outcome
    }

    fn record(&mut self, query: &str, filters: &SearchFilters, results_count: usize) {
        self.analytics
            .track(SearchRecord::now(query, filters, results_count));
        if let Err(e) = save_json(self.store.as_ref(), SEARCH_ANALYTICS_KEY, self.analytics.records()) {
            warn!(error = %e, "Failed to persist search analytics");
        }
        if self.history.record(query) {
            if let Err(e) = save_json(self.store.as_ref(), SEARCH_HISTORY_KEY, self.history.entries()) {
                warn!(error = %e, "Failed to persist search history");
            }
        }
    }
}

/// Cloneable handle to the [`SearchService`].
#[derive(Clone)]
pub struct SearchClient {
    sender: mpsc::Sender<SearchRequest>,
    outcomes: watch::Receiver<Option<SearchOutcome>>,
}

impl SearchClient {
    async fn call<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<R>) -> SearchRequest,
    ) -> Result<R, SearchError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| SearchError::ServiceClosed)?;
        response.await.map_err(|_| SearchError::ServiceDropped)
    }

    /// Queues a debounced search. Only the last submission within the quiet interval runs.
    pub async fn submit(
        &self,
        query: impl Into<String>,
        filters: SearchFilters,
    ) -> Result<(), SearchError> {
        self.sender
            .send(SearchRequest::Submit {
                query: query.into(),
                filters,
            })
            .await
            .map_err(|_| SearchError::ServiceClosed)
    }

    /// Runs a search immediately, skipping the debounce.
    pub async fn search_now(
        &self,
        query: impl Into<String>,
        filters: SearchFilters,
    ) -> Result<SearchOutcome, SearchError> {
        let query = query.into();
        self.call(|respond_to| SearchRequest::Execute {
            query,
            filters,
            respond_to,
        })
        .await
    }

    /// Receiver for published outcomes. `None` until the first search runs.
    pub fn subscribe(&self) -> watch::Receiver<Option<SearchOutcome>> {
        self.outcomes.clone()
    }

    pub async fn history(&self) -> Result<Vec<String>, SearchError> {
        self.call(SearchRequest::History).await
    }

    pub async fn clear_history(&self) -> Result<(), SearchError> {
        self.call(SearchRequest::ClearHistory).await
    }

    pub async fn popular(&self, limit: usize) -> Result<Vec<PopularSearch>, SearchError> {
        self.call(|respond_to| SearchRequest::Popular { limit, respond_to })
            .await
    }

    pub async fn stats(&self) -> Result<SearchStats, SearchError> {
        self.call(SearchRequest::Stats).await
    }

    pub async fn suggestions(&self) -> Result<Vec<String>, SearchError> {
        self.call(SearchRequest::Suggestions).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn start(store: Arc<MemoryStore>) -> SearchClient {
        let (service, client) =
            SearchService::new(Catalog::builtin(), store, SearchSettings::default());
        tokio::spawn(service.run());
        client
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_submissions_run_once_for_the_last_query() {
        let client = start(Arc::new(MemoryStore::new()));
        let mut outcomes = client.subscribe();

        for q in ["ri", "ric", "rice"] {
            client.submit(q, SearchFilters::default()).await.unwrap();
        }
        outcomes.changed().await.unwrap();
        let outcome = outcomes.borrow_and_update().clone().unwrap();
        assert_eq!(outcome.query, "rice");
        assert_eq!(outcome.sequence, 1);
        assert_eq!(outcome.results.len(), 1);

        let stats = client.stats().await.unwrap();
        assert_eq!(stats.total_searches, 1);
        assert_eq!(client.history().await.unwrap(), vec!["rice"]);
    }

    #[tokio::test(start_paused = true)]
    async fn short_query_is_suppressed_and_not_recorded() {
        let store = Arc::new(MemoryStore::new());
        let client = start(store.clone());

        let outcome = client.search_now("r", SearchFilters::default()).await.unwrap();
        assert!(outcome.results.is_empty());
        assert!(client.history().await.unwrap().is_empty());
        assert_eq!(client.stats().await.unwrap().total_searches, 0);
        assert!(store.get(SEARCH_ANALYTICS_KEY).unwrap().is_none());
    }

    #[tokio::test]
    async fn history_persists_and_clears() {
        let store = Arc::new(MemoryStore::new());
        let client = start(store.clone());
        client.search_now("pizza", SearchFilters::default()).await.unwrap();
        client.search_now("suya", SearchFilters::default()).await.unwrap();
        client.search_now("pizza", SearchFilters::default()).await.unwrap();

        // A fresh service restores from the same store.
        let reopened = start(store.clone());
        assert_eq!(reopened.history().await.unwrap(), vec!["pizza", "suya"]);
        assert_eq!(
            reopened.popular(5).await.unwrap()[0],
            PopularSearch { query: "pizza".into(), count: 2 }
        );
        assert_eq!(reopened.suggestions().await.unwrap(), vec!["pizza", "suya"]);

        reopened.clear_history().await.unwrap();
        assert!(reopened.history().await.unwrap().is_empty());
        assert!(store.get(SEARCH_HISTORY_KEY).unwrap().is_none());
    }
}
