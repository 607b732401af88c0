//! The stateful search client.
//!
//! One [`SearchClient`] owns the whole lifecycle: the lazy corpus load, the
//! built index, the readiness signal other tasks can watch, and the last
//! query served. The load runs at most once per client; success and failure
//! are both terminal outcomes.

use parking_lot::RwLock;
use tokio::sync::{watch, OnceCell};
use tracing::{debug, error, info, instrument};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::fetch::{default_http_client, CorpusSource};
use crate::index::FuzzyIndex;
use crate::suggest::navigation_url;
use crate::types::{DocRecord, SearchHit};

/// Where the index stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// No load attempted yet.
    Unloaded,
    /// The one load attempt is in flight.
    Loading,
    /// The index is built and serving queries.
    Ready,
    /// The one load attempt failed. Terminal, never retried.
    Failed,
}

/// Terminal outcome of the load attempt.
///
/// Failure keeps the error text rather than the error itself so late
/// observers can still read what went wrong.
#[derive(Debug)]
enum LoadState {
    Ready(FuzzyIndex),
    Failed(String),
}

/// Client-side fuzzy search over a site's documentation corpus.
#[derive(Debug)]
pub struct SearchClient {
    source: CorpusSource,
    config: SearchConfig,
    http: reqwest::Client,
    state: OnceCell<LoadState>,
    readiness_tx: watch::Sender<Readiness>,
    last_query: RwLock<Option<String>>,
}

impl SearchClient {
    /// Create a client over the given source with default settings.
    pub fn new(source: CorpusSource) -> Result<Self, SearchError> {
        Self::with_config(source, SearchConfig::default())
    }

    pub fn with_config(source: CorpusSource, config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        let (readiness_tx, _) = watch::channel(Readiness::Unloaded);
        Ok(SearchClient {
            source,
            config,
            http: default_http_client()?,
            state: OnceCell::new(),
            readiness_tx,
            last_query: RwLock::new(None),
        })
    }

    /// Run the load attempt to completion, or join the one already underway.
    ///
    /// The first caller triggers the fetch; concurrent callers piggyback on
    /// the same attempt and resume when it settles. Later calls observe the
    /// recorded outcome without touching the network again. Returns the
    /// readiness the attempt settled on, never an intermediate state.
    #[instrument(skip(self))]
    pub async fn ensure_loaded(&self) -> Readiness {
        let state = self
            .state
            .get_or_init(|| async {
                self.readiness_tx.send_replace(Readiness::Loading);
                info!(source = %self.source.describe(), "loading search corpus");
                match self.source.load(&self.http).await {
                    Ok(records) => {
                        let index = FuzzyIndex::build(records, &self.config);
                        info!(records = index.len(), "search index ready");
                        LoadState::Ready(index)
                    }
                    Err(err) => {
                        error!(error = %err, "search corpus load failed");
                        LoadState::Failed(err.to_string())
                    }
                }
            })
            .await;

        let readiness = match state {
            LoadState::Ready(_) => Readiness::Ready,
            LoadState::Failed(_) => Readiness::Failed,
        };
        self.readiness_tx.send_if_modified(|current| {
            if *current == readiness {
                false
            } else {
                *current = readiness;
                true
            }
        });
        readiness
    }

    /// Fuzzy-search the corpus.
    ///
    /// Queries shorter than the autocomplete minimum resolve to an empty list
    /// without touching any state. If a load is in flight the call waits for
    /// it to settle. With no index present, whether unloaded or failed, the
    /// answer is an empty list; a query never triggers a load by itself.
    #[instrument(skip(self))]
    pub async fn query(&self, query: &str) -> Vec<SearchHit> {
        if query.chars().count() < self.config.min_query_len {
            return Vec::new();
        }

        self.await_settled().await;

        let Some(LoadState::Ready(index)) = self.state.get() else {
            debug!("index absent, answering with empty list");
            return Vec::new();
        };

        *self.last_query.write() = Some(query.to_string());

        let mut hits = index.search(query, self.config.limit);
        hits.retain(|hit| hit.score <= self.config.score_cutoff);
        debug!(hits = hits.len(), "query served");
        hits
    }

    /// Navigation target for a selected hit.
    ///
    /// Carries the last served query so the destination page can highlight
    /// it. Selecting before any query was served carries an empty one.
    pub fn navigate(&self, record: &DocRecord) -> String {
        let query = self.last_query.read().clone().unwrap_or_default();
        navigation_url(record, &query)
    }

    /// Current readiness, without waiting.
    pub fn readiness(&self) -> Readiness {
        *self.readiness_tx.borrow()
    }

    /// Subscribe to readiness transitions.
    pub fn watch_readiness(&self) -> watch::Receiver<Readiness> {
        self.readiness_tx.subscribe()
    }

    /// The recorded message after a failed load.
    pub fn load_error(&self) -> Option<&str> {
        match self.state.get() {
            Some(LoadState::Failed(message)) => Some(message),
            _ => None,
        }
    }

    /// The most recent query that was actually served against the index.
    pub fn last_query(&self) -> Option<String> {
        self.last_query.read().clone()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn source(&self) -> &CorpusSource {
        &self.source
    }

    /// Block until the client leaves `Loading`. `Unloaded` already counts as
    /// settled: waiting here must never start a load.
    async fn await_settled(&self) {
        let mut rx = self.readiness_tx.subscribe();
        loop {
            if *rx.borrow_and_update() != Readiness::Loading {
                return;
            }
            if rx.changed().await.is_err() {
                return;
            }
        }
    }
}
