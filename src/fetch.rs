//! Corpus acquisition.
//!
//! The corpus is a single JSON document fetched from wherever the site keeps
//! it. Acquisition is strictly one attempt: whatever error comes back is the
//! final word, and the caller records it as a terminal load failure.

use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, error, instrument};

use crate::corpus::parse_corpus;
use crate::error::SearchError;
use crate::types::DocRecord;

/// How long a network fetch may take before the load counts as failed.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("talpa/", env!("CARGO_PKG_VERSION"));

/// Where the corpus lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorpusSource {
    /// Fetched over HTTP(S).
    Url(String),
    /// Read from the local filesystem.
    File(PathBuf),
}

impl CorpusSource {
    /// Classify a raw location string.
    ///
    /// Anything with an `http://` or `https://` scheme is a URL; everything
    /// else is treated as a local path.
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            CorpusSource::Url(raw.to_string())
        } else {
            CorpusSource::File(PathBuf::from(raw))
        }
    }

    /// Human-readable location for logs and error messages.
    pub fn describe(&self) -> String {
        match self {
            CorpusSource::Url(url) => url.clone(),
            CorpusSource::File(path) => path.display().to_string(),
        }
    }

    /// Fetch and parse the corpus.
    #[instrument(skip(self, http), fields(source = %self.describe()))]
    pub async fn load(&self, http: &reqwest::Client) -> Result<Vec<DocRecord>, SearchError> {
        let raw = match self {
            CorpusSource::Url(url) => {
                debug!("fetching corpus over http");
                let response = http.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    error!(status = %status, "corpus fetch rejected");
                    return Err(SearchError::Status(status));
                }
                response.text().await?
            }
            CorpusSource::File(path) => {
                debug!("reading corpus from disk");
                tokio::fs::read_to_string(path).await?
            }
        };

        let records = parse_corpus(&raw)?;
        debug!(records = records.len(), "corpus loaded");
        Ok(records)
    }
}

/// Build the HTTP client used for corpus fetches.
pub fn default_http_client() -> Result<reqwest::Client, SearchError> {
    Ok(reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(USER_AGENT)
        .build()?)
}
