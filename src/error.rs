//! Error taxonomy for corpus loading and configuration.

use thiserror::Error;

/// Everything that can go wrong between "fetch the corpus" and "index ready".
///
/// Queries never surface these. A failed load leaves the client answering
/// every subsequent query with an empty list; the cause stays observable
/// through [`crate::SearchClient::load_error`] and through the CLI's explicit
/// load path.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Transport-level failure while fetching the corpus over HTTP.
    #[error("corpus fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The corpus endpoint answered with a non-success status.
    #[error("corpus fetch returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// Reading a corpus file from disk failed.
    #[error("corpus read failed: {0}")]
    Io(#[from] std::io::Error),

    /// The corpus payload is not the expected JSON array of records.
    #[error("corpus parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// A load failure recorded earlier in the client's lifetime, replayed
    /// for callers that ask after the fact.
    #[error("corpus load failed: {0}")]
    Load(String),

    /// The search configuration is unusable.
    #[error("invalid search configuration: {0}")]
    Config(String),
}
