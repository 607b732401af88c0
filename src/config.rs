//! Tuning parameters for the query pipeline.
//!
//! The defaults are inherited, not derived: they are the values the
//! documentation-site search shipped with, and nothing here assumes they are
//! optimal. They live in one struct precisely so a consumer who wants to
//! re-tune can do it without touching the pipeline.
//!
//! # Defaults
//!
//! | Parameter       | Value | Effect                                          |
//! |-----------------|-------|-------------------------------------------------|
//! | `threshold`     | 0.1   | Max per-field score for a field to count        |
//! | `score_cutoff`  | 0.75  | Max hit score ever delivered to the consumer    |
//! | `limit`         | 20    | Result cap, applied before the cutoff filter    |
//! | `min_query_len` | 2     | Queries shorter than this return nothing        |
//!
//! With the defaults the cutoff is a backstop - accepted fields already score
//! at most `threshold`. It becomes load-bearing the moment a consumer raises
//! `threshold` past `score_cutoff`.

use crate::error::SearchError;

/// Default construction threshold: a field matches only if its score is at
/// most this.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Default post-search cutoff: hits scoring above this are discarded before
/// delivery.
pub const DEFAULT_SCORE_CUTOFF: f64 = 0.75;

/// Default cap on results per query.
pub const DEFAULT_LIMIT: usize = 20;

/// Default minimum query length in characters.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Knobs for index construction and querying.
///
/// Scores run from 0 (exact substring) to 1 (nothing alike), so both
/// `threshold` and `score_cutoff` are upper bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// A field counts as matching only if its score is `<= threshold`.
    pub threshold: f64,
    /// Hits scoring above this are dropped after the limit is applied.
    pub score_cutoff: f64,
    /// Maximum number of hits per query, applied before the cutoff filter.
    pub limit: usize,
    /// Queries with fewer characters than this return an empty list without
    /// touching the index.
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            threshold: DEFAULT_THRESHOLD,
            score_cutoff: DEFAULT_SCORE_CUTOFF,
            limit: DEFAULT_LIMIT,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

impl SearchConfig {
    /// Reject configurations the pipeline cannot honor.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(SearchError::Config(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.score_cutoff) {
            return Err(SearchError::Config(format!(
                "score_cutoff must be within [0, 1], got {}",
                self.score_cutoff
            )));
        }
        if self.limit == 0 {
            return Err(SearchError::Config("limit must be at least 1".to_string()));
        }
        Ok(())
    }
}
