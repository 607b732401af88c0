//! Client-side fuzzy search for static documentation sites.
//!
//! A documentation site ships a single `search.json` corpus describing every
//! section of every page. This crate loads that corpus lazily, builds an
//! approximate-match index over it, and answers autocomplete-style queries
//! with scored, capped result lists plus navigation targets.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  fetch.rs   │────▶│  corpus.rs   │────▶│  index.rs   │
//! │(CorpusSource│     │(parse_corpus,│     │ (FuzzyIndex)│
//! │   ::load)   │     │ CorpusStats) │     │             │
//! └─────────────┘     └──────────────┘     └──────┬──────┘
//!                                                 │
//! ┌─────────────┐     ┌──────────────┐            │
//! │ suggest.rs  │◀────│  client.rs   │◀───────────┘
//! │ (Suggestion,│     │(SearchClient,│
//! │navigation_  │     │  Readiness)  │
//! │    url)     │     └──────────────┘
//! └─────────────┘
//! ```
//!
//! The load runs at most once per [`SearchClient`]: the first
//! `ensure_loaded` call fetches and indexes the corpus, concurrent callers
//! piggyback on that attempt, and both success and failure are terminal.
//! Queries issued mid-load wait for the outcome; queries with no index
//! present answer with an empty list and never start a load themselves.
//!
//! # Usage
//!
//! ```ignore
//! use talpa::{CorpusSource, SearchClient};
//!
//! let client = SearchClient::new(CorpusSource::parse("search.json"))?;
//! client.ensure_loaded().await;
//!
//! for hit in client.query("filter").await {
//!     println!("{}", client.navigate(&hit.record));
//! }
//! ```

// Module declarations
pub mod client;
pub mod config;
pub mod corpus;
pub mod error;
pub mod fetch;
pub mod fuzzy;
pub mod index;
pub mod normalize;
pub mod suggest;
pub mod types;

// Re-exports for public API
pub use client::{Readiness, SearchClient};
pub use config::SearchConfig;
pub use corpus::{corpus_stats, parse_corpus, CorpusStats};
pub use error::SearchError;
pub use fetch::{default_http_client, CorpusSource};
pub use index::FuzzyIndex;
pub use normalize::normalize;
pub use suggest::{navigation_url, Suggestion};
pub use types::{DocRecord, MatchSpan, SearchField, SearchHit};
