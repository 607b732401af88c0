//! Corpus payload parsing and summary statistics.
//!
//! The corpus is the site generator's `search.json`: a flat JSON array of
//! [`DocRecord`]s. Parsing is strict about the shape (an array, with
//! `chapter`/`heading`/`path`/`id` present) and lenient about content
//! (`text` and `code` default to empty).

use std::collections::HashSet;

use crate::error::SearchError;
use crate::types::DocRecord;

/// Parse a raw `search.json` payload into document records.
pub fn parse_corpus(raw: &str) -> Result<Vec<DocRecord>, SearchError> {
    let records: Vec<DocRecord> = serde_json::from_str(raw)?;
    Ok(records)
}

/// Shape summary of a corpus, for the `inspect` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusStats {
    /// Total document records.
    pub records: usize,
    /// Distinct `chapter` values.
    pub chapters: usize,
    /// Distinct target pages (`path` values).
    pub pages: usize,
    /// Records carrying a non-empty anchor.
    pub anchored: usize,
    /// Records with code-sample content.
    pub with_code: usize,
}

/// Count the distinct chapters, pages, and anchors in a corpus.
pub fn corpus_stats(records: &[DocRecord]) -> CorpusStats {
    let mut chapters: HashSet<&str> = HashSet::new();
    let mut pages: HashSet<&str> = HashSet::new();
    let mut anchored = 0;
    let mut with_code = 0;

    for record in records {
        chapters.insert(record.chapter.as_str());
        pages.insert(record.path.as_str());
        if !record.id.is_empty() {
            anchored += 1;
        }
        if !record.code.is_empty() {
            with_code += 1;
        }
    }

    CorpusStats {
        records: records.len(),
        chapters: chapters.len(),
        pages: pages.len(),
        anchored,
        with_code,
    }
}
