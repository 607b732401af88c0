//! The in-memory fuzzy-search index.
//!
//! Built once from the full corpus, immutable afterwards, shared by every
//! query for the lifetime of the process. There is no clever data structure
//! here: with page-scale corpora a scored linear pass over pre-normalized
//! fields beats anything that needs a build step worth talking about.

use std::cmp::Ordering;

use crate::config::SearchConfig;
use crate::fuzzy::best_match;
use crate::normalize::normalize;
use crate::types::{DocRecord, MatchSpan, SearchField, SearchHit};

/// One record plus its pre-normalized searchable fields.
///
/// Normalization happens exactly once, at build time. The raw record is kept
/// verbatim for delivery; the matcher only ever sees the normalized copies.
#[derive(Debug, Clone)]
struct IndexedRecord {
    record: DocRecord,
    heading: String,
    text: String,
    code: String,
}

impl IndexedRecord {
    fn field_text(&self, field: SearchField) -> &str {
        match field {
            SearchField::Heading => &self.heading,
            SearchField::Text => &self.text,
            SearchField::Code => &self.code,
        }
    }
}

/// Approximate-match index over a documentation corpus.
///
/// Searchable fields are `heading`, `text`, and `code`. A field counts as
/// matching when its score stays within the construction threshold; the hit
/// score is the best (lowest) accepted field score.
#[derive(Debug, Clone)]
pub struct FuzzyIndex {
    entries: Vec<IndexedRecord>,
    threshold: f64,
}

impl FuzzyIndex {
    /// Build an index from parsed corpus records.
    pub fn build(records: Vec<DocRecord>, config: &SearchConfig) -> Self {
        let entries = records
            .into_iter()
            .map(|record| IndexedRecord {
                heading: normalize(&record.heading),
                text: normalize(&record.text),
                code: normalize(&record.code),
                record,
            })
            .collect();

        FuzzyIndex {
            entries,
            threshold: config.threshold,
        }
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run a fuzzy query, returning at most `limit` hits sorted by score
    /// ascending. Ties keep corpus order.
    ///
    /// The query is normalized with the same pipeline as the indexed fields,
    /// so matching is case- and diacritic-insensitive. An empty (or
    /// whitespace-only) query matches nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let pattern: Vec<char> = normalize(query).chars().collect();
        if pattern.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit> = self
            .entries
            .iter()
            .filter_map(|entry| self.match_record(entry, &pattern))
            .collect();

        hits.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
        hits.truncate(limit);
        hits
    }

    /// Score one record against the pattern.
    ///
    /// Every non-empty field is matched independently; accepted fields
    /// contribute their span, and the record scores the minimum of its
    /// accepted fields. No accepted field, no hit.
    fn match_record(&self, entry: &IndexedRecord, pattern: &[char]) -> Option<SearchHit> {
        let mut best: Option<f64> = None;
        let mut matches = Vec::new();

        for field in SearchField::ALL {
            let text = entry.field_text(field);
            if text.is_empty() {
                continue;
            }
            let Some(field_match) = best_match(pattern, text) else {
                continue;
            };
            let score = field_match.score(pattern.len());
            if score > self.threshold {
                continue;
            }
            // A full-distance alignment matched the empty substring; the
            // field still counts, but there is no span to report.
            if field_match.end > field_match.start {
                matches.push(MatchSpan {
                    field,
                    start: field_match.start,
                    end: field_match.end,
                });
            }
            best = Some(match best {
                Some(current) if current <= score => current,
                _ => score,
            });
        }

        best.map(|score| SearchHit {
            record: entry.record.clone(),
            score,
            matches,
        })
    }
}
