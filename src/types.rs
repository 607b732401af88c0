// Copyright 2025-present The talpa authors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a documentation search corpus.
//!
//! A corpus is a flat sequence of [`DocRecord`]s, one per addressable section
//! of the site. Records arrive verbatim from the site generator's
//! `search.json` and are never mutated after parsing; everything the search
//! layer computes (normalized field text, match spans, scores) lives in
//! separate structures that point back here.
//!
//! # Invariants
//!
//! - **MatchSpan**: `start < end` and `end <= field.chars().count()` for the
//!   normalized field text it annotates. Spans are character offsets, not
//!   byte offsets, so they survive multi-byte text.
//! - **SearchHit**: `score` is in `[0, 1]`, lower is closer. Hits delivered
//!   to consumers additionally satisfy `score <= score_cutoff`.

use serde::{Deserialize, Serialize};

/// One searchable unit of the documentation site.
///
/// The `path`/`id` pair forms the navigation target: `path` is the page URL
/// and `id` the anchor within it. `chapter` and `heading` drive suggestion
/// rendering; `heading`, `text`, and `code` are the searchable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocRecord {
    pub chapter: String,
    pub heading: String,
    /// Body content. Empty for heading-only sections.
    #[serde(default)]
    pub text: String,
    /// Code-sample content. Empty for prose-only sections.
    #[serde(default)]
    pub code: String,
    pub path: String,
    pub id: String,
}

impl DocRecord {
    /// Raw text of one searchable field.
    #[inline]
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Heading => &self.heading,
            SearchField::Text => &self.text,
            SearchField::Code => &self.code,
        }
    }
}

/// Which record field a match landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Heading,
    Text,
    Code,
}

impl SearchField {
    /// Every searchable field, in the order the matcher visits them.
    pub const ALL: [SearchField; 3] = [SearchField::Heading, SearchField::Text, SearchField::Code];

    /// Convert to lowercase string representation.
    ///
    /// Matches the serde `rename_all = "lowercase"` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Heading => "heading",
            SearchField::Text => "text",
            SearchField::Code => "code",
        }
    }
}

/// Where in a field the best approximate match sits.
///
/// Offsets index the *normalized* field text (see [`crate::normalize`]) in
/// characters. `[start, end)` is the substring the matcher aligned the query
/// against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSpan {
    pub field: SearchField,
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    /// Span length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check the span is non-empty and lies within a field of `field_len`
    /// characters.
    #[inline]
    pub fn is_well_formed(&self, field_len: usize) -> bool {
        self.start < self.end && self.end <= field_len
    }
}

/// A scored match delivered to the suggestion consumer.
///
/// Carries the underlying record by value: corpora are page-scale, so the
/// clone at delivery time is cheaper than threading index lifetimes through
/// every consumer.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub record: DocRecord,
    /// Similarity score in `[0, 1]`; 0 is an exact substring match.
    pub score: f64,
    /// One span per accepted field with a non-degenerate alignment. Usually
    /// non-empty; a permissive threshold can accept a field whose best
    /// alignment matched nothing, which reports no span.
    pub matches: Vec<MatchSpan>,
}
