//! Suggestion rendering and result navigation.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::types::DocRecord;

/// The URL Standard's query percent-encode set.
const QUERY: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'<').add(b'>');

/// A hit formatted for the suggestion list.
///
/// Shows where the match lives rather than what matched: the chapter, and the
/// heading when it adds anything. Section-less pages index their title as both
/// chapter and heading, so repeating it would just stutter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub chapter: String,
    pub heading: String,
}

impl Suggestion {
    pub fn from_record(record: &DocRecord) -> Self {
        Suggestion {
            chapter: record.chapter.clone(),
            heading: record.heading.clone(),
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.chapter == self.heading {
            write!(f, "{}", self.chapter)
        } else {
            write!(f, "{} /\n{}", self.chapter, self.heading)
        }
    }
}

/// Target location for a selected hit: the record's page, the query that
/// found it, and the matched section's anchor.
///
/// The query rides along in `?q=` so the destination page can highlight it.
/// Only the query is percent-encoded; `path` and `id` come from the site
/// generator and are used as given.
pub fn navigation_url(record: &DocRecord, query: &str) -> String {
    format!(
        "{}?q={}#{}",
        record.path,
        utf8_percent_encode(query, QUERY),
        record.id
    )
}
