// Copyright 2025-present The talpa authors
// SPDX-License-Identifier: Apache-2.0

//! Sellers' approximate substring search.
//!
//! Classic Levenshtein asks "how far apart are these two strings?". Sellers'
//! variant asks the question a search box actually needs: "how close does
//! this pattern get to *any substring* of the text?". The only change is the
//! first DP row: zero-initialized, so an alignment may start at any text
//! position for free. Matches can therefore begin at every column, which is
//! also why there is no early-exit here - a later column can always open a
//! fresh, better match.
//!
//! Memory is O(pattern) per field: two distance columns plus two start
//! columns that remember where the best alignment ending at each cell began.
//! The start columns replace a full traceback table.

/// Outcome of matching a pattern against one field's text.
///
/// `distance` is the minimum edit distance between the pattern and any
/// substring of the text; `[start, end)` is that substring in character
/// offsets. `distance` never exceeds the pattern length because aligning
/// against the empty substring costs exactly one deletion per pattern
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMatch {
    pub distance: usize,
    pub start: usize,
    pub end: usize,
}

impl FieldMatch {
    /// Similarity score in `[0, 1]`: edit distance as a fraction of the
    /// pattern length. 0 means the pattern occurs verbatim somewhere in the
    /// text; 1 means nothing in the text resembles it.
    #[inline]
    pub fn score(&self, pattern_len: usize) -> f64 {
        if pattern_len == 0 {
            return 1.0;
        }
        self.distance as f64 / pattern_len as f64
    }
}

/// Find the substring of `text` closest to `pattern`.
///
/// Returns `None` only for an empty pattern. Ties on distance keep the
/// earliest end position, and within one end position the latest start, so
/// the reported span is the leftmost tightest match and the result is
/// deterministic.
///
/// Runs in O(|pattern| * |text|) time. Both strings are compared by Unicode
/// scalar value; callers that want case or diacritic insensitivity normalize
/// first.
pub fn best_match(pattern: &[char], text: &str) -> Option<FieldMatch> {
    if pattern.is_empty() {
        return None;
    }
    let m = pattern.len();

    // Column j holds, per pattern prefix i, the best distance of that prefix
    // against any substring ending at text boundary j, plus where that
    // substring starts.
    let mut prev_dist: Vec<usize> = (0..=m).collect();
    let mut prev_start: Vec<usize> = vec![0; m + 1];
    let mut cur_dist: Vec<usize> = vec![0; m + 1];
    let mut cur_start: Vec<usize> = vec![0; m + 1];

    // The empty substring at boundary 0 is a valid (worst-case) alignment.
    let mut best = FieldMatch {
        distance: m,
        start: 0,
        end: 0,
    };

    for (jj, tc) in text.chars().enumerate() {
        let j = jj + 1;
        cur_dist[0] = 0;
        cur_start[0] = j;

        for i in 1..=m {
            let cost = usize::from(pattern[i - 1] != tc);

            // Diagonal: consume one pattern char and one text char.
            let mut dist = prev_dist[i - 1] + cost;
            let mut start = prev_start[i - 1];

            // Up: skip a pattern char without consuming text.
            let up = cur_dist[i - 1] + 1;
            if up < dist || (up == dist && cur_start[i - 1] > start) {
                dist = up;
                start = cur_start[i - 1];
            }

            // Left: absorb an extra text char into the substring.
            let left = prev_dist[i] + 1;
            if left < dist || (left == dist && prev_start[i] > start) {
                dist = left;
                start = prev_start[i];
            }

            cur_dist[i] = dist;
            cur_start[i] = start;
        }

        // Strict improvement only, so equal-distance matches keep the
        // earliest end.
        if cur_dist[m] < best.distance {
            best = FieldMatch {
                distance: cur_dist[m],
                start: cur_start[m],
                end: j,
            };
        }

        std::mem::swap(&mut prev_dist, &mut cur_dist);
        std::mem::swap(&mut prev_start, &mut cur_start);
    }

    Some(best)
}
