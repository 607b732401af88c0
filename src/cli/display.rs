// Copyright 2025-present The talpa authors
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the talpa CLI.
//!
//! Plain ANSI, nothing themed. Respects `NO_COLOR` and keeps output unstyled
//! when stdout is not a TTY, so piped results stay clean.

use talpa::normalize::normalize;
use talpa::types::{MatchSpan, SearchHit};

/// Characters of context kept on each side of a highlighted span.
const SNIPPET_CONTEXT: usize = 30;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Check whether styled output is wanted (NO_COLOR plus TTY detection).
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in a style when `color` is on.
pub fn styled(style: &str, text: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", style, text, colors::RESET)
    } else {
        text.to_string()
    }
}

/// Fixed-width score column. Zero is an exact match and gets the loud color.
pub fn score_value(score: f64, color: bool) -> String {
    let rendered = format!("{:>5.2}", score);
    if !color {
        return rendered;
    }
    let style = if score == 0.0 {
        colors::GREEN
    } else if score <= 0.25 {
        colors::YELLOW
    } else {
        colors::DIM
    };
    format!("{}{}{}", style, rendered, colors::RESET)
}

/// Render the matched region of one span with surrounding context.
///
/// Slices the normalized field text, the same view the matcher scored, so the
/// char offsets line up exactly. The matched region is bolded; context beyond
/// `SNIPPET_CONTEXT` chars is dropped behind an ellipsis.
pub fn highlight_snippet(hit: &SearchHit, span: &MatchSpan, color: bool) -> String {
    let field: Vec<char> = normalize(hit.record.field(span.field)).chars().collect();
    let start = span.start.min(field.len());
    let end = span.end.clamp(start, field.len());

    let lead_from = start.saturating_sub(SNIPPET_CONTEXT);
    let tail_to = (end + SNIPPET_CONTEXT).min(field.len());

    let mut out = String::new();
    if lead_from > 0 {
        out.push_str("...");
    }
    out.push_str(&field[lead_from..start].iter().collect::<String>());
    let matched: String = field[start..end].iter().collect();
    out.push_str(&styled(colors::BOLD, &matched, color));
    out.push_str(&field[end..tail_to].iter().collect::<String>());
    if tail_to < field.len() {
        out.push_str("...");
    }
    out
}
