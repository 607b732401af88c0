// Copyright 2025-present The talpa authors
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the talpa command-line interface.
//!
//! Two subcommands: `search` to query a documentation corpus and `inspect`
//! to summarize one. Both take a corpus location that is either an
//! `http(s)://` URL or a local path, defaulting to the conventional
//! `search.json` next to the current directory.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "talpa",
    about = "Fuzzy search over a documentation site's search corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query a corpus and display matching sections
    Search {
        /// Search query
        query: String,

        /// Corpus location: an http(s) URL or a local path
        #[arg(short, long, default_value = "search.json")]
        corpus: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Per-field acceptance threshold, lower is stricter
        #[arg(long, default_value = "0.1")]
        threshold: f64,

        /// Discard hits scoring above this bound
        #[arg(long, default_value = "0.75")]
        score_cutoff: f64,
    },

    /// Summarize a corpus without searching it
    Inspect {
        /// Corpus location: an http(s) URL or a local path
        #[arg(default_value = "search.json")]
        corpus: String,
    },
}
