//! Shared test utilities and fixtures.

#![allow(dead_code)]

use talpa::{CorpusSource, DocRecord, FuzzyIndex, SearchClient, SearchConfig};

// ============================================================================
// RECORD BUILDERS
// ============================================================================

pub fn make_record(
    chapter: &str,
    heading: &str,
    text: &str,
    code: &str,
    path: &str,
    id: &str,
) -> DocRecord {
    DocRecord {
        chapter: chapter.to_string(),
        heading: heading.to_string(),
        text: text.to_string(),
        code: code.to_string(),
        path: path.to_string(),
        id: id.to_string(),
    }
}

/// A small corpus with the shapes that matter: distinct chapter/heading
/// pairs, section-less pages whose chapter equals their heading, and records
/// with and without code or anchors.
pub fn sample_records() -> Vec<DocRecord> {
    vec![
        make_record(
            "Reference",
            "filter",
            "Subset rows using column values",
            "filter(df, x > 1)",
            "/reference/filter.html",
            "arguments",
        ),
        make_record(
            "Reference",
            "mutate",
            "Create or modify columns",
            "mutate(df, y = x * 2)",
            "/reference/mutate.html",
            "examples",
        ),
        make_record(
            "Articles",
            "Grouped data",
            "Operations on grouped tibbles",
            "",
            "/articles/grouping.html",
            "grouped-data",
        ),
        make_record(
            "Get started",
            "Get started",
            "An overview of the package",
            "",
            "/articles/intro.html",
            "",
        ),
        make_record(
            "Changelog",
            "Changelog",
            "Version history and breaking changes",
            "",
            "/news/index.html",
            "",
        ),
    ]
}

/// Serialize records into the exact JSON shape a site's `search.json` ships.
pub fn corpus_json(records: &[DocRecord]) -> String {
    serde_json::to_string(records).unwrap()
}

// ============================================================================
// INDEX AND CLIENT BUILDERS
// ============================================================================

pub fn config_with(threshold: f64, score_cutoff: f64, limit: usize) -> SearchConfig {
    SearchConfig {
        threshold,
        score_cutoff,
        limit,
        ..SearchConfig::default()
    }
}

pub fn index_with_threshold(records: Vec<DocRecord>, threshold: f64) -> FuzzyIndex {
    let config = SearchConfig {
        threshold,
        ..SearchConfig::default()
    };
    FuzzyIndex::build(records, &config)
}

pub fn sample_index(threshold: f64) -> FuzzyIndex {
    index_with_threshold(sample_records(), threshold)
}

/// Client over a corpus written to a tempdir. The tempdir is handed back so
/// the file outlives the client; dropping it removes the file.
pub fn file_client(
    records: &[DocRecord],
    config: SearchConfig,
) -> (tempfile::TempDir, SearchClient) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("search.json");
    std::fs::write(&path, corpus_json(records)).unwrap();
    let client = SearchClient::with_config(CorpusSource::File(path), config).unwrap();
    (dir, client)
}
