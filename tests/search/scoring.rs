//! Scoring semantics: threshold acceptance, score arithmetic, and the
//! min-of-fields rule.

use talpa::normalize;
use talpa::SearchField;

use super::common::{index_with_threshold, make_record, sample_index};

#[test]
fn score_is_edit_distance_over_pattern_length() {
    let index = index_with_threshold(
        vec![make_record("Reference", "verbs", "", "", "/ref/verbs.html", "")],
        0.25,
    );

    // One edit against a five-char pattern.
    let hits = index.search("verbz", 20);
    assert_eq!(hits.len(), 1);
    assert!(
        (hits[0].score - 0.2).abs() < 1e-9,
        "expected 1/5, got {}",
        hits[0].score
    );
}

#[test]
fn threshold_is_inclusive() {
    let records = vec![make_record("Reference", "data", "", "", "/ref/data.html", "")];

    // "datx" sits at exactly one edit from "data": score 1/4.
    let at_boundary = index_with_threshold(records.clone(), 0.25);
    assert_eq!(at_boundary.search("datx", 20).len(), 1);

    let below_boundary = index_with_threshold(records, 0.2);
    assert!(below_boundary.search("datx", 20).is_empty());
}

#[test]
fn hit_takes_the_best_field_score() {
    let records = vec![make_record(
        "Reference",
        "summarise",
        "use summarize to collapse groups",
        "",
        "/ref/summarise.html",
        "usage",
    )];
    let index = index_with_threshold(records, 0.2);

    // Heading needs an edit, text matches exactly. Both fields are within
    // the threshold, so both contribute spans, and the hit takes the zero.
    let hits = index.search("summarize", 20);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, 0.0);
    assert_eq!(hits[0].matches.len(), 2);

    let fields: Vec<SearchField> = hits[0].matches.iter().map(|m| m.field).collect();
    assert!(fields.contains(&SearchField::Heading));
    assert!(fields.contains(&SearchField::Text));
}

#[test]
fn diacritics_fold_in_both_directions() {
    let index = index_with_threshold(
        vec![make_record(
            "Offices",
            "Tōkyō",
            "the tokyo office",
            "",
            "/offices/tokyo.html",
            "",
        )],
        0.1,
    );

    for query in ["tokyo", "Tōkyō", "TOKYO"] {
        let hits = index.search(query, 20);
        assert_eq!(hits.len(), 1, "query {:?} should match", query);
        assert_eq!(hits[0].score, 0.0);
    }
}

#[test]
fn records_with_no_searchable_text_never_match() {
    let index = index_with_threshold(
        vec![make_record("Reference", "", "", "", "/ref/empty.html", "")],
        1.0,
    );
    assert!(index.search("anything", 20).is_empty());
}

#[test]
fn spans_point_at_the_matched_substring() {
    let index = sample_index(0.1);
    let hits = index.search("column", 20);
    assert!(!hits.is_empty());

    for hit in &hits {
        for span in &hit.matches {
            let field: Vec<char> = normalize(hit.record.field(span.field)).chars().collect();
            let matched: String = field[span.start..span.end].iter().collect();
            assert_eq!(matched, "column", "span should cover the exact match");
        }
    }
}
