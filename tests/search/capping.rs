//! Result capping: the limit is applied after scoring, so the cap always
//! keeps the closest hits.

use talpa::DocRecord;

use super::common::{index_with_threshold, make_record};

fn verb_corpus(count: usize) -> Vec<DocRecord> {
    (0..count)
        .map(|i| {
            make_record(
                "Reference",
                &format!("verbs {}", i),
                "shared verbs text",
                "",
                &format!("/reference/verbs-{}.html", i),
                "usage",
            )
        })
        .collect()
}

#[test]
fn results_never_exceed_the_limit() {
    let index = index_with_threshold(verb_corpus(12), 0.1);

    assert_eq!(index.search("verbs", 20).len(), 12);
    assert_eq!(index.search("verbs", 5).len(), 5);
    assert_eq!(index.search("verbs", 1).len(), 1);
}

#[test]
fn zero_limit_yields_nothing() {
    let index = index_with_threshold(verb_corpus(3), 0.1);
    assert!(index.search("verbs", 0).is_empty());
}

#[test]
fn the_cap_keeps_the_closest_hits() {
    let records = vec![
        make_record("A", "vrbs", "", "", "/a.html", ""),
        make_record("B", "verbs", "", "", "/b.html", ""),
    ];
    let index = index_with_threshold(records, 0.25);

    // Both match, but only the exact one fits under a limit of 1.
    let hits = index.search("verbs", 1);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].record.heading, "verbs");
    assert_eq!(hits[0].score, 0.0);
}

#[test]
fn corpus_order_breaks_score_ties_under_the_cap() {
    let index = index_with_threshold(verb_corpus(4), 0.1);

    let hits = index.search("verbs", 2);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].record.heading, "verbs 0");
    assert_eq!(hits[1].record.heading, "verbs 1");
}
