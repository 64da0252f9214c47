use annoview_engine::{OffsetPolicy, PARAGRAPH_SEPARATOR, build_catalog, resolve_question};
use annoview_testing::{DatasetBuilder, fixtures::annotation};
use std::collections::HashSet;

const ANSWER: &str = "Ein Satz mit Umlauten: Grüße.\n\nZweiter Absatz 🎉 hier.\n\n\nDritter.";

fn overlapping_dataset() -> DatasetBuilder {
    DatasetBuilder::new()
        .entry(
            "A",
            "de-010",
            "Frage?",
            ANSWER,
            vec![
                annotation("1", 4, 8, "Linguistic Error"),
                annotation("2", 23, 40, "Cultural Error"),
                annotation("3", -5, 3, "Both"),
                annotation("4", 60, 500, "Cultural Error"),
            ],
        )
        .entry(
            "B",
            "de-010",
            "Frage?",
            ANSWER,
            vec![
                annotation("1", 4, 12, "Both"),
                annotation("2", 29, 31, "Linguistic Error"),
                annotation("3", 45, 46, "Cultural Error"),
                annotation("4", 10, 10, "Both"),
            ],
        )
}

#[test]
fn test_segments_cover_answer_under_both_policies() {
    let catalog = build_catalog(&overlapping_dataset().build());
    let question = catalog.find("de-010").unwrap();

    for policy in [OffsetPolicy::Clamp, OffsetPolicy::Strict] {
        let answer = resolve_question(question, policy);
        let rebuilt: Vec<String> = answer.paragraphs.iter().map(|p| p.text()).collect();
        assert_eq!(rebuilt.join(PARAGRAPH_SEPARATOR), ANSWER, "{:?}", policy);
        assert!(
            answer
                .paragraphs
                .iter()
                .flat_map(|p| p.segments.iter())
                .all(|s| !s.text().is_empty())
        );
    }
}

#[test]
fn test_accepted_spans_never_overlap() {
    let catalog = build_catalog(&overlapping_dataset().build());
    let question = catalog.find("de-010").unwrap();
    let answer = resolve_question(question, OffsetPolicy::Clamp);

    for pair in answer.accepted.windows(2) {
        assert!(pair[0].end <= pair[1].start, "{:?}", pair);
    }

    let every: usize = answer.accepted.len() + answer.discarded.len() + answer.rejected.len();
    assert_eq!(every, question.annotation_count());

    let highlighted: HashSet<&str> = answer.highlights().map(|a| a.unique_id.as_str()).collect();
    assert_eq!(highlighted.len(), answer.highlight_count());
}

#[test]
fn test_unique_ids_across_catalog() {
    let builder = overlapping_dataset().entry(
        "A",
        "kr-001",
        "Q",
        "text",
        vec![annotation("1", 0, 1, "Both"), annotation("1", 1, 2, "Both")],
    );
    let catalog = build_catalog(&builder.build());

    let ids: Vec<&str> = catalog
        .questions()
        .flat_map(|q| q.annotations.iter().map(|a| a.unique_id.as_str()))
        .collect();
    let distinct: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(ids.len(), distinct.len());
}

#[test]
fn test_resolution_is_idempotent() {
    let catalog = build_catalog(&overlapping_dataset().build());
    let question = catalog.find("de-010").unwrap();

    let first = resolve_question(question, OffsetPolicy::Clamp);
    let second = resolve_question(question, OffsetPolicy::Clamp);
    assert_eq!(first, second);
}

#[test]
fn test_strict_rejects_what_clamp_trims() {
    let catalog = build_catalog(&overlapping_dataset().build());
    let question = catalog.find("de-010").unwrap();

    let strict = resolve_question(question, OffsetPolicy::Strict);
    let mut rejected: Vec<&str> = strict.rejected.iter().map(|a| a.unique_id.as_str()).collect();
    rejected.sort();
    assert_eq!(rejected, vec!["A-3", "A-4", "B-4"]);

    let clamp = resolve_question(question, OffsetPolicy::Clamp);
    let rejected: Vec<&str> = clamp.rejected.iter().map(|a| a.unique_id.as_str()).collect();
    assert_eq!(rejected, vec!["B-4"]);
}
