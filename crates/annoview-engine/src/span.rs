use annoview_types::{EnrichedAnnotation, slice_utf16, utf16_len};
use serde::{Deserialize, Serialize};

/// Blank line between paragraphs of an answer
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// How annotation offsets outside the answer text are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OffsetPolicy {
    /// Clamp offsets into `[0, len]`; drop spans that end up empty.
    #[default]
    Clamp,
    /// Drop any span that is not `0 <= start < end <= len`.
    Strict,
}

impl OffsetPolicy {
    /// Bring `[start, end)` into a text of `len` UTF-16 units, or `None` if
    /// the span cannot be shown.
    pub fn apply(self, start: i64, end: i64, len: usize) -> Option<(usize, usize)> {
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        let (start, end) = match self {
            OffsetPolicy::Clamp => (start.clamp(0, len), end.clamp(0, len)),
            OffsetPolicy::Strict => {
                if start < 0 || end > len {
                    return None;
                }
                (start, end)
            }
        };
        (start < end).then_some((start as usize, end as usize))
    }
}

/// An annotation with offsets validated against its answer text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSpan {
    pub start: usize,
    pub end: usize,
    pub annotation: EnrichedAnnotation,
}

/// Outcome of overlap resolution over one question's annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpanSelection {
    /// Sorted by start, pairwise non-overlapping
    pub accepted: Vec<ResolvedSpan>,
    /// Lost to an earlier-starting accepted span
    pub discarded: Vec<EnrichedAnnotation>,
    /// Offsets unusable under the offset policy
    pub rejected: Vec<EnrichedAnnotation>,
}

/// First-fit interval selection.
///
/// Spans are stable-sorted by start; a span is accepted iff it starts at or
/// after the end of the last accepted one. Earlier start wins, ties go to
/// merge order. Error type never matters.
pub fn select_non_overlapping(
    annotations: &[EnrichedAnnotation],
    text_len: usize,
    policy: OffsetPolicy,
) -> SpanSelection {
    let mut selection = SpanSelection::default();
    let mut candidates: Vec<ResolvedSpan> = Vec::with_capacity(annotations.len());

    for annotation in annotations {
        match policy.apply(annotation.record.start, annotation.record.end, text_len) {
            Some((start, end)) => candidates.push(ResolvedSpan {
                start,
                end,
                annotation: annotation.clone(),
            }),
            None => selection.rejected.push(annotation.clone()),
        }
    }

    candidates.sort_by_key(|span| span.start);

    let mut last_end: Option<usize> = None;
    for span in candidates {
        if last_end.is_some_and(|end| span.start < end) {
            selection.discarded.push(span.annotation);
            continue;
        }
        last_end = Some(span.end);
        selection.accepted.push(span);
    }

    selection
}

/// A paragraph of the answer and its window `[start, end)` in UTF-16 offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParagraphWindow<'a> {
    pub index: usize,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split on blank lines, tracking each paragraph's absolute offsets.
pub fn split_paragraphs(answer: &str) -> Vec<ParagraphWindow<'_>> {
    let separator_len = utf16_len(PARAGRAPH_SEPARATOR);
    let mut offset = 0;

    answer
        .split(PARAGRAPH_SEPARATOR)
        .enumerate()
        .map(|(index, text)| {
            let start = offset;
            let end = start + utf16_len(text);
            offset = end + separator_len;
            ParagraphWindow {
                index,
                text,
                start,
                end,
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    Plain {
        text: String,
    },
    Highlight {
        text: String,
        annotation: EnrichedAnnotation,
    },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } | Segment::Highlight { text, .. } => text,
        }
    }

    pub fn annotation(&self) -> Option<&EnrichedAnnotation> {
        match self {
            Segment::Plain { .. } => None,
            Segment::Highlight { annotation, .. } => Some(annotation),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub segments: Vec<Segment>,
}

impl Paragraph {
    /// Concatenated segment text; equals the source paragraph.
    pub fn text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }
}

/// Render-ready answer of one question.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedAnswer {
    pub accepted: Vec<ResolvedSpan>,
    pub discarded: Vec<EnrichedAnnotation>,
    pub rejected: Vec<EnrichedAnnotation>,
    pub paragraphs: Vec<Paragraph>,
}

impl ResolvedAnswer {
    /// Highlighted annotations in reading order
    pub fn highlights(&self) -> impl Iterator<Item = &EnrichedAnnotation> {
        self.paragraphs
            .iter()
            .flat_map(|p| p.segments.iter())
            .filter_map(Segment::annotation)
    }

    pub fn highlight_count(&self) -> usize {
        self.highlights().count()
    }

    pub fn is_highlighted(&self, unique_id: &str) -> bool {
        self.highlights().any(|a| a.unique_id == unique_id)
    }
}

/// Resolve overlaps and slice `answer` into plain/highlight segments per
/// paragraph.
///
/// A highlight belongs to the paragraph its start falls in and is cut at
/// that paragraph's end. Spans starting inside a paragraph separator are
/// accepted but not rendered. Empty segments are omitted.
pub fn resolve_answer(
    answer: &str,
    annotations: &[EnrichedAnnotation],
    policy: OffsetPolicy,
) -> ResolvedAnswer {
    let selection = select_non_overlapping(annotations, utf16_len(answer), policy);

    let paragraphs = split_paragraphs(answer)
        .into_iter()
        .map(|window| slice_paragraph(window, &selection.accepted))
        .collect();

    ResolvedAnswer {
        accepted: selection.accepted,
        discarded: selection.discarded,
        rejected: selection.rejected,
        paragraphs,
    }
}

fn push_plain(segments: &mut Vec<Segment>, text: &str) {
    if !text.is_empty() {
        segments.push(Segment::Plain {
            text: text.to_string(),
        });
    }
}

fn slice_paragraph(window: ParagraphWindow<'_>, accepted: &[ResolvedSpan]) -> Paragraph {
    let para_len = window.end - window.start;
    let mut segments = Vec::new();
    let mut cursor = 0;

    // `accepted` is already sorted by start
    for span in accepted
        .iter()
        .filter(|s| s.start >= window.start && s.start < window.end)
    {
        let local_start = (span.start - window.start).max(cursor);
        let local_end = (span.end - window.start).min(para_len);

        if local_end <= local_start {
            continue;
        }
        push_plain(&mut segments, slice_utf16(window.text, cursor, local_start));

        // Empty when both edges fall inside one surrogate pair
        let text = slice_utf16(window.text, local_start, local_end);
        if !text.is_empty() {
            segments.push(Segment::Highlight {
                text: text.to_string(),
                annotation: span.annotation.clone(),
            });
        }
        cursor = local_end;
    }

    push_plain(&mut segments, slice_utf16(window.text, cursor, para_len));

    Paragraph {
        index: window.index,
        start: window.start,
        end: window.end,
        segments,
    }
}

/// Text an annotation points at: the exported quote if present, otherwise
/// the clamped slice of the answer.
pub fn quoted_text(answer: &str, annotation: &EnrichedAnnotation) -> String {
    if let Some(text) = &annotation.record.text {
        return text.clone();
    }
    OffsetPolicy::Clamp
        .apply(
            annotation.record.start,
            annotation.record.end,
            utf16_len(answer),
        )
        .map(|(start, end)| slice_utf16(answer, start, end).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use annoview_types::{AnnotationRecord, ErrorType};

    fn ann(owner: &str, id: &str, start: i64, end: i64) -> EnrichedAnnotation {
        EnrichedAnnotation::new(
            AnnotationRecord {
                id: id.to_string(),
                start,
                end,
                error_type: ErrorType::Linguistic,
                explanation: None,
                suggestion: None,
                criticality: None,
                text: None,
            },
            owner,
            format!("{}-{}", owner, id),
        )
    }

    fn ids(spans: &[ResolvedSpan]) -> Vec<&str> {
        spans.iter().map(|s| s.annotation.unique_id.as_str()).collect()
    }

    #[test]
    fn test_overlap_first_start_wins() {
        let anns = vec![ann("A", "2", 3, 8), ann("A", "1", 0, 5)];
        let selection = select_non_overlapping(&anns, 20, OffsetPolicy::Clamp);

        assert_eq!(ids(&selection.accepted), vec!["A-1"]);
        assert_eq!(selection.discarded.len(), 1);
        assert_eq!(selection.discarded[0].unique_id, "A-2");
    }

    #[test]
    fn test_adjacent_spans_both_accepted() {
        let anns = vec![ann("A", "1", 0, 5), ann("B", "1", 5, 8)];
        let selection = select_non_overlapping(&anns, 20, OffsetPolicy::Clamp);
        assert_eq!(ids(&selection.accepted), vec!["A-1", "B-1"]);
    }

    #[test]
    fn test_equal_starts_keep_merge_order() {
        let anns = vec![ann("B", "1", 2, 4), ann("A", "1", 2, 9)];
        let selection = select_non_overlapping(&anns, 20, OffsetPolicy::Clamp);
        assert_eq!(ids(&selection.accepted), vec!["B-1"]);
    }

    #[test]
    fn test_nested_span_is_discarded() {
        let anns = vec![ann("A", "1", 0, 10), ann("B", "1", 2, 4), ann("C", "1", 10, 12)];
        let selection = select_non_overlapping(&anns, 20, OffsetPolicy::Clamp);
        assert_eq!(ids(&selection.accepted), vec!["A-1", "C-1"]);
    }

    #[test]
    fn test_offset_policy() {
        assert_eq!(OffsetPolicy::Clamp.apply(-3, 4, 10), Some((0, 4)));
        assert_eq!(OffsetPolicy::Clamp.apply(8, 40, 10), Some((8, 10)));
        assert_eq!(OffsetPolicy::Clamp.apply(12, 40, 10), None);
        assert_eq!(OffsetPolicy::Clamp.apply(5, 5, 10), None);
        assert_eq!(OffsetPolicy::Strict.apply(-3, 4, 10), None);
        assert_eq!(OffsetPolicy::Strict.apply(8, 11, 10), None);
        assert_eq!(OffsetPolicy::Strict.apply(6, 2, 10), None);
        assert_eq!(OffsetPolicy::Strict.apply(0, 10, 10), Some((0, 10)));
    }

    #[test]
    fn test_split_paragraphs_windows() {
        let windows = split_paragraphs("ab\n\ncde\n\n\nf");
        let spans: Vec<(usize, usize, &str)> =
            windows.iter().map(|w| (w.start, w.end, w.text)).collect();
        assert_eq!(spans, vec![(0, 2, "ab"), (4, 7, "cde"), (9, 11, "\nf")]);
    }

    #[test]
    fn test_resolve_single_paragraph() {
        let resolved = resolve_answer(
            "The quick brown fox",
            &[ann("A", "1", 4, 9), ann("A", "2", 6, 12)],
            OffsetPolicy::Clamp,
        );

        assert_eq!(resolved.paragraphs.len(), 1);
        let segments = &resolved.paragraphs[0].segments;
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], Segment::Plain { text: "The ".to_string() });
        assert_eq!(segments[1].text(), "quick");
        assert_eq!(segments[1].annotation().unwrap().unique_id, "A-1");
        assert_eq!(segments[2].text(), " brown fox");
        assert_eq!(resolved.discarded.len(), 1);
    }

    #[test]
    fn test_resolve_across_paragraphs() {
        let answer = "First para.\n\nSecond para here.";
        // "Second" starts at 13
        let resolved = resolve_answer(
            answer,
            &[ann("A", "1", 0, 5), ann("B", "1", 13, 19)],
            OffsetPolicy::Clamp,
        );

        assert_eq!(resolved.paragraphs.len(), 2);
        assert_eq!(resolved.paragraphs[0].segments[0].text(), "First");
        assert_eq!(resolved.paragraphs[1].segments[0].text(), "Second");
        assert_eq!(resolved.paragraphs[1].start, 13);
        assert_eq!(resolved.highlight_count(), 2);
    }

    #[test]
    fn test_highlight_cut_at_paragraph_end() {
        let answer = "abc def\n\nghi";
        let resolved = resolve_answer(answer, &[ann("A", "1", 4, 11)], OffsetPolicy::Clamp);

        assert_eq!(resolved.paragraphs[0].segments[1].text(), "def");
        assert_eq!(resolved.paragraphs[0].text(), "abc def");
        assert_eq!(resolved.paragraphs[1].text(), "ghi");
        assert_eq!(resolved.paragraphs[1].segments.len(), 1);
    }

    #[test]
    fn test_span_starting_in_separator_is_not_rendered() {
        let resolved = resolve_answer("ab\n\ncd", &[ann("A", "1", 2, 5)], OffsetPolicy::Clamp);
        assert_eq!(resolved.accepted.len(), 1);
        assert_eq!(resolved.highlight_count(), 0);
        assert_eq!(resolved.paragraphs[0].text(), "ab");
        assert_eq!(resolved.paragraphs[1].text(), "cd");
    }

    #[test]
    fn test_out_of_range_offsets() {
        let anns = vec![ann("A", "1", -2, 3), ann("A", "2", 4, 100), ann("A", "3", 50, 60)];

        let clamped = resolve_answer("hello world", &anns, OffsetPolicy::Clamp);
        assert_eq!(ids(&clamped.accepted), vec!["A-1", "A-2"]);
        assert_eq!(clamped.rejected.len(), 1);
        assert_eq!(clamped.paragraphs[0].segments[0].text(), "hel");
        assert_eq!(clamped.paragraphs[0].segments[2].text(), "o world");
        assert_eq!(clamped.paragraphs[0].text(), "hello world");

        let strict = resolve_answer("hello world", &anns, OffsetPolicy::Strict);
        assert!(strict.accepted.is_empty());
        assert_eq!(strict.rejected.len(), 3);
        assert_eq!(strict.paragraphs[0].segments.len(), 1);
    }

    #[test]
    fn test_multibyte_text() {
        let answer = "오늘은 추석입니다.\n\n송편을 먹어요.";
        let resolved = resolve_answer(
            answer,
            &[ann("A", "1", 4, 6), ann("A", "2", 12, 15)],
            OffsetPolicy::Clamp,
        );

        assert_eq!(resolved.paragraphs[0].segments[1].text(), "추석");
        assert_eq!(resolved.paragraphs[1].segments[0].text(), "송편을");
        for (paragraph, source) in resolved.paragraphs.iter().zip(answer.split("\n\n")) {
            assert_eq!(paragraph.text(), source);
        }
    }

    #[test]
    fn test_offsets_count_utf16_units() {
        let answer = "🎉 Chuseok is a holiday";
        let resolved = resolve_answer(answer, &[ann("A", "1", 3, 10)], OffsetPolicy::Clamp);

        let segments = &resolved.paragraphs[0].segments;
        assert_eq!(segments[0].text(), "🎉 ");
        assert_eq!(segments[1].text(), "Chuseok");
        assert_eq!(segments[2].text(), " is a holiday");
        assert_eq!(quoted_text(answer, &ann("A", "1", 3, 10)), "Chuseok");
    }

    #[test]
    fn test_paragraph_windows_after_astral_text() {
        let windows = split_paragraphs("🎉🎉\n\nab");
        let spans: Vec<(usize, usize)> = windows.iter().map(|w| (w.start, w.end)).collect();
        assert_eq!(spans, vec![(0, 4), (6, 8)]);

        let resolved = resolve_answer("🎉🎉\n\nab", &[ann("A", "1", 6, 7)], OffsetPolicy::Strict);
        assert_eq!(resolved.paragraphs[1].segments[0].text(), "a");
        assert!(resolved.rejected.is_empty());
    }

    #[test]
    fn test_span_edge_inside_surrogate_pair_keeps_coverage() {
        let answer = "a🎉b";
        let resolved = resolve_answer(answer, &[ann("A", "1", 2, 4)], OffsetPolicy::Clamp);
        assert_eq!(resolved.paragraphs[0].text(), answer);
        assert_eq!(resolved.paragraphs[0].segments[1].text(), "b");
    }

    #[test]
    fn test_empty_answer() {
        let resolved = resolve_answer("", &[ann("A", "1", 0, 3)], OffsetPolicy::Clamp);
        assert_eq!(resolved.paragraphs.len(), 1);
        assert!(resolved.paragraphs[0].segments.is_empty());
        assert_eq!(resolved.rejected.len(), 1);
    }

    #[test]
    fn test_quoted_text_prefers_export() {
        let mut annotation = ann("A", "1", 0, 5);
        assert_eq!(quoted_text("hello world", &annotation), "hello");

        annotation.record.text = Some("HELLO".to_string());
        assert_eq!(quoted_text("hello world", &annotation), "HELLO");

        let outside = ann("A", "2", 40, 50);
        assert_eq!(quoted_text("hello", &outside), "");
    }
}
