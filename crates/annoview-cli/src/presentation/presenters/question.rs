use crate::presentation::view_models::{
    AnnotationDetailViewModel, CommandResultViewModel, DisplayOptions, EmptyStateViewModel,
    Guidance, HighlightEntryViewModel, ParagraphViewModel, QuestionViewModel, SegmentKind,
    SegmentViewModel, StatusBadge,
};
use annoview_engine::{ResolvedAnswer, Segment, quoted_text};
use annoview_types::{EnrichedAnnotation, MergedQuestion};

pub const EMPTY_STATE_MESSAGE: &str = "No annotation data found";

fn present_segment(segment: &Segment) -> SegmentViewModel {
    match segment {
        Segment::Plain { text } => SegmentViewModel {
            kind: SegmentKind::Plain,
            text: text.clone(),
            unique_id: None,
            error_type: None,
        },
        Segment::Highlight { text, annotation } => SegmentViewModel {
            kind: SegmentKind::Highlight,
            text: text.clone(),
            unique_id: Some(annotation.unique_id.clone()),
            error_type: Some(annotation.error_type().label().to_string()),
        },
    }
}

pub fn present_annotation_detail(
    question: &MergedQuestion,
    annotation: &EnrichedAnnotation,
    answer: &ResolvedAnswer,
) -> AnnotationDetailViewModel {
    let record = &annotation.record;
    AnnotationDetailViewModel {
        unique_id: annotation.unique_id.clone(),
        record_id: record.id.clone(),
        annotator_id: annotation.annotator_id.clone(),
        error_type: record.error_type.label().to_string(),
        quoted_text: quoted_text(&question.answer, annotation),
        start: record.start,
        end: record.end,
        explanation: record.explanation.clone(),
        criticality: record.criticality.clone(),
        suggestion: record.suggestion.clone(),
        highlighted: answer.is_highlighted(&annotation.unique_id),
    }
}

/// Viewer panel content for `question`, detail closed.
pub fn present_question(
    question: &MergedQuestion,
    group: &str,
    answer: &ResolvedAnswer,
    options: DisplayOptions,
) -> QuestionViewModel {
    let paragraphs = answer
        .paragraphs
        .iter()
        .map(|p| ParagraphViewModel {
            index: p.index,
            start: p.start,
            end: p.end,
            segments: p.segments.iter().map(present_segment).collect(),
        })
        .collect();

    let highlights = answer
        .highlights()
        .map(|a| HighlightEntryViewModel {
            unique_id: a.unique_id.clone(),
            error_type: a.error_type().label().to_string(),
            annotator_id: a.annotator_id.clone(),
            quoted_text: quoted_text(&question.answer, a),
        })
        .collect();

    let ids = |list: &[EnrichedAnnotation]| -> Vec<String> {
        list.iter().map(|a| a.unique_id.clone()).collect()
    };

    QuestionViewModel {
        id: question.id.clone(),
        group: group.to_string(),
        question: question.question.clone(),
        answer: question.answer.clone(),
        annotation_count: question.annotation_count(),
        annotator_count: question.annotator_count(),
        annotators: question.annotators.clone(),
        conflicts: question.conflicts.clone(),
        paragraphs,
        highlights,
        discarded: ids(&answer.discarded),
        rejected: ids(&answer.rejected),
        selected: None,
        options,
    }
}

/// `show` output: the viewer panel plus, when asked for, one annotation's
/// detail. An unknown annotation id is a warning, not an error.
pub fn present_show(
    question: &MergedQuestion,
    group: &str,
    answer: &ResolvedAnswer,
    annotation_id: Option<&str>,
    options: DisplayOptions,
) -> CommandResultViewModel<QuestionViewModel> {
    let mut content = present_question(question, group, answer, options);
    let mut badge = None;

    if let Some(unique_id) = annotation_id {
        match question.find_annotation(unique_id) {
            Some(annotation) => {
                content.selected = Some(present_annotation_detail(question, annotation, answer));
            }
            None => {
                badge = Some(StatusBadge::warning(format!(
                    "Annotation not found in {}: {}",
                    question.id, unique_id
                )));
            }
        }
    }

    if badge.is_none() && !question.conflicts.is_empty() {
        badge = Some(StatusBadge::warning(format!(
            "Question text differs for: {}",
            question.conflicts.join(", ")
        )));
    }

    let first_highlight = content.highlights.first().map(|h| h.unique_id.clone());
    let mut result = CommandResultViewModel::new(content);
    if let Some(badge) = badge {
        result = result.with_badge(badge);
    }
    if annotation_id.is_none()
        && let Some(unique_id) = first_highlight
    {
        result = result.with_suggestion(
            Guidance::new("Show the details of a highlighted span").with_command(format!(
                "annoview show {} --annotation {}",
                question.id, unique_id
            )),
        );
    }
    result
}

pub fn present_empty_state() -> CommandResultViewModel<EmptyStateViewModel> {
    CommandResultViewModel::new(EmptyStateViewModel {
        message: EMPTY_STATE_MESSAGE.to_string(),
    })
    .with_suggestion(
        Guidance::new("Point annoview at an annotation export")
            .with_command("annoview --data <PATH> show"),
    )
}
