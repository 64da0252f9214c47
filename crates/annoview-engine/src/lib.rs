// Engine module - merging and span resolution
// This layer sits between the raw export (types) and CLI presentation

pub mod catalog;
pub mod merge;
pub mod selection;
pub mod span;

pub use catalog::{Catalog, group_key};
pub use merge::{MergeOptions, MergeReport, TextConflictPolicy, merge_dataset};
pub use selection::select_default;
pub use span::{
    OffsetPolicy, PARAGRAPH_SEPARATOR, Paragraph, ParagraphWindow, ResolvedAnswer, ResolvedSpan,
    Segment, SpanSelection, quoted_text, resolve_answer, select_non_overlapping,
    split_paragraphs,
};

use annoview_types::{MergedQuestion, RawDataset};

// Façade API - Stable public interface for CLI layer

/// Merge a raw export with default options
pub fn build_catalog(dataset: &RawDataset) -> Catalog {
    merge_dataset(dataset, &MergeOptions::default())
}

/// Resolve one question's answer into render-ready paragraphs
pub fn resolve_question(question: &MergedQuestion, policy: OffsetPolicy) -> ResolvedAnswer {
    resolve_answer(&question.answer, &question.annotations, policy)
}
