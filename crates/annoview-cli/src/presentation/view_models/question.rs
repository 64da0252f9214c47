use serde::Serialize;
use std::fmt;

use super::options::DisplayOptions;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

/// One question as the viewer panel shows it.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionViewModel {
    pub id: String,
    pub group: String,
    pub question: String,
    pub answer: String,
    pub annotation_count: usize,
    pub annotator_count: usize,
    pub annotators: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<String>,
    pub paragraphs: Vec<ParagraphViewModel>,
    /// Rendered highlights in reading order
    pub highlights: Vec<HighlightEntryViewModel>,
    /// Hidden behind an earlier-starting span
    pub discarded: Vec<String>,
    /// Offsets unusable for this answer
    pub rejected: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<AnnotationDetailViewModel>,

    #[serde(skip)]
    pub options: DisplayOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ParagraphViewModel {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub segments: Vec<SegmentViewModel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Plain,
    Highlight,
}

#[derive(Debug, Clone, Serialize)]
pub struct SegmentViewModel {
    pub kind: SegmentKind,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HighlightEntryViewModel {
    pub unique_id: String,
    pub error_type: String,
    pub annotator_id: String,
    pub quoted_text: String,
}

/// Fields of one annotation, shown when it is selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationDetailViewModel {
    pub unique_id: String,
    pub record_id: String,
    pub annotator_id: String,
    pub error_type: String,
    pub quoted_text: String,
    pub start: i64,
    pub end: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criticality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// False when the span lost to an overlap or had unusable offsets
    pub highlighted: bool,
}

/// Rendered instead of a question when the dataset has none.
#[derive(Debug, Clone, Serialize)]
pub struct EmptyStateViewModel {
    pub message: String,
}

impl QuestionViewModel {
    pub fn highlight_index(&self, unique_id: &str) -> Option<usize> {
        self.highlights.iter().position(|h| h.unique_id == unique_id)
    }
}

// --------------------------------------------------------
// Display Trait
// --------------------------------------------------------

impl fmt::Display for QuestionViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::presentation::views::QuestionView;
        write!(f, "{}", QuestionView::new(self, self.options))
    }
}

impl fmt::Display for EmptyStateViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.message)
    }
}
