use serde::Serialize;
use std::fmt;

use super::options::DisplayOptions;

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct QuestionListViewModel {
    pub groups: Vec<GroupEntryViewModel>,
    pub total_questions: usize,
    pub total_annotations: usize,
    pub skipped: SkipSummary,

    #[serde(skip)]
    pub options: DisplayOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupEntryViewModel {
    pub key: String,
    pub annotation_count: usize,
    pub questions: Vec<QuestionEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionEntryViewModel {
    pub id: String,
    pub question: String,
    /// Before overlap filtering (`Err`)
    pub annotation_count: usize,
    /// Distinct annotators (`Ppl`)
    pub annotator_count: usize,
    pub has_conflicts: bool,
}

/// Malformed input left out of the merge.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SkipSummary {
    pub entries: usize,
    pub records: usize,
    pub rejected_entries: usize,
}

impl SkipSummary {
    pub fn is_empty(&self) -> bool {
        self.entries == 0 && self.records == 0 && self.rejected_entries == 0
    }
}

impl QuestionListViewModel {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Question entries in list order.
    pub fn entries(&self) -> impl Iterator<Item = &QuestionEntryViewModel> {
        self.groups.iter().flat_map(|g| g.questions.iter())
    }
}

// --------------------------------------------------------
// Display Trait
// --------------------------------------------------------

impl fmt::Display for QuestionListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::presentation::views::QuestionListView;
        write!(f, "{}", QuestionListView::new(self, self.options))
    }
}
