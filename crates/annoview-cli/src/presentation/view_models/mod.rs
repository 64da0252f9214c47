pub mod common;
pub mod config;
pub mod list;
pub mod options;
pub mod question;
pub mod result;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::ConfigViewModel;
pub use list::{GroupEntryViewModel, QuestionEntryViewModel, QuestionListViewModel, SkipSummary};
pub use options::DisplayOptions;
pub use question::{
    AnnotationDetailViewModel, EmptyStateViewModel, HighlightEntryViewModel, ParagraphViewModel,
    QuestionViewModel, SegmentKind, SegmentViewModel,
};
pub use result::CommandResultViewModel;
