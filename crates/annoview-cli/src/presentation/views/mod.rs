// Views turn ViewModels into terminal text: layout, colour and truncation

pub mod config;
pub mod list;
pub mod question;

pub use config::ConfigView;
pub use list::QuestionListView;
pub use question::{AnnotationDetailView, QuestionView};
