/// The two mutable slots of the viewer: which question is open and which of
/// its annotations is shown in detail.
///
/// Changing the question always drops the annotation, so a detail panel can
/// never point into a question that is no longer shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    item: Option<String>,
    annotation: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on `question_id`, or nothing for an empty dataset.
    pub fn starting_at(question_id: Option<&str>) -> Self {
        Self {
            item: question_id.map(str::to_string),
            annotation: None,
        }
    }

    pub fn item(&self) -> Option<&str> {
        self.item.as_deref()
    }

    pub fn annotation(&self) -> Option<&str> {
        self.annotation.as_deref()
    }

    pub fn set_item(&mut self, question_id: &str) {
        self.item = Some(question_id.to_string());
        self.annotation = None;
    }

    /// No-op without a selected question.
    pub fn select_annotation(&mut self, unique_id: &str) {
        if self.item.is_some() {
            self.annotation = Some(unique_id.to_string());
        }
    }

    pub fn clear_annotation(&mut self) {
        self.annotation = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changing_question_clears_annotation() {
        let mut selection = SelectionState::new();
        selection.set_item("kr-001");
        selection.select_annotation("annotator_a-2");
        assert_eq!(selection.annotation(), Some("annotator_a-2"));

        selection.set_item("kr-002");
        assert_eq!(selection.item(), Some("kr-002"));
        assert_eq!(selection.annotation(), None);
    }

    #[test]
    fn test_reselecting_same_question_clears_annotation() {
        let mut selection = SelectionState::starting_at(Some("de-003"));
        selection.select_annotation("annotator_c-1");
        selection.set_item("de-003");
        assert_eq!(selection.annotation(), None);
    }

    #[test]
    fn test_close_detail() {
        let mut selection = SelectionState::starting_at(Some("de-003"));
        selection.select_annotation("annotator_c-1");
        selection.clear_annotation();
        assert_eq!(selection.item(), Some("de-003"));
        assert_eq!(selection.annotation(), None);
    }

    #[test]
    fn test_empty_selection_ignores_annotation() {
        let mut selection = SelectionState::starting_at(None);
        selection.select_annotation("annotator_c-1");
        assert_eq!(selection, SelectionState::new());
    }
}
