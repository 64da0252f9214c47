use annoview_types::MergedQuestion;

use crate::catalog::Catalog;

/// The question shown before the user picks one: the first question of the
/// first group, in list order. `None` for an empty catalog.
pub fn select_default(catalog: &Catalog) -> Option<&MergedQuestion> {
    catalog
        .groups()
        .first()
        .and_then(|group| group.questions.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::{MergeOptions, merge_dataset};
    use annoview_types::RawDataset;
    use serde_json::json;

    #[test]
    fn test_default_is_first_question_of_first_group() {
        let dataset = RawDataset::from_value(json!({"main": {
            "A": {
                "kr-002": {"question": "Q", "answer": "a"},
                "de-009": {"question": "Q", "answer": "a"},
                "de-001": {"question": "Q", "answer": "a"}
            }
        }}));
        let catalog = merge_dataset(&dataset, &MergeOptions::default());

        assert_eq!(select_default(&catalog).map(|q| q.id.as_str()), Some("de-009"));
    }

    #[test]
    fn test_empty_catalog_has_no_default() {
        let dataset = RawDataset::from_value(json!({"main": {}}));
        let catalog = merge_dataset(&dataset, &MergeOptions::default());

        assert!(catalog.is_empty());
        assert!(select_default(&catalog).is_none());
    }
}
