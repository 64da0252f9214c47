use crate::presentation::view_models::{
    CommandResultViewModel, DisplayOptions, GroupEntryViewModel, Guidance, QuestionEntryViewModel,
    QuestionListViewModel, SkipSummary, StatusBadge,
};
use annoview_engine::Catalog;
use annoview_types::MergedQuestion;

fn present_entry(question: &MergedQuestion) -> QuestionEntryViewModel {
    QuestionEntryViewModel {
        id: question.id.clone(),
        question: question.question.clone(),
        annotation_count: question.annotation_count(),
        annotator_count: question.annotator_count(),
        has_conflicts: !question.conflicts.is_empty(),
    }
}

/// Groups and questions in display order, without console wrapping.
pub fn build_question_list(catalog: &Catalog, options: DisplayOptions) -> QuestionListViewModel {
    let groups = catalog
        .groups()
        .iter()
        .map(|group| GroupEntryViewModel {
            key: group.key.clone(),
            annotation_count: group.annotation_count(),
            questions: group.questions.iter().map(present_entry).collect(),
        })
        .collect();

    let report = catalog.report();
    QuestionListViewModel {
        groups,
        total_questions: catalog.question_count(),
        total_annotations: report.annotations,
        skipped: SkipSummary {
            entries: report.skipped_entries,
            records: report.skipped_records,
            rejected_entries: report.rejected_entries,
        },
        options,
    }
}

pub fn present_question_list(
    catalog: &Catalog,
    options: DisplayOptions,
) -> CommandResultViewModel<QuestionListViewModel> {
    let content = build_question_list(catalog, options);

    if content.is_empty() {
        return CommandResultViewModel::new(content).with_suggestion(
            Guidance::new("Point annoview at an annotation export")
                .with_command("annoview --data <PATH> list"),
        );
    }

    let badge = StatusBadge::success(format!(
        "{} question(s) in {} group(s)",
        content.total_questions,
        content.groups.len()
    ));
    let first_id = content.entries().next().map(|e| e.id.clone());

    let mut result = CommandResultViewModel::new(content).with_badge(badge);
    if let Some(id) = first_id {
        result = result.with_suggestion(
            Guidance::new("Open a question with its highlighted spans")
                .with_command(format!("annoview show {}", id)),
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use annoview_engine::build_catalog;
    use annoview_testing::SampleFiles;
    use annoview_types::RawDataset;
    use serde_json::json;

    #[test]
    fn test_sample_list_view_model() {
        let dataset = SampleFiles::new()
            .load_dataset("culture_export.json")
            .unwrap();
        let catalog = build_catalog(&dataset);
        let result = present_question_list(&catalog, DisplayOptions::default());

        let keys: Vec<&str> = result.content.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["de", "kr", "others"]);
        assert_eq!(result.content.total_questions, 4);
        assert_eq!(result.content.skipped.entries, 2);
        assert_eq!(result.content.skipped.records, 1);

        let kr_001 = result.content.entries().find(|e| e.id == "kr-001").unwrap();
        assert_eq!(kr_001.annotation_count, 4);
        assert_eq!(kr_001.annotator_count, 2);

        assert!(result.badge.is_some());
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("annoview show de-003")
        );
    }

    #[test]
    fn test_empty_catalog_has_no_badge() {
        let catalog = build_catalog(&RawDataset::from_value(json!({"main": {}})));
        let result = present_question_list(&catalog, DisplayOptions::default());

        assert!(result.content.is_empty());
        assert!(result.badge.is_none());
        assert_eq!(result.suggestions.len(), 1);
    }
}
