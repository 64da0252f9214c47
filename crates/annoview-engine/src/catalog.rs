use std::collections::BTreeMap;

use annoview_types::{EnrichedAnnotation, Group, MergedQuestion};

use crate::merge::{MergeOptions, MergeReport};

/// Merged questions bucketed into groups, sorted by group key.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    groups: Vec<Group>,
    report: MergeReport,
}

impl Catalog {
    pub(crate) fn from_questions(
        questions: Vec<MergedQuestion>,
        options: &MergeOptions,
        report: MergeReport,
    ) -> Self {
        let mut buckets: BTreeMap<String, Vec<MergedQuestion>> = BTreeMap::new();
        for question in questions {
            let key = group_key(&question.id, options.separator, &options.fallback_group);
            buckets.entry(key).or_default().push(question);
        }

        let groups = buckets
            .into_iter()
            .map(|(key, questions)| Group { key, questions })
            .collect();

        Self { groups, report }
    }

    /// Groups in ascending key order; questions keep merge order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn report(&self) -> &MergeReport {
        &self.report
    }

    /// All questions in list order (group by group).
    pub fn questions(&self) -> impl Iterator<Item = &MergedQuestion> {
        self.groups.iter().flat_map(|g| g.questions.iter())
    }

    pub fn question_count(&self) -> usize {
        self.groups.iter().map(|g| g.questions.len()).sum()
    }

    pub fn find(&self, question_id: &str) -> Option<&MergedQuestion> {
        self.questions().find(|q| q.id == question_id)
    }

    /// Key of the group holding `question_id`.
    pub fn group_of(&self, question_id: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|g| g.questions.iter().any(|q| q.id == question_id))
            .map(|g| g.key.as_str())
    }

    pub fn find_annotation(
        &self,
        unique_id: &str,
    ) -> Option<(&MergedQuestion, &EnrichedAnnotation)> {
        self.questions()
            .find_map(|q| q.find_annotation(unique_id).map(|a| (q, a)))
    }
}

/// Group key of a question id: the text before the first `separator`.
///
/// Ids without a separator, or with an empty prefix, fall back to
/// `fallback`.
pub fn group_key(question_id: &str, separator: char, fallback: &str) -> String {
    match question_id.split_once(separator) {
        Some((prefix, _)) if !prefix.is_empty() => prefix.to_string(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_key() {
        assert_eq!(group_key("de-003", '-', "others"), "de");
        assert_eq!(group_key("kr-001-b", '-', "others"), "kr");
        assert_eq!(group_key("xyz", '-', "others"), "others");
        assert_eq!(group_key("-003", '-', "others"), "others");
        assert_eq!(group_key("jp_01", '_', "misc"), "jp");
    }

    #[test]
    fn test_groups_sorted_questions_in_merge_order() {
        let questions = vec![
            MergedQuestion::new("kr-002", "Q", "A"),
            MergedQuestion::new("de-001", "Q", "A"),
            MergedQuestion::new("kr-001", "Q", "A"),
            MergedQuestion::new("plain", "Q", "A"),
        ];
        let catalog = Catalog::from_questions(
            questions,
            &MergeOptions::default(),
            MergeReport::default(),
        );

        let keys: Vec<&str> = catalog.groups().iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["de", "kr", "others"]);

        let ids: Vec<&str> = catalog.questions().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["de-001", "kr-002", "kr-001", "plain"]);
        assert_eq!(catalog.question_count(), 4);
        assert_eq!(catalog.group_of("plain"), Some("others"));
        assert_eq!(catalog.group_of("kr-001"), Some("kr"));
        assert_eq!(catalog.group_of("jp-001"), None);
    }
}
