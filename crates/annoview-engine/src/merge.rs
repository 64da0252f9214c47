use std::collections::{HashMap, HashSet};

use annoview_types::{
    EnrichedAnnotation, MergedQuestion, RawDataset, RawEntry, compose_unique_id,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;

/// What to do when owners disagree on a question's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextConflictPolicy {
    /// Keep the first-seen text and merge everything.
    #[default]
    FirstWins,
    /// Keep the first-seen text, merge everything, record the owner.
    Flag,
    /// Keep the first-seen text, drop the conflicting owner's entry, record the owner.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub separator: char,
    pub fallback_group: String,
    pub text_conflict: TextConflictPolicy,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            separator: '-',
            fallback_group: "others".to_string(),
            text_conflict: TextConflictPolicy::FirstWins,
        }
    }
}

/// Counters collected while merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    pub owners: usize,
    pub entries: usize,
    pub skipped_entries: usize,
    pub skipped_records: usize,
    pub rejected_entries: usize,
    pub questions: usize,
    pub annotations: usize,
}

/// Merge every owner's entries into one question per question id.
///
/// Annotations are appended in owner order, then each owner's record order.
/// Malformed entries and records are skipped; nothing here fails.
pub fn merge_dataset(dataset: &RawDataset, options: &MergeOptions) -> Catalog {
    let mut report = MergeReport {
        owners: dataset.owner_count(),
        ..Default::default()
    };
    let mut questions: Vec<MergedQuestion> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut unique_ids = UniqueIds::default();

    for (owner, question_id, value) in dataset.entries() {
        report.entries += 1;

        let Some(entry) = RawEntry::from_value(value) else {
            debug!(owner, question_id, "skipping malformed entry");
            report.skipped_entries += 1;
            continue;
        };
        if entry.skipped_records > 0 {
            debug!(
                owner,
                question_id,
                skipped = entry.skipped_records,
                "skipping malformed annotation records"
            );
            report.skipped_records += entry.skipped_records;
        }

        let slot = *index.entry(question_id).or_insert_with(|| {
            questions.push(MergedQuestion::new(
                question_id,
                &entry.question,
                &entry.answer,
            ));
            questions.len() - 1
        });
        let merged = &mut questions[slot];

        if !merged.has_same_text(&entry.question, &entry.answer) {
            match options.text_conflict {
                TextConflictPolicy::FirstWins => {}
                TextConflictPolicy::Flag => {
                    warn!(owner, question_id, "question text differs from first annotator");
                    merged.flag_conflict(owner);
                }
                TextConflictPolicy::Reject => {
                    warn!(owner, question_id, "rejecting entry with conflicting question text");
                    merged.flag_conflict(owner);
                    report.rejected_entries += 1;
                    continue;
                }
            }
        }

        for record in entry.annotations {
            let unique_id = unique_ids.issue(owner, &record.id);
            merged
                .annotations
                .push(EnrichedAnnotation::new(record, owner, unique_id));
        }
        merged.add_annotator(owner);
    }

    report.questions = questions.len();
    report.annotations = questions.iter().map(|q| q.annotation_count()).sum();

    info!(
        owners = report.owners,
        questions = report.questions,
        annotations = report.annotations,
        skipped_entries = report.skipped_entries,
        skipped_records = report.skipped_records,
        "merged annotation export"
    );

    Catalog::from_questions(questions, options, report)
}

/// Hands out dataset-wide unique ids.
///
/// `<owner>-<id>` is unique as long as an owner never reuses a record id;
/// repeats get the first free `#2`, `#3`, ... suffix.
#[derive(Default)]
struct UniqueIds {
    issued: HashSet<String>,
}

impl UniqueIds {
    fn issue(&mut self, owner: &str, record_id: &str) -> String {
        let base = compose_unique_id(owner, record_id);
        let mut candidate = base.clone();
        let mut n = 1;
        while self.issued.contains(&candidate) {
            n += 1;
            candidate = format!("{}#{}", base, n);
        }
        self.issued.insert(candidate.clone());
        candidate
    }
}
