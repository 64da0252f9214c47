use serde::Serialize;

use crate::EnrichedAnnotation;

/// All annotators' work on one question, merged by question id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedQuestion {
    pub id: String,
    pub question: String,
    pub answer: String,
    /// Owner iteration order, then each owner's original record order.
    pub annotations: Vec<EnrichedAnnotation>,
    /// Distinct annotators in first-contribution order.
    pub annotators: Vec<String>,
    /// Annotators whose question/answer text differed from the seeded text.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub conflicts: Vec<String>,
}

impl MergedQuestion {
    pub fn new(id: &str, question: &str, answer: &str) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            annotations: Vec::new(),
            annotators: Vec::new(),
            conflicts: Vec::new(),
        }
    }

    /// Record an annotator. Idempotent.
    pub fn add_annotator(&mut self, annotator_id: &str) {
        if !self.annotators.iter().any(|a| a == annotator_id) {
            self.annotators.push(annotator_id.to_string());
        }
    }

    pub fn flag_conflict(&mut self, annotator_id: &str) {
        if !self.conflicts.iter().any(|a| a == annotator_id) {
            self.conflicts.push(annotator_id.to_string());
        }
    }

    pub fn has_same_text(&self, question: &str, answer: &str) -> bool {
        self.question == question && self.answer == answer
    }

    /// Total annotations before overlap filtering
    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    pub fn annotator_count(&self) -> usize {
        self.annotators.len()
    }

    pub fn find_annotation(&self, unique_id: &str) -> Option<&EnrichedAnnotation> {
        self.annotations.iter().find(|a| a.unique_id == unique_id)
    }
}

/// Display bucket of questions sharing an id prefix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Group {
    pub key: String,
    pub questions: Vec<MergedQuestion>,
}

impl Group {
    pub fn annotation_count(&self) -> usize {
        self.questions.iter().map(|q| q.annotation_count()).sum()
    }
}
