use serde_json::{Map, Value};

use crate::{AnnotationRecord, Result};

/// The export as loaded: `main -> owner -> question id -> entry`.
///
/// Kept as untyped JSON so one malformed entry never rejects the document.
/// Key order follows the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDataset {
    owners: Map<String, Value>,
}

impl RawDataset {
    /// Take the `main` object of an export. Anything else is an empty dataset.
    pub fn from_value(root: Value) -> Self {
        let owners = match root {
            Value::Object(mut obj) => match obj.remove("main") {
                Some(Value::Object(main)) => main,
                _ => Map::new(),
            },
            _ => Map::new(),
        };
        Self { owners }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(root))
    }

    pub fn owner_count(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    /// Every `(owner, question id, raw entry)` triple in document order.
    /// Owners whose value is not an object contribute nothing.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str, &Value)> + '_ {
        self.owners.iter().flat_map(|(owner, questions)| {
            questions.as_object().into_iter().flat_map(move |questions| {
                questions
                    .iter()
                    .map(move |(question_id, entry)| (owner.as_str(), question_id.as_str(), entry))
            })
        })
    }
}

/// One owner's entry for one question, after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEntry {
    pub question: String,
    pub answer: String,
    pub annotations: Vec<AnnotationRecord>,
    /// Non-null annotation values that could not be read as records
    pub skipped_records: usize,
}

impl RawEntry {
    /// Validate an entry. `None` when it is not an object or has no string
    /// `question`/`answer`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let question = obj.get("question")?.as_str()?;
        let answer = obj.get("answer")?.as_str()?;

        let raw_records = normalize_annotations(obj.get("annotations"));
        let total = raw_records.len();
        let annotations: Vec<AnnotationRecord> = raw_records
            .into_iter()
            .filter_map(AnnotationRecord::from_value)
            .collect();

        Some(Self {
            question: question.to_string(),
            answer: answer.to_string(),
            skipped_records: total - annotations.len(),
            annotations,
        })
    }
}

/// Coerce an entry's annotation collection into an ordered sequence.
///
/// The collection lives at `annotations.annotations` and is either an array
/// (possibly sparse, with nulls) or an object keyed by record key. Objects
/// keep their key order. Nulls are dropped; any other shape is empty.
pub fn normalize_annotations(container: Option<&Value>) -> Vec<&Value> {
    match container.and_then(|c| c.get("annotations")) {
        Some(Value::Array(items)) => items.iter().filter(|v| !v.is_null()).collect(),
        Some(Value::Object(keyed)) => keyed.values().filter(|v| !v.is_null()).collect(),
        _ => Vec::new(),
    }
}
