//! Fixtures for sample data generation and placement.
//!
//! - `DatasetBuilder` assembles export documents in code
//! - `SampleFiles` locates the bundled exports under `samples/`

use annoview_types::RawDataset;
use anyhow::{Context, Result};
use serde_json::{Map, Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// One annotation record as it appears in an export.
pub fn annotation(id: &str, start: i64, end: i64, error_type: &str) -> Value {
    json!({
        "id": id,
        "start": start,
        "end": end,
        "type": error_type,
    })
}

/// Fluent builder for `{ "main": { owner: { question_id: entry } } }`.
///
/// # Example
/// ```
/// use annoview_testing::{DatasetBuilder, fixtures::annotation};
///
/// let dataset = DatasetBuilder::new()
///     .entry("A", "kr-001", "Q?", "hello world", vec![annotation("1", 0, 5, "Both")])
///     .build();
/// assert_eq!(dataset.owner_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    main: Map<String, Value>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry whose annotations are stored as an array.
    pub fn entry(
        self,
        owner: &str,
        question_id: &str,
        question: &str,
        answer: &str,
        annotations: Vec<Value>,
    ) -> Self {
        self.raw_entry(
            owner,
            question_id,
            json!({
                "question": question,
                "answer": answer,
                "annotations": { "annotations": annotations },
            }),
        )
    }

    /// Add an entry whose annotations are stored as a keyed object, the way
    /// realtime-database exports store pushed children.
    pub fn keyed_entry(
        self,
        owner: &str,
        question_id: &str,
        question: &str,
        answer: &str,
        annotations: Vec<(&str, Value)>,
    ) -> Self {
        let keyed: Map<String, Value> = annotations
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect();
        self.raw_entry(
            owner,
            question_id,
            json!({
                "question": question,
                "answer": answer,
                "annotations": { "annotations": keyed },
            }),
        )
    }

    /// Add an arbitrary (possibly malformed) entry value.
    pub fn raw_entry(mut self, owner: &str, question_id: &str, entry: Value) -> Self {
        let questions = self
            .main
            .entry(owner.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(questions) = questions {
            questions.insert(question_id.to_string(), entry);
        }
        self
    }

    pub fn to_value(&self) -> Value {
        json!({ "main": self.main })
    }

    pub fn build(&self) -> RawDataset {
        RawDataset::from_value(self.to_value())
    }
}

/// Sample export manager.
pub struct SampleFiles {
    samples_dir: PathBuf,
}

impl Default for SampleFiles {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleFiles {
    /// Samples live in `crates/annoview-testing/samples/`.
    pub fn new() -> Self {
        Self {
            samples_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples"),
        }
    }

    pub fn path(&self, sample_name: &str) -> PathBuf {
        self.samples_dir.join(sample_name)
    }

    pub fn read(&self, sample_name: &str) -> Result<String> {
        let path = self.path(sample_name);
        fs::read_to_string(&path)
            .with_context(|| format!("Failed to read sample: {}", path.display()))
    }

    pub fn load_dataset(&self, sample_name: &str) -> Result<RawDataset> {
        let text = self.read(sample_name)?;
        RawDataset::from_json_str(&text)
            .with_context(|| format!("Failed to parse sample: {}", sample_name))
    }

    pub fn copy_to(&self, sample_name: &str, dest: &Path) -> Result<()> {
        fs::copy(self.path(sample_name), dest)?;
        Ok(())
    }
}
