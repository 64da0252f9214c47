use serde::{Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Category of an annotated error span.
///
/// Exports only ever carry the three known labels, but unknown labels are
/// kept verbatim so that nothing the annotator wrote is lost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorType {
    Linguistic,
    Cultural,
    Both,
    Other(String),
}

impl ErrorType {
    pub fn from_label(label: &str) -> Self {
        match label {
            "Linguistic Error" => ErrorType::Linguistic,
            "Cultural Error" => ErrorType::Cultural,
            "Both" => ErrorType::Both,
            other => ErrorType::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ErrorType::Linguistic => "Linguistic Error",
            ErrorType::Cultural => "Cultural Error",
            ErrorType::Both => "Both",
            ErrorType::Other(label) => label,
        }
    }
}

impl Default for ErrorType {
    fn default() -> Self {
        ErrorType::Other(String::new())
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ErrorType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One annotator's record of an error span, as found in the export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationRecord {
    pub id: String,
    /// Inclusive start offset, in UTF-16 code units. May be out of range in bad exports.
    pub start: i64,
    /// Exclusive end offset, in UTF-16 code units.
    pub end: i64,
    #[serde(rename = "type")]
    pub error_type: ErrorType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criticality: Option<String>,
    /// Span text as quoted by the annotation tool
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl AnnotationRecord {
    /// Read a record from its raw JSON value.
    ///
    /// Returns `None` for anything that is not an object or lacks a usable
    /// `id`, `start` or `end`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;

        let id = obj.get("id").and_then(scalar_to_string)?;
        let start = obj.get("start").and_then(integer)?;
        let end = obj.get("end").and_then(integer)?;

        let error_type = obj
            .get("type")
            .and_then(Value::as_str)
            .map(ErrorType::from_label)
            .unwrap_or_default();

        Some(Self {
            id,
            start,
            end,
            error_type,
            explanation: optional_text(obj.get("explanation")),
            suggestion: optional_text(obj.get("suggestion")),
            criticality: obj.get("criticality").and_then(scalar_to_string),
            text: optional_text(obj.get("text")),
        })
    }
}

/// A record tagged with the annotator it came from.
///
/// `unique_id` is the identity used for selection; it is unique across the
/// whole merged dataset even when two records have identical content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedAnnotation {
    #[serde(flatten)]
    pub record: AnnotationRecord,
    pub annotator_id: String,
    pub unique_id: String,
}

impl EnrichedAnnotation {
    pub fn new(record: AnnotationRecord, annotator_id: &str, unique_id: String) -> Self {
        Self {
            record,
            annotator_id: annotator_id.to_string(),
            unique_id,
        }
    }

    pub fn error_type(&self) -> &ErrorType {
        &self.record.error_type
    }
}

/// Composite identity of an annotation: `<annotator>-<record id>`
pub fn compose_unique_id(annotator_id: &str, record_id: &str) -> String {
    format!("{}-{}", annotator_id, record_id)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn optional_text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

// Offsets occasionally arrive as floats ("12.0") from spreadsheet round-trips.
fn integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    (f.fract() == 0.0 && f.is_finite()).then_some(f as i64)
}
