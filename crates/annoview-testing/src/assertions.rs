//! Custom assertions over the CLI's JSON output.
//!
//! Every command wraps its payload as `{ "content": ..., "suggestions": [...] }`.

use anyhow::{Context, Result};
use serde_json::Value;

fn groups(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["groups"]
        .as_array()
        .context("Expected 'content.groups' array in JSON")
}

/// Assert the listed group keys, in order.
pub fn assert_group_keys(json: &Value, expected: &[&str]) -> Result<()> {
    let keys: Vec<&str> = groups(json)?
        .iter()
        .filter_map(|g| g["key"].as_str())
        .collect();

    if keys != expected {
        anyhow::bail!("Expected groups {:?}, got {:?}", expected, keys);
    }

    Ok(())
}

/// Assert the listed question ids across all groups, in order.
pub fn assert_question_ids(json: &Value, expected: &[&str]) -> Result<()> {
    let mut ids = Vec::new();
    for (i, group) in groups(json)?.iter().enumerate() {
        let questions = group["questions"]
            .as_array()
            .with_context(|| format!("Group {} missing questions", i))?;
        ids.extend(questions.iter().filter_map(|q| q["id"].as_str()));
    }

    if ids != expected {
        anyhow::bail!("Expected questions {:?}, got {:?}", expected, ids);
    }

    Ok(())
}

/// Assert a listed question's `Err` and `Ppl` counts.
pub fn assert_question_counts(
    json: &Value,
    question_id: &str,
    annotations: u64,
    annotators: u64,
) -> Result<()> {
    let question = groups(json)?
        .iter()
        .filter_map(|g| g["questions"].as_array())
        .flatten()
        .find(|q| q["id"] == question_id)
        .with_context(|| format!("Question {} not listed", question_id))?;

    let actual = (
        question["annotation_count"].as_u64().unwrap_or_default(),
        question["annotator_count"].as_u64().unwrap_or_default(),
    );
    if actual != (annotations, annotators) {
        anyhow::bail!(
            "Question {}: expected Err {} / Ppl {}, got Err {} / Ppl {}",
            question_id,
            annotations,
            annotators,
            actual.0,
            actual.1
        );
    }

    Ok(())
}

/// Unique ids of the highlighted segments of a `show` result, in text order.
pub fn highlighted_ids(json: &Value) -> Result<Vec<String>> {
    let paragraphs = json["content"]["paragraphs"]
        .as_array()
        .context("Expected 'content.paragraphs' array in JSON")?;

    Ok(paragraphs
        .iter()
        .filter_map(|p| p["segments"].as_array())
        .flatten()
        .filter(|s| s["kind"] == "highlight")
        .filter_map(|s| s["unique_id"].as_str().map(String::from))
        .collect())
}

/// Assert that concatenating every segment of every paragraph, with the
/// paragraph separator between paragraphs, reproduces `answer`.
pub fn assert_covers_answer(json: &Value, answer: &str) -> Result<()> {
    let paragraphs = json["content"]["paragraphs"]
        .as_array()
        .context("Expected 'content.paragraphs' array in JSON")?;

    let rebuilt: Vec<String> = paragraphs
        .iter()
        .map(|p| {
            p["segments"]
                .as_array()
                .map(|segments| {
                    segments
                        .iter()
                        .filter_map(|s| s["text"].as_str())
                        .collect::<String>()
                })
                .unwrap_or_default()
        })
        .collect();

    let rebuilt = rebuilt.join("\n\n");
    if rebuilt != answer {
        anyhow::bail!("Segments do not cover the answer:\n{:?}\n{:?}", rebuilt, answer);
    }

    Ok(())
}
