//! Question-array normalization of model output.

use serde_json::{Map, Value};
use tracing::warn;

use crate::normalize::fields::{field, string_value, unsigned_value};
use crate::normalize::fragments::parse_fragments;
use crate::normalize::{clean_response, json_object_fragments, preview, NormalizeError, Outcome};
use crate::questions::mock::mock_questions;
use crate::questions::models::{Difficulty, Question};

const DEFAULT_SKILL_AREA: &str = "General";
/// Wrapper keys a model sometimes nests the list under.
const LIST_KEYS: &[&str] = &["questions", "data", "items"];

/// Normalizes raw model text into a question list.
///
/// - empty / blank → `Err(EmptyResponse)`
/// - strict parse → array, wrapped list, or single object coerced to one element (`Parsed`)
/// - otherwise brace-matched `{...}` fragments are reassembled into an array (`Recovered`)
/// - nothing usable → the built-in mock set (`Fallback`)
pub fn normalize_questions(raw: Option<&str>) -> Result<Outcome<Vec<Question>>, NormalizeError> {
    let cleaned = clean_response(raw)?;

    let (items, strict) = match serde_json::from_str::<Value>(cleaned) {
        Ok(value) => (question_items(value), true),
        Err(_) => {
            let fragments = json_object_fragments(cleaned);
            let values = parse_fragments(&fragments);
            (question_items(Value::Array(values)), false)
        }
    };

    let questions: Vec<Question> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| item.as_object().map(|obj| question_from_object(obj, i)))
        .collect();

    if questions.is_empty() {
        warn!(
            "No questions recoverable from model output, using mock set: {}",
            preview(cleaned)
        );
        return Ok(Outcome::Fallback(mock_questions()));
    }

    if strict {
        Ok(Outcome::Parsed(questions))
    } else {
        warn!("Recovered {} question(s) from malformed model output", questions.len());
        Ok(Outcome::Recovered(questions))
    }
}

/// Resolves the shapes a model may answer with into a flat list of items.
fn question_items(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items.into_iter().flat_map(unwrap_list).collect(),
        Value::Object(_) => unwrap_list(value),
        _ => Vec::new(),
    }
}

/// `{"questions": [...]}` → the inner list; any other object → itself.
fn unwrap_list(value: Value) -> Vec<Value> {
    if let Value::Object(object) = &value {
        if let Some(Value::Array(items)) = field(object, LIST_KEYS) {
            return items.clone();
        }
    }
    vec![value]
}

fn question_from_object(object: &Map<String, Value>, index: usize) -> Question {
    let question_id = unsigned_value(field(object, &["question_id", "questionId", "id"]))
        .and_then(|id| u32::try_from(id).ok())
        .unwrap_or(index as u32 + 1);

    Question {
        question_id,
        question: string_value(field(object, &["question", "question_text", "text"]))
            .unwrap_or_default(),
        difficulty: string_value(field(object, &["difficulty"]))
            .map(|d| Difficulty::from_label(&d))
            .unwrap_or_default(),
        skill_area: string_value(field(object, &["skill_area", "skillArea", "skill"]))
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SKILL_AREA.to_string()),
    }
}
