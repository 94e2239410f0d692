//! Feedback-shaped normalization of model output.

use serde_json::{Map, Value};
use tracing::warn;

use crate::feedback::models::FeedbackResult;
use crate::normalize::fields::{field, string_list};
use crate::normalize::{clean_response, preview, NormalizeError, Outcome};

const MAX_SCORE: f64 = 100.0;

/// Normalizes raw model text into a `FeedbackResult`.
///
/// - empty / blank → `Err(EmptyResponse)`
/// - a JSON object → fields read with defaults (`Parsed`)
/// - anything else → the cleaned text becomes `feedback` verbatim, lists empty,
///   score absent (`Recovered`)
pub fn normalize_feedback(raw: Option<&str>) -> Result<Outcome<FeedbackResult>, NormalizeError> {
    let cleaned = clean_response(raw)?;

    match serde_json::from_str::<Value>(cleaned) {
        Ok(Value::Object(object)) => Ok(Outcome::Parsed(from_object(&object, cleaned))),
        _ => {
            warn!(
                "Feedback response is not a JSON object, using raw text: {}",
                preview(cleaned)
            );
            Ok(Outcome::Recovered(FeedbackResult {
                feedback: cleaned.to_string(),
                ..Default::default()
            }))
        }
    }
}

/// Canned feedback returned when no provider is configured.
pub fn sample_feedback() -> FeedbackResult {
    FeedbackResult {
        feedback: "This is a sample feedback. Please configure GEMINI_API_KEY for AI-generated feedback.".to_string(),
        strengths: vec![
            "Good structure in your answer".to_string(),
            "Relevant examples provided".to_string(),
        ],
        improvements: vec![
            "Could be more detailed".to_string(),
            "Consider adding more technical depth".to_string(),
        ],
        emotion_improvements: Vec::new(),
        score: Some(75),
    }
}

fn from_object(object: &Map<String, Value>, cleaned: &str) -> FeedbackResult {
    FeedbackResult {
        feedback: field(object, &["feedback"])
            .and_then(Value::as_str)
            .unwrap_or(cleaned)
            .to_string(),
        strengths: string_list(field(object, &["strengths"])),
        improvements: string_list(field(object, &["improvements"])),
        emotion_improvements: string_list(field(
            object,
            &["emotion_improvements", "emotionImprovements"],
        )),
        score: score_value(field(object, &["score"])),
    }
}

/// Reads a 0–100 score from a number or numeric string; floats are rounded and
/// out-of-range values clamped.
fn score_value(value: Option<&Value>) -> Option<u8> {
    let raw = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    Some(raw.round().clamp(0.0, MAX_SCORE) as u8)
}
