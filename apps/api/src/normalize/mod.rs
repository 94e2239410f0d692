//! Response normalization: turns raw model text into structured values.
//!
//! Every normalizer follows the same pipeline:
//! 1. empty / whitespace-only input → `NormalizeError::EmptyResponse`
//! 2. strip a wrapping code fence
//! 3. strict JSON parse
//! 4. on failure, a shape-specific recovery (never an error)
//!
//! The shape-specific parts live next to their domain (`feedback::parser`,
//! `questions::parser`, `resume::parser`); this module holds the shared pieces.

use thiserror::Error;

pub mod fence;
pub mod fields;
pub mod fragments;

pub use fence::strip_code_fence;
pub use fragments::json_object_fragments;

/// Characters of model output included in log lines.
const PREVIEW_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// The model returned nothing usable; the caller substitutes its default.
    #[error("Empty response from LLM")]
    EmptyResponse,
}

/// How a normalized value was obtained.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// Strict JSON parse of the cleaned text succeeded.
    Parsed(T),
    /// Strict parse failed; a shape-specific heuristic recovered a value.
    Recovered(T),
    /// Nothing could be recovered; the deterministic fallback was used.
    Fallback(T),
}

impl<T> Outcome<T> {
    pub fn into_inner(self) -> T {
        match self {
            Outcome::Parsed(v) | Outcome::Recovered(v) | Outcome::Fallback(v) => v,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Parsed(_) => "parsed",
            Outcome::Recovered(_) => "recovered",
            Outcome::Fallback(_) => "fallback",
        }
    }
}

/// Step 1 and 2 of the pipeline: reject empty output, strip fences.
pub fn clean_response(raw: Option<&str>) -> Result<&str, NormalizeError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(NormalizeError::EmptyResponse);
    }
    Ok(strip_code_fence(raw))
}

/// Short prefix of model output for log lines.
pub fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}
