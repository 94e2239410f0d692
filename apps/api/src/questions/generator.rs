//! Question pipeline: validate skills → build prompt → call the model → normalize.

use tracing::{debug, info, warn};

use crate::errors::ApiError;
use crate::llm_client::LanguageModel;
use crate::questions::mock::mock_questions;
use crate::questions::models::{Question, QuestionRequest};
use crate::questions::parser::normalize_questions;
use crate::questions::prompts::build_question_prompt;

/// Generates a question set for the requested skills.
///
/// Only an empty skill list is an error. A missing provider, a provider failure,
/// or an empty model reply all yield the mock set.
pub async fn generate_questions(
    llm: Option<&dyn LanguageModel>,
    request: &QuestionRequest,
) -> Result<Vec<Question>, ApiError> {
    let skills = request.cleaned_skills();
    if skills.is_empty() {
        return Err(ApiError::EmptyInput(
            "At least one skill is required".to_string(),
        ));
    }

    let Some(llm) = llm else {
        info!("No LLM provider configured, returning mock questions");
        return Ok(mock_questions());
    };

    let prompt = build_question_prompt(&skills);
    debug!("Requesting questions for {} skill(s)", skills.len());

    let raw = match llm.generate(&prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Question generation failed, returning mock questions: {e}");
            return Ok(mock_questions());
        }
    };

    match normalize_questions(Some(&raw)) {
        Ok(outcome) => {
            debug!("Questions normalized ({})", outcome.label());
            Ok(outcome.into_inner())
        }
        Err(e) => {
            warn!("{e}, returning mock questions");
            Ok(mock_questions())
        }
    }
}
