//! Feedback pipeline: validate → build prompt → call the model → normalize.

use tracing::{debug, info};

use crate::errors::ApiError;
use crate::feedback::models::{FeedbackRequest, FeedbackResult};
use crate::feedback::parser::{normalize_feedback, sample_feedback};
use crate::feedback::prompts::build_feedback_prompt;
use crate::llm_client::LanguageModel;

/// Generates feedback for one answer.
///
/// Without a provider the canned sample feedback is returned. Provider failures
/// and empty model output are reported as errors; malformed output is recovered.
pub async fn generate_feedback(
    llm: Option<&dyn LanguageModel>,
    request: &FeedbackRequest,
) -> Result<FeedbackResult, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::EmptyInput("Text answer is required".to_string()));
    }

    let prompt = build_feedback_prompt(&request.text, request.emotion_data.as_ref());

    let Some(llm) = llm else {
        info!("No LLM provider configured, returning sample feedback");
        return Ok(sample_feedback());
    };

    debug!(
        "Requesting feedback: answer_chars={}, emotion_data={}",
        request.text.chars().count(),
        request.emotion_data.is_some()
    );

    let raw = llm.generate(&prompt).await?;
    let outcome = normalize_feedback(Some(&raw))?;
    debug!("Feedback normalized ({})", outcome.label());

    Ok(outcome.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubModel;
    use crate::normalize::NormalizeError;

    fn request(text: &str) -> FeedbackRequest {
        FeedbackRequest {
            text: text.to_string(),
            emotion_data: None,
        }
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected_before_calling_model() {
        let model = StubModel::replying("{}");
        let err = generate_feedback(Some(&model), &request("   "))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::EmptyInput(_)));
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_no_provider_returns_sample() {
        let result = generate_feedback(None, &request("answer")).await.unwrap();
        assert_eq!(result, sample_feedback());
    }

    #[tokio::test]
    async fn test_model_json_is_normalized() {
        let model = StubModel::replying(
            "```json\n{\"feedback\": \"Nice\", \"strengths\": [\"Clear\"], \"score\": 91}\n```",
        );
        let result = generate_feedback(Some(&model), &request("answer"))
            .await
            .unwrap();
        assert_eq!(result.feedback, "Nice");
        assert_eq!(result.strengths, vec!["Clear".to_string()]);
        assert_eq!(result.score, Some(91));
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_model_output_is_an_error() {
        let model = StubModel::replying("");
        let err = generate_feedback(Some(&model), &request("answer"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Normalize(NormalizeError::EmptyResponse)
        ));
    }

    #[tokio::test]
    async fn test_provider_failure_is_an_error() {
        let model = StubModel::failing();
        let err = generate_feedback(Some(&model), &request("answer"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Provider(_)));
    }
}
