//! Axum route handlers for the Feedback API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::ApiError;
use crate::feedback::generator::generate_feedback;
use crate::feedback::models::{FeedbackRequest, FeedbackResponse};
use crate::state::AppState;

/// POST /api/feedbacke_generator
///
/// Returns `{success: true, data: FeedbackResult}` or `{success: false, error}`.
pub async fn handle_generate_feedback(
    State(state): State<AppState>,
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<Json<FeedbackResponse>, ApiError> {
    let Json(request) = payload?;
    let data = generate_feedback(state.llm(), &request).await?;
    Ok(Json(FeedbackResponse::ok(data)))
}
