//! Axum route handlers for the Question API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::ApiError;
use crate::questions::generator::generate_questions;
use crate::questions::models::{Question, QuestionRequest};
use crate::state::AppState;

/// POST /api/question_generator
///
/// Returns a bare JSON array of questions, or `{success: false, error}` when no
/// skills were supplied.
pub async fn handle_generate_questions(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<Vec<Question>>, ApiError> {
    let Json(request) = payload?;
    let questions = generate_questions(state.llm(), &request).await?;
    Ok(Json(questions))
}
