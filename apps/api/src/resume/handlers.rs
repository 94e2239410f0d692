//! Axum route handlers for the Resume API.

use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::ApiError;
use crate::resume::analyzer::analyze_resume_text;
use crate::resume::models::{ResumeRequest, ResumeResponse};
use crate::resume::pdf::{extract_text_from_bytes, extract_text_from_path};
use crate::state::AppState;

/// Multipart field carrying the PDF on upload.
const UPLOAD_FIELD: &str = "file";

/// POST /api/analyze_resume
///
/// Reads the PDF at `filePath` on the server and returns `{data: SkillExtractionResult}`.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    payload: Result<Json<ResumeRequest>, JsonRejection>,
) -> Result<Json<ResumeResponse>, ApiError> {
    let Json(request) = payload?;
    let file_path = request.file_path.trim();
    if file_path.is_empty() {
        return Err(ApiError::EmptyInput("File path is required".to_string()));
    }

    info!("Analyzing resume at {file_path}");
    let text = extract_text_from_path(file_path).await;
    let data = analyze_resume_text(state.llm(), &text).await;

    Ok(Json(ResumeResponse { data }))
}

/// POST /api/analyze_resume/upload
///
/// Same as `/api/analyze_resume`, but the PDF arrives as the multipart field `file`.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeResponse>, ApiError> {
    let mut pdf: Option<Bytes> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some(UPLOAD_FIELD) {
            pdf = Some(field.bytes().await?);
            break;
        }
    }

    let pdf = pdf.filter(|b| !b.is_empty()).ok_or_else(|| {
        ApiError::EmptyInput(format!("A PDF file field named '{UPLOAD_FIELD}' is required"))
    })?;

    info!("Analyzing uploaded resume ({} bytes)", pdf.len());
    let text = extract_text_from_bytes(pdf).await;
    let data = analyze_resume_text(state.llm(), &text).await;

    Ok(Json(ResumeResponse { data }))
}
