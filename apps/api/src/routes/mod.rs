pub mod health;

use std::any::Any;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::catch_panic::CatchPanicLayer;

use crate::feedback::handlers::handle_generate_feedback;
use crate::questions::handlers::handle_generate_questions;
use crate::resume::handlers::{handle_analyze_resume, handle_upload_resume};
use crate::state::AppState;

/// Upload cap for resume PDFs.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Builds the router for the configured service. Routes of services that are
/// not selected are not mounted.
pub fn build_router(state: AppState) -> Router {
    let service = state.config.service;
    let mut router = Router::new().route("/health", get(health::health_handler));

    if service.serves_feedback() {
        router = router.route("/api/feedbacke_generator", post(handle_generate_feedback));
    }
    if service.serves_questions() {
        router = router.route("/api/question_generator", post(handle_generate_questions));
    }
    if service.serves_resume() {
        router = router
            .route("/api/analyze_resume", post(handle_analyze_resume))
            .route(
                "/api/analyze_resume/upload",
                post(handle_upload_resume).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
            );
    }

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .with_state(state)
}

/// Turns a handler panic into the usual JSON error body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!("Handler panicked: {detail}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "success": false,
            "error": "An internal server error occurred",
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{Config, ServiceKind};
    use crate::llm_client::testing::StubModel;
    use crate::llm_client::LanguageModel;
    use crate::questions::mock::mock_questions;

    fn app(service: ServiceKind, llm: Option<Arc<dyn LanguageModel>>) -> Router {
        build_router(AppState {
            llm,
            config: Config {
                gemini_api_key: None,
                service,
                port: 0,
                rust_log: "info".to_string(),
            },
        })
    }

    async fn read_json(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn post_raw(app: Router, uri: &str, body: String) -> Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        read_json(post_raw(app, uri, body.to_string()).await).await
    }

    async fn get_health(app: Router) -> Value {
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        read_json(response).await.1
    }

    #[tokio::test]
    async fn test_health_names_each_service() {
        for (service, name) in [
            (ServiceKind::FeedbackGenerator, "feedback_generator"),
            (ServiceKind::QuestionGenerator, "question_generator"),
            (ServiceKind::ResumeAnalyzer, "resume_analyzer"),
        ] {
            let body = get_health(app(service, None)).await;
            assert_eq!(body["status"], "healthy");
            assert_eq!(body["service"], name);
        }
    }

    #[tokio::test]
    async fn test_unselected_service_is_not_mounted() {
        let response = post_raw(
            app(ServiceKind::ResumeAnalyzer, None),
            "/api/feedbacke_generator",
            json!({"text": "hi"}).to_string(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_feedback_without_provider_returns_sample() {
        let (status, body) = post_json(
            app(ServiceKind::All, None),
            "/api/feedbacke_generator",
            json!({"text": "I would shard by tenant."}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["score"], 75);
    }

    #[tokio::test]
    async fn test_feedback_blank_text_is_error_body() {
        let (status, body) = post_json(
            app(ServiceKind::FeedbackGenerator, None),
            "/api/feedbacke_generator",
            json!({"text": "   "}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": false, "error": "Text answer is required"}));
    }

    #[tokio::test]
    async fn test_feedback_prose_reply_becomes_feedback_text() {
        let model: Arc<dyn LanguageModel> =
            Arc::new(StubModel::replying("Good answer, but add an example."));
        let (_, body) = post_json(
            app(ServiceKind::FeedbackGenerator, Some(model)),
            "/api/feedbacke_generator",
            json!({"text": "answer", "emotion_data": {"avgConfidence": 80}}),
        )
        .await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["feedback"], "Good answer, but add an example.");
        assert_eq!(body["data"]["strengths"], json!([]));
        assert!(body["data"]["score"].is_null());
    }

    #[tokio::test]
    async fn test_feedback_provider_failure_is_error_body() {
        let model: Arc<dyn LanguageModel> = Arc::new(StubModel::failing());
        let (status, body) = post_json(
            app(ServiceKind::FeedbackGenerator, Some(model)),
            "/api/feedbacke_generator",
            json!({"text": "answer"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("model overloaded"));
    }

    #[tokio::test]
    async fn test_malformed_body_still_gets_json() {
        let response = post_raw(
            app(ServiceKind::FeedbackGenerator, None),
            "/api/feedbacke_generator",
            "{not json".to_string(),
        )
        .await;
        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_questions_without_provider_return_mock_array() {
        let (status, body) = post_json(
            app(ServiceKind::QuestionGenerator, None),
            "/api/question_generator",
            json!({"skills": ["React", "Node.js"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::to_value(mock_questions()).unwrap());
    }

    #[tokio::test]
    async fn test_questions_empty_skills_is_error_body() {
        let (_, body) = post_json(
            app(ServiceKind::QuestionGenerator, None),
            "/api/question_generator",
            json!({"skills": []}),
        )
        .await;
        assert_eq!(body["success"], false);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_questions_single_object_reply_is_singleton_array() {
        let model: Arc<dyn LanguageModel> = Arc::new(StubModel::replying(
            r#"```json
{"question_id": 1, "question": "How do you profile a slow endpoint?", "difficulty": "Medium", "skill_area": "Node.js"}
```"#,
        ));
        let (_, body) = post_json(
            app(ServiceKind::QuestionGenerator, Some(model)),
            "/api/question_generator",
            json!({"skills": ["Node.js"]}),
        )
        .await;
        let questions = body.as_array().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0]["difficulty"], "Medium");
    }

    #[tokio::test]
    async fn test_resume_blank_path_is_error_body() {
        let (_, body) = post_json(
            app(ServiceKind::ResumeAnalyzer, None),
            "/api/analyze_resume",
            json!({"filePath": " "}),
        )
        .await;
        assert_eq!(body, json!({"success": false, "error": "File path is required"}));
    }

    #[tokio::test]
    async fn test_resume_unreadable_file_returns_empty_data() {
        let model = Arc::new(StubModel::replying(r#"{"tech_skills": ["Rust"]}"#));
        let (status, body) = post_json(
            app(ServiceKind::ResumeAnalyzer, Some(model.clone() as Arc<dyn LanguageModel>)),
            "/api/analyze_resume",
            json!({"filePath": "/no/such/resume.pdf"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"data": {"tech_skills": [], "soft_skills": [], "projects": []}})
        );
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_error_body() {
        let boundary = "XBOUNDARY";
        let body = format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"other\"\r\n\r\nhello\r\n--{boundary}--\r\n"
        );
        let response = app(ServiceKind::ResumeAnalyzer, None)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/analyze_resume/upload")
                    .header(
                        "content-type",
                        format!("multipart/form-data; boundary={boundary}"),
                    )
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let (status, body) = read_json(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_panic_handler_answers_with_json() {
        let (status, body) = read_json(handle_panic(Box::new("boom"))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }
}
