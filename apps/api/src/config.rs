use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

/// Which of the HTTP services this process mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceKind {
    FeedbackGenerator,
    QuestionGenerator,
    ResumeAnalyzer,
    All,
}

impl ServiceKind {
    /// Name reported by `GET /health`.
    pub fn name(self) -> &'static str {
        match self {
            ServiceKind::FeedbackGenerator => "feedback_generator",
            ServiceKind::QuestionGenerator => "question_generator",
            ServiceKind::ResumeAnalyzer => "resume_analyzer",
            ServiceKind::All => "interview_ai",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            ServiceKind::ResumeAnalyzer => 8000,
            ServiceKind::QuestionGenerator => 8001,
            ServiceKind::FeedbackGenerator => 8002,
            ServiceKind::All => 8080,
        }
    }

    pub fn serves_feedback(self) -> bool {
        matches!(self, ServiceKind::FeedbackGenerator | ServiceKind::All)
    }

    pub fn serves_questions(self) -> bool {
        matches!(self, ServiceKind::QuestionGenerator | ServiceKind::All)
    }

    pub fn serves_resume(self) -> bool {
        matches!(self, ServiceKind::ResumeAnalyzer | ServiceKind::All)
    }
}

impl FromStr for ServiceKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "feedback_generator" | "feedback" => Ok(ServiceKind::FeedbackGenerator),
            "question_generator" | "questions" => Ok(ServiceKind::QuestionGenerator),
            "resume_analyzer" | "resume" => Ok(ServiceKind::ResumeAnalyzer),
            "all" | "" => Ok(ServiceKind::All),
            other => Err(anyhow!("unknown service '{other}'")),
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Application configuration loaded from environment variables.
/// The provider key is optional; without it every service answers with its fallback.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub service: ServiceKind,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let service = match std::env::var("SERVICE") {
            Ok(raw) => raw
                .parse::<ServiceKind>()
                .context("SERVICE must be one of feedback_generator, question_generator, resume_analyzer, all")?,
            Err(_) => ServiceKind::All,
        };

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            Err(_) => service.default_port(),
        };

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY"),
            service,
            port,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Reads a variable, treating unset and blank the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
