use serde::{Deserialize, Serialize};

/// Number of questions requested per set. A target, not enforced on model output.
pub const QUESTION_SET_SIZE: usize = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub skills: Vec<String>,
}

impl QuestionRequest {
    /// Trimmed, non-blank skills in request order.
    pub fn cleaned_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Case-insensitive label lookup. Unknown labels map to `Medium`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "easy" | "beginner" => Difficulty::Easy,
            "hard" | "difficult" | "advanced" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }
}

/// One generated interview question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question_id: u32,
    pub question: String,
    pub difficulty: Difficulty,
    pub skill_area: String,
}
