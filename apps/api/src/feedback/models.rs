use serde::{Deserialize, Serialize};

/// Where the emotion metrics came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum MetricsSource {
    #[default]
    #[serde(rename = "video_tracking", alias = "video")]
    Video,
    #[serde(
        rename = "text_analysis_fallback",
        alias = "text-fallback",
        alias = "text_fallback"
    )]
    TextFallback,
}

/// Behavioral signals captured while the candidate answered.
/// Percentages are on a 0–100 scale.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionMetrics {
    #[serde(default = "default_emotion")]
    pub predominant_emotion: String,
    #[serde(default)]
    pub avg_confidence: f64,
    #[serde(default)]
    pub avg_stress: f64,
    #[serde(default)]
    pub avg_engagement: f64,
    #[serde(default)]
    pub emotion_history: Vec<String>,
    #[serde(default)]
    pub total_samples: u64,
    #[serde(default, alias = "duration")]
    pub duration_ms: u64,
    #[serde(default)]
    pub source: MetricsSource,
    #[serde(default)]
    pub analysis_note: Option<String>,
}

fn default_emotion() -> String {
    "neutral".to_string()
}

impl Default for EmotionMetrics {
    fn default() -> Self {
        Self {
            predominant_emotion: default_emotion(),
            avg_confidence: 0.0,
            avg_stress: 0.0,
            avg_engagement: 0.0,
            emotion_history: Vec::new(),
            total_samples: 0,
            duration_ms: 0,
            source: MetricsSource::default(),
            analysis_note: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedbackRequest {
    #[serde(default, alias = "text_ans")]
    pub text: String,
    #[serde(default, alias = "emotionMetrics", alias = "emotionData")]
    pub emotion_data: Option<EmotionMetrics>,
}

/// Structured feedback on one interview answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackResult {
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub emotion_improvements: Vec<String>,
    /// 0–100. `None` when the model did not report one, never defaulted to zero.
    pub score: Option<u8>,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub success: bool,
    pub data: FeedbackResult,
}

impl FeedbackResponse {
    pub fn ok(data: FeedbackResult) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
