//! Rule-based reading of emotion metrics.
//!
//! Thresholds are inclusive/exclusive exactly as written below; the boundaries
//! are part of the contract (confidence 70 is "high", stress 60 is not "elevated").

use std::collections::HashSet;

use crate::feedback::models::{EmotionMetrics, MetricsSource};

const HIGH_CONFIDENCE: f64 = 70.0;
const MODERATE_CONFIDENCE: f64 = 50.0;
const ELEVATED_STRESS: f64 = 60.0;
const LOW_STRESS: f64 = 30.0;
const HIGH_ENGAGEMENT: f64 = 70.0;
const LOW_ENGAGEMENT: f64 = 50.0;

const COMPLIMENT_MIN_CONFIDENCE: f64 = 70.0;
const COMPLIMENT_MAX_STRESS: f64 = 40.0;
const COMPLIMENT_MIN_ENGAGEMENT: f64 = 70.0;
const SUGGEST_BELOW_CONFIDENCE: f64 = 60.0;
const SUGGEST_ABOVE_STRESS: f64 = 50.0;
const SUGGEST_BELOW_ENGAGEMENT: f64 = 60.0;

const POSITIVE_EMOTIONS: &[&str] = &["happy", "confident", "neutral"];
const CAUTIONARY_EMOTIONS: &[&str] = &["sad", "fear", "angry"];

/// Labels shown in the emotion journey line.
const JOURNEY_WINDOW: usize = 10;

/// What the model should put in `emotion_improvements`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImprovementPolicy {
    /// confidence ≥70, stress <40 and engagement ≥70.
    Compliment,
    /// confidence <60, stress >50 or engagement <60.
    Suggest,
    /// Neither rule fires: acknowledge strengths and give one or two suggestions.
    Balanced,
}

impl ImprovementPolicy {
    pub fn from_metrics(metrics: &EmotionMetrics) -> Self {
        if metrics.avg_confidence >= COMPLIMENT_MIN_CONFIDENCE
            && metrics.avg_stress < COMPLIMENT_MAX_STRESS
            && metrics.avg_engagement >= COMPLIMENT_MIN_ENGAGEMENT
        {
            ImprovementPolicy::Compliment
        } else if metrics.avg_confidence < SUGGEST_BELOW_CONFIDENCE
            || metrics.avg_stress > SUGGEST_ABOVE_STRESS
            || metrics.avg_engagement < SUGGEST_BELOW_ENGAGEMENT
        {
            ImprovementPolicy::Suggest
        } else {
            ImprovementPolicy::Balanced
        }
    }

    pub fn directive(self) -> &'static str {
        match self {
            ImprovementPolicy::Compliment => {
                "COMPLIMENT: the emotion metrics are good. Fill emotion_improvements with specific positive reinforcement."
            }
            ImprovementPolicy::Suggest => {
                "SUGGEST: the emotion metrics need improvement. Fill emotion_improvements with specific, actionable, encouraging suggestions."
            }
            ImprovementPolicy::Balanced => {
                "BALANCED: the emotion metrics are mixed. Acknowledge what went well and add one or two gentle suggestions."
            }
        }
    }
}

/// Narrative insights derived from the metrics, in a fixed order:
/// confidence, stress, engagement, predominant emotion.
pub fn emotion_insights(metrics: &EmotionMetrics) -> Vec<String> {
    let mut insights = Vec::new();

    if metrics.avg_confidence >= HIGH_CONFIDENCE {
        insights.push(
            "The candidate demonstrated high confidence throughout the response".to_string(),
        );
    } else if metrics.avg_confidence >= MODERATE_CONFIDENCE {
        insights.push(
            "The candidate showed moderate confidence with room for improvement".to_string(),
        );
    } else {
        insights.push("The candidate appeared less confident, which may indicate nervousness or uncertainty".to_string());
    }

    if metrics.avg_stress > ELEVATED_STRESS {
        insights.push("Elevated stress levels were detected, suggesting the candidate may benefit from better preparation or stress management techniques".to_string());
    } else if metrics.avg_stress < LOW_STRESS {
        insights.push(
            "The candidate maintained low stress levels, indicating good composure".to_string(),
        );
    }

    if metrics.avg_engagement >= HIGH_ENGAGEMENT {
        insights.push("High engagement and attentiveness were observed".to_string());
    } else if metrics.avg_engagement < LOW_ENGAGEMENT {
        insights.push("Lower engagement levels suggest the candidate may need to improve focus and active participation".to_string());
    }

    let emotion = metrics.predominant_emotion.as_str();
    if POSITIVE_EMOTIONS.contains(&emotion) {
        insights.push("The candidate maintained a positive or neutral emotional state, which is favorable for interview performance".to_string());
    } else if CAUTIONARY_EMOTIONS.contains(&emotion) {
        insights.push(format!(
            "The candidate's predominant emotion ({emotion}) may have impacted their communication effectiveness"
        ));
    }

    insights
}

/// Factual lines describing the metrics themselves.
pub fn emotion_summary(metrics: &EmotionMetrics) -> Vec<String> {
    let mut lines = vec![
        format!("PREDOMINANT EMOTION: {}", metrics.predominant_emotion),
        format!("AVERAGE CONFIDENCE LEVEL: {}%", metrics.avg_confidence),
        format!("AVERAGE STRESS LEVEL: {}%", metrics.avg_stress),
        format!("AVERAGE ENGAGEMENT: {}%", metrics.avg_engagement),
    ];

    match metrics.source {
        MetricsSource::TextFallback => {
            lines.push(
                "DATA SOURCE: Text-based analysis (video tracking unavailable)".to_string(),
            );
            if let Some(note) = metrics.analysis_note.as_deref().filter(|n| !n.is_empty()) {
                lines.push(format!("NOTE: {note}"));
            }
        }
        MetricsSource::Video => lines.push("DATA SOURCE: Video-based tracking".to_string()),
    }

    if !metrics.emotion_history.is_empty() {
        let distinct: HashSet<&str> = metrics.emotion_history.iter().map(String::as_str).collect();
        if distinct.len() > 1 {
            let skip = metrics.emotion_history.len().saturating_sub(JOURNEY_WINDOW);
            let journey: Vec<&str> = metrics.emotion_history[skip..]
                .iter()
                .map(String::as_str)
                .collect();
            lines.push(format!(
                "EMOTION TRANSITIONS: {} different emotions detected",
                distinct.len()
            ));
            lines.push(format!("EMOTION JOURNEY: {}", journey.join(", ")));
        } else {
            lines.push(format!(
                "EMOTION STABILITY: Maintained {} throughout",
                metrics.predominant_emotion
            ));
        }
    }

    if metrics.total_samples > 0 {
        lines.push(format!(
            "ANALYSIS DURATION: {:.1} seconds ({} samples)",
            metrics.duration_ms as f64 / 1000.0,
            metrics.total_samples
        ));
    }

    lines
}
