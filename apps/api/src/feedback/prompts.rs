// Feedback generation prompt templates and the builder that fills them.

use crate::feedback::emotion::{emotion_insights, emotion_summary, ImprovementPolicy};
use crate::feedback::models::EmotionMetrics;
use crate::llm_client::prompts::{fill_template, JSON_OBJECT_ONLY};

/// Feedback prompt template.
/// Placeholders: {answer_text}, {emotion_context}, {emotion_instructions}, {json_only}.
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"You are an expert technical interviewer providing constructive feedback on interview answers.

Analyze the following interview answer and provide detailed feedback:

ANSWER TO ANALYZE:
{answer_text}
{emotion_context}
{emotion_instructions}
Provide feedback in the following JSON format:
{
    "feedback": "Overall feedback summary (3-4 sentences that INTEGRATES technical assessment with emotional/behavioral observations)",
    "strengths": [
        "Strength 1",
        "Strength 2",
        "Strength 3"
    ],
    "improvements": [
        "Area for improvement 1",
        "Area for improvement 2",
        "Area for improvement 3"
    ],
    "emotion_improvements": [
        "Emotion/behavioral feedback 1",
        "Emotion/behavioral feedback 2"
    ],
    "score": 85
}

EVALUATION CRITERIA:
1. Technical accuracy and depth
2. Clarity and communication
3. Problem-solving approach
4. Code/architecture quality (if applicable)
5. Completeness of answer
6. Confidence and presentation (MANDATORY if emotion data provided - must be mentioned in feedback)

SCORING GUIDE:
- 90-100: Excellent - Comprehensive, accurate, well-communicated, confident delivery
- 75-89: Good - Solid understanding with minor gaps, generally positive presentation
- 60-74: Fair - Basic understanding but needs improvement, may show nervousness or uncertainty
- 40-59: Needs Work - Significant gaps in knowledge, presentation issues may be evident
- 0-39: Poor - Major issues or incorrect information, confidence and clarity need significant improvement

INSTRUCTIONS:
- Be constructive and encouraging
- Provide specific, actionable feedback
- Highlight what was done well (both technically and in terms of delivery)
- Suggest concrete improvements (both content and presentation)
- Score should reflect overall answer quality INCLUDING delivery and confidence
- IF EMOTION DATA IS PROVIDED: the "feedback" field MUST naturally incorporate observations about confidence, stress levels, engagement, and emotional state. Do not treat emotions as separate - integrate them into the holistic assessment.

EMOTION IMPROVEMENTS SECTION (emotion_improvements field):
- This is a SEPARATE list specifically for emotional/behavioral interview performance
- IF EMOTION METRICS ARE GOOD (confidence >= 70%, stress < 40%, engagement >= 70%): give compliments and positive reinforcement
- IF EMOTION METRICS NEED IMPROVEMENT (confidence < 60%, stress > 50%, engagement < 60%): give specific, actionable, encouraging suggestions
- IF EMOTION DATA IS NOT PROVIDED: leave emotion_improvements as an empty array []
- Otherwise always provide 2-3 items in emotion_improvements

{json_only}"#;

/// Emotion section template. Placeholders: {summary}, {insights}, {policy}
const EMOTION_CONTEXT_TEMPLATE: &str = r#"
BEHAVIORAL & EMOTIONAL ANALYSIS (Tracked from question start to answer submission):
{summary}

EMOTION-BASED INSIGHTS:
{insights}

EMOTION IMPROVEMENT MODE: {policy}
"#;

/// Instructions for weaving emotion observations into the main feedback text.
const EMOTION_INTEGRATION_INSTRUCTIONS: &str = r#"
CRITICAL: You MUST integrate the emotion-based insights into the "feedback" field. The overall feedback summary should:
1. Mention the candidate's confidence level and emotional state when relevant
2. Connect emotional observations to their answer quality (e.g., "Your confident demeanor complemented your technical explanation" or "Some nervousness was evident, which may have affected the clarity of your response")
3. Make the feedback feel holistic - combining technical assessment with behavioral observations
4. Do NOT create a separate section for emotions - weave them naturally into the main feedback text
5. The feedback should read as one cohesive assessment that considers both content and delivery
"#;

/// Builds the feedback prompt. The answer text is embedded verbatim.
pub fn build_feedback_prompt(answer_text: &str, emotion: Option<&EmotionMetrics>) -> String {
    let (emotion_context, emotion_instructions) = match emotion {
        Some(metrics) => (
            emotion_context(metrics),
            EMOTION_INTEGRATION_INSTRUCTIONS.to_string(),
        ),
        None => (String::new(), String::new()),
    };

    fill_template(
        FEEDBACK_PROMPT_TEMPLATE,
        &[
            ("answer_text", answer_text),
            ("emotion_context", emotion_context.as_str()),
            ("emotion_instructions", emotion_instructions.as_str()),
            ("json_only", JSON_OBJECT_ONLY),
        ],
    )
}

fn emotion_context(metrics: &EmotionMetrics) -> String {
    let insights = emotion_insights(metrics);
    let insights = if insights.is_empty() {
        "No significant emotional patterns detected".to_string()
    } else {
        insights.join("\n")
    };

    let summary = emotion_summary(metrics).join("\n");

    fill_template(
        EMOTION_CONTEXT_TEMPLATE,
        &[
            ("summary", summary.as_str()),
            ("insights", insights.as_str()),
            ("policy", ImprovementPolicy::from_metrics(metrics).directive()),
        ],
    )
}
