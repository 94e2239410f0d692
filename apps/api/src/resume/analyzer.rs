//! Hybrid skill extraction: keyword scan baseline, refined by the model when available.

use tracing::{debug, info, warn};

use crate::llm_client::LanguageModel;
use crate::resume::keywords::scan_keywords;
use crate::resume::models::SkillExtractionResult;
use crate::resume::parser::normalize_skill_report;
use crate::resume::prompts::build_resume_prompt;

/// Extracts skills from resume text. Never fails: without a provider, or when the
/// model call or its output is unusable, the keyword-scan baseline is returned.
pub async fn analyze_resume_text(
    llm: Option<&dyn LanguageModel>,
    text: &str,
) -> SkillExtractionResult {
    if text.trim().is_empty() {
        warn!("Resume text is empty, nothing to analyze");
        return SkillExtractionResult::default();
    }

    let mut result = scan_keywords(text);
    debug!(
        "Keyword scan found {} tech / {} soft skills",
        result.tech_skills.len(),
        result.soft_skills.len()
    );

    let Some(llm) = llm else {
        info!("No LLM provider configured, returning keyword scan only");
        return result;
    };

    let raw = match llm.generate(&build_resume_prompt(text)).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Skill refinement failed, returning keyword scan only: {e}");
            return result;
        }
    };

    match normalize_skill_report(Some(&raw)) {
        Ok(outcome) if outcome.is_fallback() => {
            debug!("Skill report unusable, returning keyword scan only");
        }
        Ok(outcome) => {
            debug!("Skill report normalized ({})", outcome.label());
            result.merge(outcome.into_inner());
        }
        Err(e) => warn!("{e}, returning keyword scan only"),
    }

    if result.is_empty() {
        info!("No skills found in resume text");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubModel;

    const RESUME: &str = "Backend engineer. Python, Docker, PostgreSQL. Known for Leadership.";

    #[tokio::test]
    async fn test_blank_text_skips_everything() {
        let model = StubModel::replying(r#"{"tech_skills": ["Rust"]}"#);
        let result = analyze_resume_text(Some(&model), "  \n").await;
        assert!(result.is_empty());
        assert_eq!(model.calls(), 0);
    }

    #[tokio::test]
    async fn test_no_provider_returns_keyword_scan() {
        let result = analyze_resume_text(None, RESUME).await;
        assert_eq!(result, scan_keywords(RESUME));
        assert!(result.tech_skills.contains(&"Docker".to_string()));
    }

    #[tokio::test]
    async fn test_model_items_are_merged_after_baseline() {
        let model = StubModel::replying(
            "```json\n{\"tech_skills\": [\"Docker\", \" gRPC \"], \"soft_skills\": [\"leadership\"], \"projects\": [\"Billing pipeline\"]}\n```",
        );
        let result = analyze_resume_text(Some(&model), RESUME).await;
        let baseline = scan_keywords(RESUME);

        assert_eq!(&result.tech_skills[..baseline.tech_skills.len()], &baseline.tech_skills[..]);
        assert_eq!(result.tech_skills.last().map(String::as_str), Some("gRPC"));
        assert_eq!(
            result.tech_skills.iter().filter(|s| *s == "Docker").count(),
            1
        );
        // Case-sensitive merge keeps the model's lowercase variant.
        assert!(result.soft_skills.contains(&"Leadership".to_string()));
        assert!(result.soft_skills.contains(&"leadership".to_string()));
        assert_eq!(result.projects, vec!["Billing pipeline".to_string()]);
    }

    #[tokio::test]
    async fn test_malformed_model_output_keeps_baseline() {
        let model = StubModel::replying("tech skills: Rust, Go");
        let result = analyze_resume_text(Some(&model), RESUME).await;
        assert_eq!(result, scan_keywords(RESUME));
    }

    #[tokio::test]
    async fn test_model_report_fills_an_empty_baseline() {
        let model = StubModel::replying(r#"{"projects": ["Shiftboard"]}"#);
        let result = analyze_resume_text(Some(&model), "Worked at a bakery.").await;
        assert!(result.tech_skills.is_empty());
        assert_eq!(result.projects, vec!["Shiftboard".to_string()]);
    }

    #[tokio::test]
    async fn test_provider_failure_keeps_baseline() {
        let model = StubModel::failing();
        let result = analyze_resume_text(Some(&model), RESUME).await;
        assert_eq!(result, scan_keywords(RESUME));
    }
}
